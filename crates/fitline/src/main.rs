//! FitLine-rs: interactive least-squares line fitting in the terminal.

use fitline_core::exit_codes;
use fitline_core::FitError;
use fitline_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<FitError>()
            .map_or(exit_codes::ERROR_GENERIC, errors::handle_error);
        std::process::exit(code);
    }
}
