//! Application entry point and dispatch.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use crossbeam_channel::unbounded;

use fitline_cli::TablePresenter;
use fitline_core::session::{self, Session};
use fitline_core::{Coefficient, FitError, FitModel};
use fitline_tui::{TuiApp, TuiEventBridge};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fitline_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    config.validate()?;
    let model = build_model(config)?;

    // Table mode
    if config.table {
        return run_table(config, &model);
    }

    // TUI mode
    run_tui(config, model)
}

/// Build the model from flags and an optional session file.
fn build_model(config: &AppConfig) -> Result<FitModel> {
    let mut model = FitModel::with_config(config.min, config.max, config.max_points)?;
    model.set_coefficient(Coefficient::Intercept, config.intercept);
    model.set_coefficient(Coefficient::Slope, config.slope);
    if let Some(ref path) = config.load {
        let loaded = session::load_from_path(Path::new(path))?;
        loaded.restore(&mut model)?;
        tracing::info!(%path, points = model.len(), "session loaded");
    }
    Ok(model)
}

fn run_table(config: &AppConfig, model: &FitModel) -> Result<()> {
    let presenter = TablePresenter::new(config.verbose, config.quiet);
    presenter.present(model);
    write_output(config, model)
}

fn run_tui(config: &AppConfig, model: FitModel) -> Result<()> {
    let (tx, rx) = unbounded();
    model.register_observer(Arc::new(TuiEventBridge::new(tx)));

    let mut app = TuiApp::new(model, rx);
    app.run()?;

    // Ctrl+C abandons the session; a normal quit writes it out.
    if app.cancelled {
        return Err(FitError::Cancelled.into());
    }
    write_output(config, app.model())
}

fn write_output(config: &AppConfig, model: &FitModel) -> Result<()> {
    if let Some(ref path) = config.output {
        let snapshot = Session::capture(model);
        session::save_to_path(&snapshot, Path::new(path))?;
        tracing::info!(%path, "session written");
    }
    Ok(())
}
