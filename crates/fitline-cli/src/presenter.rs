//! CLI table presenter.

use fitline_core::FitModel;

use crate::output::{format_equation, format_value};

/// Prints the residual table for a model.
pub struct TablePresenter {
    verbose: bool,
    quiet: bool,
}

impl TablePresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Render the table to a string.
    #[must_use]
    pub fn render(&self, model: &FitModel) -> String {
        if self.quiet {
            return format!("{}\n", format_value(model.total_squared_error()));
        }

        let mut out = String::new();
        out.push_str(&format_equation(model.intercept(), model.slope()));
        out.push('\n');
        out.push_str(&format!(
            "{:>4} {:>4} {:>4} {:>8} {:>8}\n",
            "#", "x", "y", "y-ŷ", "(y-ŷ)²"
        ));
        for p in model.points() {
            out.push_str(&format!(
                "{:>4} {:>4} {:>4} {:>8} {:>8}\n",
                p.id,
                p.x,
                p.y,
                format_value(model.residual(p)),
                format_value(model.squared_error(p)),
            ));
        }
        out.push_str(&format!("{:-<32}\n", ""));
        out.push_str(&format!(
            "SSE = {}\n",
            format_value(model.total_squared_error())
        ));
        if self.verbose {
            out.push_str(&format!(
                "points: {}/{}\ngrid: [{}, {}]\n",
                model.len(),
                model.capacity(),
                model.min_value(),
                model.max_value()
            ));
        }
        out
    }

    /// Print the table (or only the SSE in quiet mode) to stdout.
    pub fn present(&self, model: &FitModel) {
        print!("{}", self.render(model));
    }

    /// Print an error.
    pub fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
