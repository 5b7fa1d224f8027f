//! Application configuration from CLI flags and environment.

use clap::Parser;

use fitline_core::{constants, FitError};

/// FitLine-rs: interactive least-squares line fitting in the terminal.
#[derive(Parser, Debug)]
#[command(name = "fitline", version, about)]
pub struct AppConfig {
    /// Smallest selectable coordinate on both axes.
    #[arg(
        long,
        default_value_t = constants::MIN_VALUE,
        allow_negative_numbers = true,
        env = "FITLINE_MIN"
    )]
    pub min: i32,

    /// Largest selectable coordinate on both axes.
    #[arg(
        long,
        default_value_t = constants::MAX_VALUE,
        allow_negative_numbers = true,
        env = "FITLINE_MAX"
    )]
    pub max: i32,

    /// Maximum number of points.
    #[arg(long, default_value_t = constants::MAX_POINTS, env = "FITLINE_MAX_POINTS")]
    pub max_points: usize,

    /// Initial intercept of the fitted line.
    #[arg(
        short = 'a',
        long,
        default_value_t = constants::DEFAULT_INTERCEPT,
        allow_negative_numbers = true
    )]
    pub intercept: f64,

    /// Initial slope of the fitted line.
    #[arg(
        short = 'b',
        long,
        default_value_t = constants::DEFAULT_SLOPE,
        allow_negative_numbers = true
    )]
    pub slope: f64,

    /// Load a session file at startup.
    #[arg(short, long)]
    pub load: Option<String>,

    /// Write the session to this file on exit.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the residual table and exit instead of launching the TUI.
    #[arg(short, long)]
    pub table: bool,

    /// Quiet mode (table mode prints only the SSE).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validate flag combinations the type system cannot.
    pub fn validate(&self) -> Result<(), FitError> {
        if self.min >= self.max {
            return Err(FitError::Config(format!(
                "--min ({}) must be below --max ({})",
                self.min, self.max
            )));
        }
        if self.max_points == 0 {
            return Err(FitError::Config("--max-points must be at least 1".into()));
        }
        if !self.intercept.is_finite() || !self.slope.is_finite() {
            return Err(FitError::Config("coefficients must be finite".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        <AppConfig as Parser>::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults_match_the_widget() {
        let config = parse(&["fitline"]);
        assert_eq!(config.min, -1);
        assert_eq!(config.max, 7);
        assert_eq!(config.max_points, 10);
        assert!((config.intercept - 0.5).abs() < f64::EPSILON);
        assert!((config.slope - 0.5).abs() < f64::EPSILON);
        assert!(!config.table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn negative_values_parse() {
        let config = parse(&["fitline", "--min", "-5", "-a", "-1.5", "-b", "-0.25"]);
        assert_eq!(config.min, -5);
        assert!((config.intercept + 1.5).abs() < f64::EPSILON);
        assert!((config.slope + 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn inverted_bounds_rejected() {
        let config = parse(&["fitline", "--min", "5", "--max", "2"]);
        assert!(matches!(config.validate(), Err(FitError::Config(_))));
    }

    #[test]
    fn zero_capacity_rejected() {
        let config = parse(&["fitline", "--max-points", "0"]);
        assert!(matches!(config.validate(), Err(FitError::Config(_))));
    }

    #[test]
    fn nan_coefficient_rejected() {
        let config = parse(&["fitline", "-a", "NaN"]);
        assert!(matches!(config.validate(), Err(FitError::Config(_))));
    }
}
