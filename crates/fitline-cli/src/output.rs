//! CLI output formatting.

/// Format a derived value with the table's 2-decimal precision.
#[must_use]
pub fn format_value(v: f64) -> String {
    format!("{v:.2}")
}

/// Format the line equation for display.
#[must_use]
pub fn format_equation(intercept: f64, slope: f64) -> String {
    let sign = if slope < 0.0 { '-' } else { '+' };
    format!("ŷ = {intercept:.2} {sign} {:.2}·x", slope.abs())
}
