//! # fitline-core
//!
//! Fit model for the interactive line-fitting widget: the point
//! collection, the two line coefficients, residual computations, observer
//! plumbing for view refreshes, and session persistence.

pub mod constants;
pub mod model;
pub mod observer;
pub mod observers;
pub mod point;
pub mod session;

// Re-exports
pub use constants::{
    exit_codes, COEFFICIENT_STEP, DEFAULT_INTERCEPT, DEFAULT_SLOPE, MAX_POINTS, MAX_VALUE,
    MIN_VALUE,
};
pub use model::{Coefficient, FitError, FitModel};
pub use observer::{FitObserver, FitSubject, ModelEvent};
pub use point::{Point, PointId};
pub use session::Session;

/// Sum of squared errors of a line over raw samples.
///
/// Convenience for simple use cases. For the full widget state (stable
/// identities, capacity, refresh events), use [`FitModel`] directly.
///
/// # Example
/// ```
/// let sse = fitline_core::sse(&[(0.0, 1.0), (2.0, 3.0)], 0.0, 1.0);
/// assert!((sse - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn sse(samples: &[(f64, f64)], intercept: f64, slope: f64) -> f64 {
    samples
        .iter()
        .map(|&(x, y)| {
            let r = y - (intercept + slope * x);
            r * r
        })
        .sum()
}
