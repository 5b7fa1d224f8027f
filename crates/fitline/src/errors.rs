//! Error handling and exit codes.

use fitline_core::exit_codes;
use fitline_core::FitError;

/// Map a fit error to its process exit code.
#[must_use]
pub fn handle_error(err: &FitError) -> i32 {
    match err {
        FitError::CapacityExceeded { .. } | FitError::OutOfRange { .. } | FitError::UnknownPoint(_) => {
            exit_codes::ERROR_GENERIC
        }
        FitError::Config(_) => exit_codes::ERROR_CONFIG,
        FitError::Session(_) => exit_codes::ERROR_SESSION,
        FitError::Cancelled => exit_codes::ERROR_CANCELED,
    }
}
