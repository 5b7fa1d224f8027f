//! Session persistence (load/save).
//!
//! A session is the dataset plus the coefficient pair, written as pretty
//! JSON. Point ids are not persisted: identity is a runtime notion, and
//! restore assigns fresh ids through the normal counter.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{Coefficient, FitError, FitModel};

/// Snapshot of the dataset and coefficients, as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Point coordinates in insertion order.
    pub points: Vec<(i32, i32)>,
    /// Intercept of the fitted line.
    pub intercept: f64,
    /// Slope of the fitted line.
    pub slope: f64,
}

impl Session {
    /// Capture the current model state.
    #[must_use]
    pub fn capture(model: &FitModel) -> Self {
        Self {
            points: model.points().iter().map(|p| (p.x, p.y)).collect(),
            intercept: model.intercept(),
            slope: model.slope(),
        }
    }

    /// Replay this session into a model.
    ///
    /// Points go through `add_point`, so grid bounds and the capacity
    /// limit stay enforced for hand-edited files.
    pub fn restore(&self, model: &mut FitModel) -> Result<(), FitError> {
        model.set_coefficient(Coefficient::Intercept, self.intercept);
        model.set_coefficient(Coefficient::Slope, self.slope);
        for &(x, y) in &self.points {
            model.add_point(x, y)?;
        }
        Ok(())
    }
}

/// Load a session from a JSON file.
pub fn load_from_path(path: &Path) -> Result<Session, FitError> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| FitError::Session(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&data)
        .map_err(|e| FitError::Session(format!("cannot parse {}: {e}", path.display())))
}

/// Save a session to a JSON file (pretty-printed).
pub fn save_to_path(session: &Session, path: &Path) -> std::io::Result<()> {
    let content = serde_json::to_string_pretty(session).map_err(std::io::Error::other)?;
    std::fs::write(path, content)
}
