//! Point records and their identities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a placed point.
///
/// Ids are allocated by the model from a monotonically increasing counter
/// and never reused, so a removed id stays dead for the model's lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-placed observation on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Stable identity, unique within the owning model.
    pub id: PointId,
    /// Grid x coordinate.
    pub x: i32,
    /// Grid y coordinate.
    pub y: i32,
}
