//! The fit model: owned point collection, line coefficients, and derived
//! residual computations.
//!
//! `FitModel` is the single mutation surface. Views never poke at fields;
//! they call the operation methods and subscribe through the observer
//! subject to learn when derived values must be recomputed.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::constants::{DEFAULT_INTERCEPT, DEFAULT_SLOPE, MAX_POINTS, MAX_VALUE, MIN_VALUE};
use crate::observer::{FitObserver, FitSubject, ModelEvent};
use crate::point::{Point, PointId};

/// Selector for the two line coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {
    /// Intercept `a` of `y = a + b*x`.
    Intercept,
    /// Slope `b` of `y = a + b*x`.
    Slope,
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Intercept => write!(f, "a"),
            Coefficient::Slope => write!(f, "b"),
        }
    }
}

/// Error type for fit model operations.
#[derive(Debug, thiserror::Error)]
pub enum FitError {
    /// The point collection is full.
    #[error("you can only add a maximum of {max} points")]
    CapacityExceeded {
        /// Configured point capacity.
        max: usize,
    },

    /// A coordinate lies outside the selectable grid.
    #[error("coordinate {value} is outside the grid range [{min}, {max}]")]
    OutOfRange {
        /// Offending coordinate value.
        value: i32,
        /// Smallest selectable coordinate.
        min: i32,
        /// Largest selectable coordinate.
        max: i32,
    },

    /// No point with the given id exists.
    #[error("no point with id {0}")]
    UnknownPoint(PointId),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Session file could not be read, parsed, or restored.
    #[error("session error: {0}")]
    Session(String),

    /// Interrupted by the user.
    #[error("cancelled")]
    Cancelled,
}

/// The widget's data model: points, coefficients, and the id counter.
///
/// Insertion order is preserved; the same grid cell may hold any number of
/// distinct points. Every mutation notifies the observer subject so views
/// can refresh.
pub struct FitModel {
    points: Vec<Point>,
    intercept: f64,
    slope: f64,
    next_id: u64,
    capacity: usize,
    min_value: i32,
    max_value: i32,
    subject: FitSubject,
}

impl Default for FitModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FitModel {
    /// Create a model with the default grid, capacity, and coefficients.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            intercept: DEFAULT_INTERCEPT,
            slope: DEFAULT_SLOPE,
            next_id: 0,
            capacity: MAX_POINTS,
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
            subject: FitSubject::new(),
        }
    }

    /// Create a model with a custom grid range and capacity.
    pub fn with_config(min_value: i32, max_value: i32, capacity: usize) -> Result<Self, FitError> {
        if min_value >= max_value {
            return Err(FitError::Config(format!(
                "grid minimum ({min_value}) must be below the maximum ({max_value})"
            )));
        }
        if capacity == 0 {
            return Err(FitError::Config("point capacity must be at least 1".into()));
        }
        Ok(Self {
            capacity,
            min_value,
            max_value,
            ..Self::new()
        })
    }

    /// Register an observer for model events.
    pub fn register_observer(&self, observer: Arc<dyn FitObserver>) {
        self.subject.register(observer);
    }

    /// Add a point at the given grid cell.
    ///
    /// Allocates a fresh monotonically increasing id and appends the point.
    /// At capacity the collection is left untouched and an `AddRejected`
    /// event is emitted so the user-visible notification fires.
    pub fn add_point(&mut self, x: i32, y: i32) -> Result<PointId, FitError> {
        self.check_bounds(x)?;
        self.check_bounds(y)?;
        if self.points.len() == self.capacity {
            self.subject.notify(&ModelEvent::AddRejected {
                capacity: self.capacity,
            });
            return Err(FitError::CapacityExceeded { max: self.capacity });
        }
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.points.push(Point { id, x, y });
        debug!(%id, x, y, "point added");
        self.subject.notify(&ModelEvent::PointAdded(id));
        Ok(id)
    }

    /// Remove and return the point with the given id.
    ///
    /// In the widget, removal is only ever invoked from an existing table
    /// row, so `UnknownPoint` marks a programming error rather than a user
    /// mistake; callers may treat it as a logged no-op.
    pub fn remove_point(&mut self, id: PointId) -> Result<Point, FitError> {
        let index = self
            .points
            .iter()
            .position(|p| p.id == id)
            .ok_or(FitError::UnknownPoint(id))?;
        let point = self.points.remove(index);
        debug!(%id, "point removed");
        self.subject.notify(&ModelEvent::PointRemoved(id));
        Ok(point)
    }

    /// Overwrite a coefficient.
    pub fn set_coefficient(&mut self, which: Coefficient, value: f64) {
        match which {
            Coefficient::Intercept => self.intercept = value,
            Coefficient::Slope => self.slope = value,
        }
        debug!(%which, value, "coefficient set");
        self.subject.notify(&ModelEvent::CoefficientChanged(which));
    }

    /// Nudge a coefficient by a delta (the slider analogue).
    pub fn nudge_coefficient(&mut self, which: Coefficient, delta: f64) {
        self.set_coefficient(which, self.coefficient(which) + delta);
    }

    /// Current value of a coefficient.
    #[must_use]
    pub fn coefficient(&self, which: Coefficient) -> f64 {
        match which {
            Coefficient::Intercept => self.intercept,
            Coefficient::Slope => self.slope,
        }
    }

    /// Intercept `a` of the fitted line.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Slope `b` of the fitted line.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Predicted y for an x under the current line: `a + b*x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Actual y minus predicted y for a point.
    #[must_use]
    pub fn residual(&self, point: &Point) -> f64 {
        f64::from(point.y) - self.predict(f64::from(point.x))
    }

    /// Squared residual for a point.
    #[must_use]
    pub fn squared_error(&self, point: &Point) -> f64 {
        let r = self.residual(point);
        r * r
    }

    /// Sum of squared errors over all points; `0.0` when empty.
    #[must_use]
    pub fn total_squared_error(&self) -> f64 {
        self.points.iter().map(|p| self.squared_error(p)).sum()
    }

    /// The points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Look up a point by id.
    #[must_use]
    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Number of points currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the collection is full.
    #[must_use]
    pub fn at_capacity(&self) -> bool {
        self.points.len() == self.capacity
    }

    /// Configured point capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Smallest selectable coordinate.
    #[must_use]
    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    /// Largest selectable coordinate.
    #[must_use]
    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    fn check_bounds(&self, value: i32) -> Result<(), FitError> {
        if value < self.min_value || value > self.max_value {
            return Err(FitError::OutOfRange {
                value,
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingObserver {
        rejected: AtomicUsize,
        events: AtomicUsize,
    }

    impl CountingObserver {
        fn new() -> Self {
            Self {
                rejected: AtomicUsize::new(0),
                events: AtomicUsize::new(0),
            }
        }
    }

    impl FitObserver for CountingObserver {
        fn on_event(&self, event: &ModelEvent) {
            self.events.fetch_add(1, Ordering::Relaxed);
            if matches!(event, ModelEvent::AddRejected { .. }) {
                self.rejected.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn full_model() -> FitModel {
        let mut model = FitModel::new();
        for i in 0..model.capacity() {
            let v = i32::try_from(i % 8).unwrap();
            model.add_point(v, v).unwrap();
        }
        model
    }

    #[test]
    fn add_below_capacity_grows_by_one() {
        let mut model = FitModel::new();
        assert!(model.is_empty());
        let id = model.add_point(0, 1).unwrap();
        assert_eq!(model.len(), 1);
        assert_eq!(model.point(id).unwrap().x, 0);
        assert_eq!(model.point(id).unwrap().y, 1);
    }

    #[test]
    fn ids_are_fresh_and_monotonic() {
        let mut model = FitModel::new();
        let a = model.add_point(0, 0).unwrap();
        let b = model.add_point(1, 1).unwrap();
        model.remove_point(a).unwrap();
        let c = model.add_point(2, 2).unwrap();
        assert!(a < b && b < c);
        // A removed id is never handed out again.
        assert_ne!(c, a);
    }

    #[test]
    fn duplicate_cells_coexist() {
        let mut model = FitModel::new();
        let a = model.add_point(3, 3).unwrap();
        let b = model.add_point(3, 3).unwrap();
        assert_ne!(a, b);
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn add_at_capacity_rejects_without_mutation() {
        let mut model = full_model();
        let before: Vec<_> = model.points().to_vec();
        let err = model.add_point(0, 0).unwrap_err();
        assert!(matches!(err, FitError::CapacityExceeded { max: 10 }));
        assert_eq!(model.points(), before.as_slice());
    }

    #[test]
    fn add_at_capacity_emits_one_rejection_event() {
        let mut model = full_model();
        let observer = Arc::new(CountingObserver::new());
        model.register_observer(observer.clone());
        let _ = model.add_point(0, 0);
        assert_eq!(observer.rejected.load(Ordering::Relaxed), 1);
        assert_eq!(observer.events.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn out_of_range_coordinates_rejected() {
        let mut model = FitModel::new();
        assert!(matches!(
            model.add_point(8, 0),
            Err(FitError::OutOfRange { value: 8, .. })
        ));
        assert!(matches!(
            model.add_point(0, -2),
            Err(FitError::OutOfRange { value: -2, .. })
        ));
        assert!(model.is_empty());
    }

    #[test]
    fn remove_by_id() {
        let mut model = FitModel::new();
        let a = model.add_point(0, 0).unwrap();
        let b = model.add_point(1, 1).unwrap();
        let removed = model.remove_point(a).unwrap();
        assert_eq!(removed.id, a);
        assert_eq!(model.len(), 1);
        assert!(model.point(a).is_none());
        assert!(model.point(b).is_some());
    }

    #[test]
    fn remove_unknown_id_fails() {
        let mut model = FitModel::new();
        assert!(matches!(
            model.remove_point(PointId(99)),
            Err(FitError::UnknownPoint(PointId(99)))
        ));
    }

    #[test]
    fn set_coefficient_preserves_points() {
        let mut model = FitModel::new();
        let a = model.add_point(0, 0).unwrap();
        let b = model.add_point(1, 1).unwrap();
        model.set_coefficient(Coefficient::Intercept, 3.0);
        model.set_coefficient(Coefficient::Slope, -2.0);
        assert_eq!(model.len(), 2);
        assert_eq!(model.points()[0].id, a);
        assert_eq!(model.points()[1].id, b);
        assert!((model.intercept() - 3.0).abs() < f64::EPSILON);
        assert!((model.slope() + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nudge_applies_delta() {
        let mut model = FitModel::new();
        model.set_coefficient(Coefficient::Slope, 1.0);
        model.nudge_coefficient(Coefficient::Slope, -0.1);
        assert!((model.slope() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn predict_is_linear() {
        let mut model = FitModel::new();
        model.set_coefficient(Coefficient::Intercept, 1.0);
        model.set_coefficient(Coefficient::Slope, 2.0);
        assert!((model.predict(0.0) - 1.0).abs() < f64::EPSILON);
        assert!((model.predict(3.0) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn residual_example() {
        // Point (2,5) with a=1, b=2: 5 - (1 + 2*2) = 0.
        let mut model = FitModel::new();
        model.set_coefficient(Coefficient::Intercept, 1.0);
        model.set_coefficient(Coefficient::Slope, 2.0);
        let id = model.add_point(2, 5).unwrap();
        let point = *model.point(id).unwrap();
        assert!(model.residual(&point).abs() < f64::EPSILON);
    }

    #[test]
    fn total_squared_error_example() {
        // Points (0,1) and (2,3) with a=0, b=1: 1 + 1 = 2.
        let mut model = FitModel::new();
        model.set_coefficient(Coefficient::Intercept, 0.0);
        model.set_coefficient(Coefficient::Slope, 1.0);
        model.add_point(0, 1).unwrap();
        model.add_point(2, 3).unwrap();
        assert!((model.total_squared_error() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_model_has_zero_error() {
        let model = FitModel::new();
        assert!(model.total_squared_error().abs() < f64::EPSILON);
    }

    #[test]
    fn derived_getters_are_idempotent() {
        let mut model = FitModel::new();
        model.add_point(1, 4).unwrap();
        model.add_point(5, 2).unwrap();
        let point = model.points()[0];
        let first = (
            model.predict(3.0),
            model.residual(&point),
            model.squared_error(&point),
            model.total_squared_error(),
        );
        let second = (
            model.predict(3.0),
            model.residual(&point),
            model.squared_error(&point),
            model.total_squared_error(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn with_config_validates() {
        assert!(matches!(
            FitModel::with_config(5, 2, 10),
            Err(FitError::Config(_))
        ));
        assert!(matches!(
            FitModel::with_config(0, 0, 10),
            Err(FitError::Config(_))
        ));
        assert!(matches!(
            FitModel::with_config(-1, 7, 0),
            Err(FitError::Config(_))
        ));
        let model = FitModel::with_config(-3, 3, 5).unwrap();
        assert_eq!(model.capacity(), 5);
        assert_eq!(model.min_value(), -3);
        assert_eq!(model.max_value(), 3);
    }

    #[test]
    fn at_capacity_flag() {
        let mut model = FitModel::with_config(-1, 7, 2).unwrap();
        assert!(!model.at_capacity());
        model.add_point(0, 0).unwrap();
        model.add_point(1, 1).unwrap();
        assert!(model.at_capacity());
    }

    #[test]
    fn coefficient_display() {
        assert_eq!(Coefficient::Intercept.to_string(), "a");
        assert_eq!(Coefficient::Slope.to_string(), "b");
    }

    #[test]
    fn capacity_error_message_matches_widget() {
        let err = FitError::CapacityExceeded { max: 10 };
        assert_eq!(err.to_string(), "you can only add a maximum of 10 points");
    }
}
