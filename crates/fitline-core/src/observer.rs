//! Observer pattern for model refresh notifications.
//!
//! Views subscribe to the model instead of polling it: every mutation
//! emits a `ModelEvent`, and registered observers decide what to refresh.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::Coefficient;
use crate::point::PointId;

/// State-change events emitted by the model after each operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelEvent {
    /// A point was appended to the collection.
    PointAdded(PointId),
    /// A point was removed from the collection.
    PointRemoved(PointId),
    /// A coefficient was overwritten.
    CoefficientChanged(Coefficient),
    /// An add was rejected because the collection is full.
    AddRejected {
        /// Configured point capacity.
        capacity: usize,
    },
}

/// Observer trait for receiving model events.
pub trait FitObserver: Send + Sync {
    /// Receive a single model event.
    fn on_event(&self, event: &ModelEvent);
}

/// Subject that manages a collection of observers.
pub struct FitSubject {
    observers: RwLock<Vec<Arc<dyn FitObserver>>>,
}

impl FitSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn FitObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Notify all observers of an event.
    pub fn notify(&self, event: &ModelEvent) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_event(event);
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for FitSubject {
    fn default() -> Self {
        Self::new()
    }
}
