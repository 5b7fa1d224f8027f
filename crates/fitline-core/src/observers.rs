//! Concrete observer implementations.

use crossbeam_channel::Sender;
use tracing::debug;

use crate::observer::{FitObserver, ModelEvent};

/// Observer that ignores all events.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl FitObserver for NoOpObserver {
    fn on_event(&self, _event: &ModelEvent) {}
}

/// Observer that forwards events through a channel (non-blocking).
///
/// Events are dropped rather than blocking the mutation path when the
/// receiver has fallen behind.
pub struct ChannelObserver {
    sender: Sender<ModelEvent>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<ModelEvent>) -> Self {
        Self { sender }
    }
}

impl FitObserver for ChannelObserver {
    fn on_event(&self, event: &ModelEvent) {
        let _ = self.sender.try_send(*event);
    }
}

/// Observer that logs events.
pub struct LoggingObserver;

impl LoggingObserver {
    /// Create a new logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl FitObserver for LoggingObserver {
    fn on_event(&self, event: &ModelEvent) {
        debug!(?event, "model event");
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::unbounded;

    use super::*;
    use crate::point::PointId;

    #[test]
    fn channel_observer_forwards_events() {
        let (tx, rx) = unbounded();
        let observer = ChannelObserver::new(tx);
        observer.on_event(&ModelEvent::PointAdded(PointId(3)));
        assert_eq!(rx.try_recv().unwrap(), ModelEvent::PointAdded(PointId(3)));
    }

    #[test]
    fn channel_observer_drops_when_disconnected() {
        let (tx, rx) = unbounded();
        drop(rx);
        let observer = ChannelObserver::new(tx);
        // Must not panic.
        observer.on_event(&ModelEvent::AddRejected { capacity: 10 });
    }

    #[test]
    fn noop_and_logging_accept_events() {
        NoOpObserver::new().on_event(&ModelEvent::PointRemoved(PointId(0)));
        LoggingObserver::new().on_event(&ModelEvent::PointRemoved(PointId(0)));
    }
}
