//! Bridge between model events and TUI messages.

use crossbeam_channel::Sender;

use fitline_core::{FitObserver, ModelEvent};

use crate::messages::TuiMessage;

/// Model observer that forwards refreshes and the capacity notice into
/// the TUI channel.
pub struct TuiEventBridge {
    tx: Sender<TuiMessage>,
}

impl TuiEventBridge {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl FitObserver for TuiEventBridge {
    fn on_event(&self, event: &ModelEvent) {
        let msg = match event {
            ModelEvent::AddRejected { capacity } => TuiMessage::Notice(format!(
                "You can only add a maximum of {capacity} points"
            )),
            ModelEvent::PointAdded(_)
            | ModelEvent::PointRemoved(_)
            | ModelEvent::CoefficientChanged(_) => TuiMessage::Refresh,
        };
        let _ = self.tx.try_send(msg);
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::unbounded;

    use fitline_core::{Coefficient, PointId};

    use super::*;

    #[test]
    fn mutations_become_refreshes() {
        let (tx, rx) = unbounded();
        let bridge = TuiEventBridge::new(tx);

        bridge.on_event(&ModelEvent::PointAdded(PointId(0)));
        bridge.on_event(&ModelEvent::PointRemoved(PointId(0)));
        bridge.on_event(&ModelEvent::CoefficientChanged(Coefficient::Slope));

        for _ in 0..3 {
            assert!(matches!(rx.try_recv().unwrap(), TuiMessage::Refresh));
        }
    }

    #[test]
    fn rejection_becomes_notice() {
        let (tx, rx) = unbounded();
        let bridge = TuiEventBridge::new(tx);

        bridge.on_event(&ModelEvent::AddRejected { capacity: 10 });

        match rx.try_recv().unwrap() {
            TuiMessage::Notice(text) => {
                assert_eq!(text, "You can only add a maximum of 10 points");
            }
            other => panic!("expected notice, got {other:?}"),
        }
    }
}
