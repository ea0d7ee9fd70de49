//! Utilities for reacting to session notifications inside UI layers.
use crate::message::MessageLog;
use crate::notification::Notification;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }
}

/// Frontend-side sink for [`Notification`]s.
pub trait NotificationConsumer {
    fn on_notification(&mut self, notification: &Notification) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}
