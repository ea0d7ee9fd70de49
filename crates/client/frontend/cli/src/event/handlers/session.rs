//! Server results and session notifications.

use anyhow::Result;
use client_frontend_core::{Dispatch, Notification, NotificationConsumer};
use game_protocol::ResultFrame;
use tokio::sync::broadcast::error::RecvError;

use super::super::EventLoop;
use crate::presentation::terminal::Tui;

impl EventLoop {
    /// Apply one server result and redraw.
    pub(in crate::event) fn handle_result(
        &mut self,
        frame: ResultFrame,
        terminal: &mut Tui,
    ) -> Result<()> {
        let was_my_turn = self.session.machine().my_turn();

        if let Dispatch::Applied(kind) = self.session.apply(frame) {
            let machine = self.session.machine();
            if machine.my_turn() && !was_my_turn {
                self.consumer.message_log_mut().push_text("Your turn.");
            } else if was_my_turn && !machine.my_turn() && !machine.mode().is_game_over() {
                self.consumer
                    .message_log_mut()
                    .push_text(format!("{} is playing...", machine.turn_of()));
            }
            tracing::trace!(kind, "Result applied");
        }

        self.render(terminal)
    }

    pub(in crate::event) fn handle_notification(
        &mut self,
        notification: Result<Notification, RecvError>,
        terminal: &mut Tui,
    ) -> Result<()> {
        match notification {
            Ok(notification) => {
                if self.consumer.on_notification(&notification).requires_redraw {
                    self.render(terminal)?;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Notification consumer lagged");
            }
            Err(RecvError::Closed) => {
                // The session holds a sender, so this only happens on shutdown
                tracing::debug!("Notification bus closed");
            }
        }
        Ok(())
    }
}
