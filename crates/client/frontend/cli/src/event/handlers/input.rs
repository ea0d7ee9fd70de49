//! Keyboard input forwarded to the session.

use anyhow::Result;
use client_frontend_core::NotificationConsumer;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl EventLoop {
    /// Poll for keyboard input without blocking. Returns true on quit.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    pub(in crate::event) fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                self.consumer.message_log_mut().push_text("Quitting...");
                self.render(terminal)?;
                Ok(true)
            }
            KeyAction::Input(input) => {
                if let Some(message) = self.session.handle_input(input) {
                    tracing::debug!(message = message.name(), "Input queued message");
                }
                self.render(terminal)?;
                Ok(false)
            }
            KeyAction::None => Ok(false),
        }
    }
}
