//! Event loop orchestrating server results, user input, and rendering.
//!
//! The loop is the single owner of the [`GameSession`]. Results from the poll
//! task and key presses are handled one at a time, each to completion, so the
//! interaction machine never sees interleaved updates.

use anyhow::Result;
use client_frontend_core::GameSession;
use game_protocol::ResultFrame;
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use super::CliEventConsumer;
use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui};

const FRAME_INTERVAL_MS: u64 = 16;

pub struct EventLoop {
    pub(crate) session: GameSession,
    pub(crate) results: mpsc::Receiver<ResultFrame>,
    pub(crate) input: InputHandler,
    pub(crate) consumer: CliEventConsumer,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(
        session: GameSession,
        results: mpsc::Receiver<ResultFrame>,
        consumer: CliEventConsumer,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            session,
            results,
            input: InputHandler::new(),
            consumer,
            cli_config,
        }
    }

    /// Runs until the user quits. Returns the session and consumer so the
    /// caller can shut down cleanly.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<(GameSession, CliEventConsumer)> {
        let mut notifications = self.session.notifications().subscribe();
        self.render(terminal)?;

        let mut results_open = true;
        loop {
            tokio::select! {
                frame = self.results.recv(), if results_open => {
                    match frame {
                        Some(frame) => self.handle_result(frame, terminal)?,
                        None => {
                            tracing::info!("Result stream closed");
                            results_open = false;
                        }
                    }
                }
                notification = notifications.recv() => {
                    self.handle_notification(notification, terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
            }
        }

        Ok((self.session, self.consumer))
    }
}
