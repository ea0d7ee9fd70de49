//! A joined game: transport, session handle and interaction machine.
use std::sync::Arc;

use client_transport_core::Transport;
use game_protocol::{GameInfo, Message, ResultFrame};
use tokio::sync::mpsc;
use tokio::time;

use crate::board::BoardGeometry;
use crate::config::FrontendConfig;
use crate::dispatcher::{self, Dispatch};
use crate::error::{ClientError, Result};
use crate::input::Input;
use crate::machine::InteractionMachine;
use crate::notification::{Notification, NotificationBus};
use crate::outbox::Outbox;
use crate::poll::{PollControl, PollLoop};
use crate::roster::Roster;

/// Everything produced by a successful [`GameSession::connect`].
///
/// The caller spawns `poller` and feeds `results` back into
/// [`GameSession::apply`].
pub struct Connected {
    pub session: GameSession,
    pub poller: PollLoop,
    pub results: mpsc::Receiver<ResultFrame>,
}

/// Single owner of the interaction machine.
///
/// Results and local input are both applied through `&mut self`, so
/// handlers run to completion one at a time.
pub struct GameSession {
    info: GameInfo,
    outbox: Outbox,
    machine: InteractionMachine,
    notifications: NotificationBus,
}

impl GameSession {
    /// Joins a session and waits for its start payload.
    ///
    /// # Errors
    ///
    /// Fails if the transport cannot join, if no result arrives within the
    /// configured start timeout, if the first result is not a valid start
    /// payload, or if the board it announces exceeds
    /// [`BoardGeometry::MAX_SIDE`].
    pub async fn connect(
        transport: Arc<dyn Transport>,
        config: &FrontendConfig,
        notifications: NotificationBus,
    ) -> Result<Connected> {
        let info = transport.init().await?;
        tracing::info!(session = %info.id, player = %info.player, "Joined session");

        let frame = wait_for_start(transport.as_ref(), &info, config).await?;
        let start = frame.decode_start()?;

        let geometry = match start.board {
            Some(size) => BoardGeometry::from_size(size).ok_or(ClientError::BoardTooLarge {
                rows: size.rows,
                cols: size.cols,
            })?,
            None => config.board.geometry(),
        };
        let roster = Roster::new(start.into_characters(), &geometry);
        tracing::info!(
            characters = roster.len(),
            rows = geometry.rows,
            cols = geometry.cols,
            "Game started"
        );

        let control = PollControl::new();
        let machine = InteractionMachine::new(
            info.player,
            roster,
            geometry,
            notifications.clone(),
            control.clone(),
        )
        .with_cursor_clamp(config.board.clamp_cursor);

        notifications.publish(Notification::GameStarted {
            info: info.clone(),
            characters: machine.roster().len(),
        });

        let (tx, results) = mpsc::channel(config.session.result_buffer.max(1));
        let poller = PollLoop::new(
            Arc::clone(&transport),
            info.clone(),
            config.poll,
            tx,
            control,
        );
        let outbox = Outbox::spawn(transport, info.clone());

        Ok(Connected {
            session: Self {
                info,
                outbox,
                machine,
                notifications,
            },
            poller,
            results,
        })
    }

    pub fn info(&self) -> &GameInfo {
        &self.info
    }

    pub fn machine(&self) -> &InteractionMachine {
        &self.machine
    }

    pub fn notifications(&self) -> &NotificationBus {
        &self.notifications
    }

    pub fn is_over(&self) -> bool {
        self.machine.mode().is_game_over()
    }

    pub fn apply(&mut self, frame: ResultFrame) -> Dispatch {
        dispatcher::dispatch(&mut self.machine, frame)
    }

    /// Feeds local input to the machine and queues whatever it produced.
    ///
    /// Returns without waiting for the server. Send failures are logged by the
    /// outbox and leave the machine as it is; the server never saw the
    /// message, so the current mode still applies.
    pub fn handle_input(&mut self, input: Input) -> Option<Message> {
        let message = self.machine.handle_input(input)?;
        self.outbox.queue(message.clone());
        Some(message)
    }

    /// Waits until every message queued so far has been handed to the transport.
    pub async fn flush(&self) {
        self.outbox.flush().await;
    }

    /// Stops the poll loop. Safe to call more than once.
    pub fn shutdown(&self) {
        self.machine.polling().stop();
    }
}

async fn wait_for_start(
    transport: &dyn Transport,
    info: &GameInfo,
    config: &FrontendConfig,
) -> Result<ResultFrame> {
    let timeout = config.session.start_timeout;
    let interval = config.poll.interval;

    let wait = async {
        loop {
            match transport.poll(info).await {
                Ok(Some(frame)) => return frame,
                Ok(None) => {}
                Err(error) => tracing::warn!(%error, "Poll for start payload failed"),
            }
            time::sleep(interval).await;
        }
    };

    time::timeout(timeout, wait)
        .await
        .map_err(|_| ClientError::StartTimeout(timeout))
}
