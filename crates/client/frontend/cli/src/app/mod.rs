//! Glue code tying the session and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use client_frontend_core::{
    Frontend, FrontendConfig, GameSession, MessageLog, Notification, NotificationConsumer,
};
use game_protocol::ResultFrame;
use tokio::sync::mpsc;
use tokio::time::{self, Duration};

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;

/// How long quitting waits for queued messages to reach the server.
const FLUSH_TIMEOUT: Duration = Duration::from_secs(1);

/// Terminal frontend (ratatui + crossterm).
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(
        &mut self,
        session: GameSession,
        results: mpsc::Receiver<ResultFrame>,
    ) -> Result<()> {
        tracing::info!("CLI client starting...");

        // The session announced itself before this frontend could subscribe
        let mut consumer =
            CliEventConsumer::new(MessageLog::new(self.frontend_config.messages.capacity));
        consumer.on_notification(&Notification::GameStarted {
            info: session.info().clone(),
            characters: session.machine().roster().len(),
        });
        consumer
            .message_log_mut()
            .push_text("Waiting for the server...");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let event_loop = EventLoop::new(session, results, consumer, self.cli_config.clone());
        let (session, _consumer) = event_loop.run(&mut terminal).await?;
        session.shutdown();
        if time::timeout(FLUSH_TIMEOUT, session.flush()).await.is_err() {
            tracing::warn!("Queued messages not delivered before exit");
        }

        terminal::restore()?;
        tracing::info!("CLI client exiting");

        Ok(())
    }
}
