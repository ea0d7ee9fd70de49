//! Top-level client orchestrating transport, session and frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Transport (init / poll / update against the server)
//!   ├─→ PollLoop  (background task forwarding results)
//!   └─→ Frontend  (owns the GameSession, renders, reads input)
//! ```
//!
//! The client joins the session, hands the poll loop to the runtime and
//! transfers control to the frontend. When the frontend returns the poll loop
//! is stopped and awaited.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use std::sync::Arc;

use anyhow::Result;
use client_frontend_core::{Connected, FrontendConfig, GameSession, NotificationBus};
use client_transport_core::Transport;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() collects transport, frontend and configuration
/// 2. Client::run() joins the session and waits for the start payload
/// 3. Client::run() spawns the poll loop
/// 4. Client::run() transfers control to the frontend (blocking)
/// 5. On frontend exit, the poll loop is stopped and joined
pub struct Client {
    transport: Arc<dyn Transport>,
    frontend: Box<dyn Frontend>,
    config: FrontendConfig,
    notifications: NotificationBus,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be started or the frontend
    /// fails.
    pub async fn run(self) -> Result<()> {
        let Connected {
            session,
            poller,
            results,
        } = GameSession::connect(self.transport, &self.config, self.notifications).await?;

        let control = poller.control().clone();
        let poll_task = poller.spawn();

        let mut frontend = self.frontend;
        let frontend_result = frontend.run(session, results).await;

        control.stop();
        match poll_task.await {
            Ok(summary) => tracing::info!(
                polls = summary.polls,
                frames = summary.frames,
                failures = summary.failures,
                "Poll loop joined"
            ),
            Err(e) => tracing::error!("Poll task failed: {}", e),
        }

        frontend_result
    }
}
