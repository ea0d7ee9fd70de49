//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use game_protocol::ResultFrame;
use tokio::sync::mpsc;

use crate::session::GameSession;

/// Frontend abstraction for UI layers.
///
/// A frontend owns the [`GameSession`] for the lifetime of the match: it
/// applies every frame arriving on `results`, turns device events into
/// [`Input`](crate::Input) and renders the machine's state. Notifications are
/// available through [`GameSession::notifications`].
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(
        &mut self,
        session: GameSession,
        results: mpsc::Receiver<ResultFrame>,
    ) -> Result<()>;
}
