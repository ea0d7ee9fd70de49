//! Transport trait and its error type.

use async_trait::async_trait;
use game_protocol::{GameInfo, Message, ResultFrame};

/// Transport layer errors.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Server rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Request/response channel to the authoritative server.
///
/// Implementations must be safe to share between the poll task and the task
/// that sends player messages.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Join a session. Called exactly once at startup.
    async fn init(&self) -> Result<GameInfo, TransportError>;

    /// Fetch the next result for `info`. `Ok(None)` means "nothing new yet".
    async fn poll(&self, info: &GameInfo) -> Result<Option<ResultFrame>, TransportError>;

    /// Send a message on behalf of `info.player`. No acknowledgement is awaited.
    async fn update(&self, message: &Message, info: &GameInfo) -> Result<(), TransportError>;
}
