use std::time::Duration;

use client_transport_core::TransportError;
use game_protocol::ProtocolError;
use thiserror::Error;

use crate::board::BoardGeometry;

/// Fatal failures while bringing a session up.
///
/// Everything that can go wrong after the session exists is logged and
/// absorbed where it happens.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to join session: {0}")]
    Init(#[from] TransportError),

    #[error("no start payload received within {0:?}")]
    StartTimeout(Duration),

    #[error("invalid start payload: {0}")]
    InvalidStart(#[from] ProtocolError),

    #[error(
        "start payload announces a {rows}x{cols} board, limit is {max}x{max}",
        max = BoardGeometry::MAX_SIDE
    )]
    BoardTooLarge { rows: u32, cols: u32 },
}

pub type Result<T> = std::result::Result<T, ClientError>;
