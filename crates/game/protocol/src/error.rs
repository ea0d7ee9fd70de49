//! Errors raised while decoding server frames.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProtocolError>;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unrecognized result variant `{0}`")]
    UnknownVariant(String),

    #[error("malformed `{kind}` payload")]
    Malformed {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a `GameStarted` frame, received `{0}`")]
    NotAStartPayload(String),
}
