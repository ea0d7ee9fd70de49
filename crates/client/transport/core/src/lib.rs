//! Transport abstraction between the tactics client and its game server.
//!
//! The client core never talks to the network directly. It consumes the
//! [`Transport`] trait, which mirrors the three server calls of the protocol:
//!
//! - `init` joins a session and returns the [`GameInfo`](game_protocol::GameInfo)
//! - `poll` asks for the next result frame, if any
//! - `update` sends a message, fire-and-forget
//!
//! [`MockTransport`] is an in-memory implementation used by tests and demos.
pub mod mock;
pub mod traits;

pub use mock::MockTransport;
pub use traits::{Transport, TransportError};
