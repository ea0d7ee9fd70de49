//! JSON-over-HTTP transport for the tactics server.
//!
//! Endpoints (relative to `SERVER_URL`):
//! - `POST games` joins a session
//! - `GET games/{id}/results?player=<P>` returns the next frame (`204` when none)
//! - `POST games/{id}/messages?player=<P>` delivers an encoded message
mod client;
mod config;

pub use client::HttpTransport;
pub use config::HttpConfig;
