//! Event handling for CLI client.
//!
//! This module contains the event loop orchestrator and the notification
//! consumer that coordinate server results, user input, and UI updates.

mod consumer;
mod handlers;
mod r#loop;

pub use consumer::{CliEventConsumer, InfoPanel};
pub use r#loop::EventLoop;
