//! Terminal UI frontend for the tactics client.
//!
//! This crate implements [`client_frontend_core::Frontend`] for the terminal.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Owns the `GameSession` handed to it and applies every server result
//! - Maps key presses to the abstract input alphabet
//! - Renders the interaction machine and the notification log

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use event::{CliEventConsumer, InfoPanel};
pub use input::{InputHandler, KeyAction};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
