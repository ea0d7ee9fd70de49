//! Client builder with dependency injection pattern.

use std::sync::Arc;

use anyhow::{Context, Result};
use client_frontend_core::{FrontendConfig, NotificationBus};
use client_transport_core::Transport;

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// Transport and frontend are required; configuration falls back to
/// defaults and a fresh notification bus is created when none is supplied.
#[derive(Default)]
pub struct ClientBuilder {
    transport: Option<Arc<dyn Transport>>,
    frontend: Option<Box<dyn Frontend>>,
    config: Option<FrontendConfig>,
    notifications: Option<NotificationBus>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transport (required).
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Set the frontend (required).
    ///
    /// The frontend receives the connected session and owns it until the
    /// user quits.
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    pub fn config(mut self, config: FrontendConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Share an existing bus, e.g. to observe notifications from outside the
    /// frontend.
    pub fn notifications(mut self, notifications: NotificationBus) -> Self {
        self.notifications = Some(notifications);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport or the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let transport = self
            .transport
            .context("Transport is required. Use .transport() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            transport,
            frontend,
            config: self.config.unwrap_or_default(),
            notifications: self.notifications.unwrap_or_default(),
        })
    }
}
