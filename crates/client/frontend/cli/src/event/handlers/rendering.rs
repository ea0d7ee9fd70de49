//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::NotificationConsumer;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render the current session state.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            info: self.session.info(),
            machine: self.session.machine(),
            messages: self.consumer.message_log(),
            info_panel: self.consumer.info_panel(),
            message_panel_height: self.cli_config.ui.message_panel_height,
            cell_width: self.cli_config.ui.cell_width,
        };

        ui::render(terminal, &ctx)
    }
}
