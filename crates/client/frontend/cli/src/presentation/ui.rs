//! UI rendering entry point composing all widgets.
use anyhow::Result;
use client_frontend_core::{InteractionMachine, MessageLog, Mode};
use game_protocol::GameInfo;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::event::InfoPanel;
use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub info: &'a GameInfo,
    pub machine: &'a InteractionMachine,
    pub messages: &'a MessageLog,
    pub info_panel: &'a InfoPanel,
    pub message_panel_height: u16,
    pub cell_width: u16,
}

/// Render header, game area, messages and footer, plus the action selector
/// overlay while an action is being chosen.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(0),                           // Game area
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Length(1),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.info, ctx.machine, &theme);
        widgets::game_area::render(
            frame,
            chunks[1],
            ctx.machine,
            ctx.info_panel,
            &theme,
            ctx.cell_width,
        );
        widgets::messages::render(frame, chunks[2], ctx.messages, &theme);
        widgets::footer::render(frame, chunks[3], ctx.machine.mode(), ctx.machine.my_turn());

        if matches!(ctx.machine.mode(), Mode::ActionSelection) {
            let area = centered_rect(40, 50, chunks[1]);
            widgets::action_menu::render(frame, area, ctx.machine.selector());
        }
    })?;

    Ok(())
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
