//! Game area widget: board on the left, info panel on the right.

use client_frontend_core::InteractionMachine;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::{board, info_panel};
use crate::event::InfoPanel;
use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    machine: &InteractionMachine,
    panel: &InfoPanel,
    theme: &RatatuiTheme,
    cell_width: u16,
) {
    // Borders plus the three column row label
    let board_width = (machine.geometry().cols as u16)
        .saturating_mul(cell_width)
        .saturating_add(5);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(20)])
        .split(area);

    board::render(frame, chunks[0], machine, theme, cell_width);
    info_panel::render(frame, chunks[1], panel, machine.local_player(), theme);
}
