//! Key hints for the active mode.

use client_frontend_core::Mode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, area: Rect, mode: &Mode, my_turn: bool) {
    let hint = if !my_turn && !mode.is_game_over() {
        "Waiting for the other player | q: quit"
    } else {
        match mode {
            Mode::Idle => "Waiting for the server | q: quit",
            Mode::Oversee { .. } => "WASD/arrows: move | Enter/Space: select unit | q: quit",
            Mode::MoveSelection { .. } => {
                "WASD/arrows: move | Enter/Space: move here | Esc: back | q: quit"
            }
            Mode::ActionSelection => "W/S: choose action | Enter/Space: confirm | q: quit",
            Mode::ActionPreview { .. } => {
                "WASD/arrows: aim | Enter/Space: confirm target | Esc: back | q: quit"
            }
            Mode::GameOver { .. } => "Game over | q: quit",
        }
    };

    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::Gray)),
        area,
    );
}
