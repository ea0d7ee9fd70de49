//! Header widget displaying session, turn and interaction mode.

use client_frontend_core::InteractionMachine;
use game_protocol::GameInfo;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the header panel with turn info and current mode.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    info: &GameInfo,
    machine: &InteractionMachine,
    theme: &RatatuiTheme,
) {
    let local = machine.local_player();
    let turn_text = if machine.mode().is_game_over() {
        Span::styled(
            " GAME OVER ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
    } else if machine.my_turn() {
        Span::styled(
            " YOUR TURN ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" WAITING ", Style::default().fg(Color::Gray))
    };

    let text = vec![Line::from(vec![
        Span::raw("Game: "),
        Span::styled(info.id.clone(), Style::default().fg(Color::Cyan)),
        Span::raw(" | You: "),
        Span::styled(local.to_string(), theme.player_style(local, local)),
        Span::raw(" | Turn: "),
        Span::styled(
            machine.turn_of().to_string(),
            theme.player_style(machine.turn_of(), local),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("[{}]", machine.mode().name()),
            Style::default().fg(Color::LightGreen),
        ),
        Span::raw(" "),
        turn_text,
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Tactics"));

    frame.render_widget(paragraph, area);
}
