//! Action selector overlay.

use client_frontend_core::Selector;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the selector as a centered list. Nothing is drawn when it is empty.
pub fn render(frame: &mut Frame, area: Rect, selector: &Selector) {
    if selector.is_empty() {
        return;
    }

    let mut lines: Vec<Line> = selector
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if index == selector.index() {
                Line::from(Span::styled(
                    format!("> {}", item),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", item),
                    Style::default().fg(Color::White),
                ))
            }
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "W/S to choose | Enter to confirm",
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Actions ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
