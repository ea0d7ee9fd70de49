//! Side panel describing the unit under the cursor or a pending action.

use game_protocol::{Character, Player};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::event::InfoPanel;
use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    panel: &InfoPanel,
    local: Player,
    theme: &RatatuiTheme,
) {
    let (title, lines) = match panel {
        InfoPanel::Empty => (
            " Info ",
            vec![Line::from(Span::styled(
                "Move the cursor over a unit",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ))],
        ),
        InfoPanel::Cell {
            position,
            character: None,
        } => (
            " Info ",
            vec![
                Line::from(format!("Cell {}", position)),
                Line::from(Span::styled("Empty", Style::default().fg(Color::DarkGray))),
            ],
        ),
        InfoPanel::Cell {
            character: Some(character),
            ..
        } => (" Unit ", character_lines(character, local, theme)),
        InfoPanel::Preview {
            name,
            before,
            after,
        } => (" Preview ", preview_lines(name, before, after)),
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn character_lines(character: &Character, local: Player, theme: &RatatuiTheme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            character.id.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Owner: "),
            Span::styled(
                character.player.to_string(),
                theme.player_style(character.player, local),
            ),
        ]),
        Line::from(format!("Class: {}", character.classification.label())),
        Line::from(format!("Cell:  {}", character.position)),
    ];

    if !character.properties.is_empty() {
        lines.push(Line::from(""));
    }
    for (key, value) in &character.properties {
        lines.push(Line::from(format!("{}: {}", key, value)));
    }

    lines
}

/// Lists every property the action changes as `before -> after`.
fn preview_lines(name: &str, before: &Character, after: &Character) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            name.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Target: {}", before.id)),
        Line::from(""),
    ];

    let mut changed = false;
    for (key, next) in &after.properties {
        match before.property(key) {
            Some(previous) if previous == next => {}
            previous => {
                changed = true;
                let previous = previous.map_or_else(|| "-".to_string(), |value| value.to_string());
                lines.push(Line::from(vec![
                    Span::raw(format!("{}: {} -> ", key, previous)),
                    Span::styled(next.to_string(), Style::default().fg(Color::LightRed)),
                ]));
            }
        }
    }
    if before.position != after.position {
        changed = true;
        lines.push(Line::from(format!(
            "cell: {} -> {}",
            before.position, after.position
        )));
    }
    if !changed {
        lines.push(Line::from(Span::styled(
            "No visible effect",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}
