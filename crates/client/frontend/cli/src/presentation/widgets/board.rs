//! Board widget: the grid, its units, highlights and the cursor.
//!
//! Screen rows come from [`BoardGeometry::unproject`] so row 0 sits at the
//! bottom, matching the direction the cursor moves on Up.

use std::collections::HashMap;

use client_frontend_core::{InteractionMachine, Placement};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    machine: &InteractionMachine,
    theme: &RatatuiTheme,
    cell_width: u16,
) {
    let paragraph = Paragraph::new(board_lines(machine, theme, cell_width))
        .block(Block::default().borders(Borders::ALL).title(" Board "));
    frame.render_widget(paragraph, area);
}

/// Builds the grid top row first, followed by a column ruler.
pub fn board_lines(
    machine: &InteractionMachine,
    theme: &RatatuiTheme,
    cell_width: u16,
) -> Vec<Line<'static>> {
    let geometry = machine.geometry();
    let width = usize::from(cell_width.max(1));
    let local = machine.local_player();
    let cursor = machine.cursor();

    let by_placement: HashMap<Placement, _> = machine
        .roster()
        .units()
        .map(|unit| (unit.placement, &unit.character))
        .collect();

    let label_style = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::with_capacity(geometry.rows as usize + 1);

    for y in 0..geometry.rows as i32 {
        let row = geometry.unproject(Placement { x: 0, y }).row;
        let mut spans = vec![Span::styled(format!("{:>2} ", row), label_style)];

        for x in 0..geometry.cols as i32 {
            let placement = Placement { x, y };
            let position = geometry.unproject(placement);

            let (glyph, style) = match by_placement.get(&placement) {
                Some(character) => theme.render_unit(character, local),
                None => theme.empty_cell(),
            };
            let under_cursor = cursor.is_visible() && cursor.position() == position;
            let style = theme.cell_overlay(style, machine.is_highlighted(position), under_cursor);

            spans.push(Span::styled(format!("{:^width$}", glyph, width = width), style));
        }
        lines.push(Line::from(spans));
    }

    let mut ruler = vec![Span::raw("   ")];
    for col in 0..geometry.cols {
        ruler.push(Span::styled(
            format!("{:^width$}", col, width = width),
            label_style,
        ));
    }
    lines.push(Line::from(ruler));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::{BoardGeometry, NotificationBus, PollControl, Roster};
    use game_protocol::{Character, CharacterId, Classification, Player, PositionDto, Properties};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn machine() -> InteractionMachine {
        let geometry = BoardGeometry::new(3, 3);
        let units = [
            Character {
                id: CharacterId::new("mine"),
                player: Player::Player1,
                position: PositionDto::ORIGIN,
                classification: Classification::Sword,
                properties: Properties::new(),
            },
            Character {
                id: CharacterId::new("theirs"),
                player: Player::Player2,
                position: PositionDto::new(2, 2),
                classification: Classification::Bow,
                properties: Properties::new(),
            },
        ];
        InteractionMachine::new(
            Player::Player1,
            Roster::new(units, &geometry),
            geometry,
            NotificationBus::new(),
            PollControl::new(),
        )
    }

    #[test]
    fn row_zero_is_drawn_last() {
        let lines = board_lines(&machine(), &RatatuiTheme, 2);

        assert_eq!(lines.len(), 4);
        assert_eq!(line_text(&lines[0]), " 2 . . b ");
        assert_eq!(line_text(&lines[1]), " 1 . . . ");
        assert_eq!(line_text(&lines[2]), " 0 S . . ");
        assert_eq!(line_text(&lines[3]), "   0 1 2 ");
    }
}
