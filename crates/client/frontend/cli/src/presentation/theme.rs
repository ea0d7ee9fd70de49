//! Ratatui styling rules for the tactics board.

use client_frontend_core::MessageLevel;
use game_protocol::{Character, Classification, Player};
use ratatui::style::{Color, Modifier, Style};

/// Consistent color scheme and glyph rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    /// Glyph and style for a unit. The local player's units are upper case.
    pub fn render_unit(&self, character: &Character, local: Player) -> (String, Style) {
        let glyph = match character.classification {
            Classification::Axe => 'a',
            Classification::Sword => 's',
            Classification::Lance => 'l',
            Classification::Bow => 'b',
            Classification::Support => 'h',
        };

        let is_local = character.player == local;
        let glyph = if is_local {
            glyph.to_ascii_uppercase()
        } else {
            glyph
        };
        let color = if is_local {
            Color::Yellow
        } else {
            Color::LightRed
        };

        let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if is_exhausted(character) {
            style = style.add_modifier(Modifier::DIM);
        }

        (glyph.to_string(), style)
    }

    pub fn empty_cell(&self) -> (String, Style) {
        (".".to_string(), Style::default().fg(Color::DarkGray))
    }

    /// Background treatment layered over a cell's own style.
    pub fn cell_overlay(&self, style: Style, highlighted: bool, under_cursor: bool) -> Style {
        let style = if highlighted {
            style.bg(Color::Blue)
        } else {
            style
        };
        if under_cursor {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    pub fn player_style(&self, player: Player, local: Player) -> Style {
        if player == local {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::LightRed)
        }
    }

    pub fn message_style(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Highlight => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            MessageLevel::Warning => Style::default().fg(Color::LightRed),
        }
    }
}

/// Units whose `hp` property has reached zero render dimmed until the server
/// removes them.
fn is_exhausted(character: &Character) -> bool {
    character
        .property("hp")
        .and_then(|hp| hp.as_i64())
        .is_some_and(|hp| hp <= 0)
}
