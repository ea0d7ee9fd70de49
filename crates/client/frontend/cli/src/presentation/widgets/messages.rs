//! Message log panel.

use client_frontend_core::MessageLog;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the most recent messages, oldest at the top.
pub fn render(frame: &mut Frame, area: Rect, log: &MessageLog, theme: &RatatuiTheme) {
    let visible = usize::from(area.height.saturating_sub(2));
    let mut lines: Vec<Line> = log
        .recent(visible)
        .map(|entry| Line::from(Span::styled(entry.text.clone(), theme.message_style(entry.level))))
        .collect();
    lines.reverse();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Messages "));
    frame.render_widget(paragraph, area);
}
