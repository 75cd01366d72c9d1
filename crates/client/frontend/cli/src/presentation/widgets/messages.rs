//! Message log panel, newest entry on top.

use client_frontend_core::message::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, messages: &[MessageEntry], theme: &RatatuiTheme) {
    let lines: Vec<Line> = messages
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(format!("[{}] ", entry.sequence), theme.label()),
                Span::styled(entry.text.clone(), theme.style_message(entry.level)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border(false))
                .title(" Messages "),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
