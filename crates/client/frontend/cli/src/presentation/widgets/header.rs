//! Header widget with the application title and move count.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub const TITLE: &str = "Kamen Rider RPG Move Builder";

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let total_xp: i32 = view_model.moves.iter().map(|row| row.stats.xp).sum();

    let line = Line::from(vec![
        Span::styled(TITLE, theme.title()),
        Span::styled("  |  Moves: ", theme.label()),
        Span::styled(view_model.moves.len().to_string(), theme.stat()),
        Span::styled("  |  Total XP: ", theme.label()),
        Span::styled(total_xp.to_string(), theme.stat()),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
