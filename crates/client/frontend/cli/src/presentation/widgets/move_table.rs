//! Table of finished moves.

use client_frontend_core::view_model::{MOVE_TABLE_HEADERS, MoveRow};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::presentation::theme::RatatuiTheme;

const WIDTHS: [Constraint; 8] = [
    Constraint::Min(14),
    Constraint::Length(6),
    Constraint::Length(12),
    Constraint::Length(10),
    Constraint::Length(7),
    Constraint::Length(9),
    Constraint::Min(18),
    Constraint::Length(8),
];

pub fn render(frame: &mut Frame, area: Rect, moves: &[MoveRow], theme: &RatatuiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(false))
        .title(" Moves ");

    if moves.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No moves yet. Fill in the form below and press Enter.",
            theme.hint(),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        MOVE_TABLE_HEADERS
            .iter()
            .map(|title| Cell::from(*title).style(theme.title().add_modifier(Modifier::UNDERLINED))),
    );

    let rows = moves
        .iter()
        .map(|row| Row::new(row.cells().map(Cell::from)).style(theme.value()));

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .column_spacing(1)
        .block(block);

    frame.render_widget(table, area);
}
