//! UI rendering entry point composing all widgets.
use anyhow::Result;
use client_frontend_core::{message::MessageLog, view_model::ViewModel};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::{AppMode, AppState},
};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

/// Lays out header, move table, draft form, messages and footer, then the
/// tag picker on top when it is open.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let theme = RatatuiTheme::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(4),                           // Move table
            Constraint::Length(widgets::draft_form::HEIGHT),
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(2),                        // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.view_model, &theme);
    widgets::move_table::render(frame, chunks[1], &ctx.view_model.moves, &theme);
    widgets::draft_form::render(
        frame,
        chunks[2],
        &ctx.view_model.draft,
        ctx.app_state,
        &theme,
    );

    let recent_messages: Vec<_> = ctx
        .messages
        .recent(ctx.message_panel_height.saturating_sub(2) as usize)
        .cloned()
        .collect();
    widgets::messages::render(frame, chunks[3], &recent_messages, &theme);

    widgets::footer::render(frame, chunks[4], ctx.app_state, &theme);

    if let (Some(picker), AppMode::TagPicker { stage, cursor }) =
        (&ctx.view_model.tag_picker, ctx.app_state.mode)
    {
        let area = centered_rect(50, 60, frame.area());
        widgets::tag_picker::render(frame, area, picker, stage, cursor, &theme);
    }
}

/// Create a centered rectangle for modal overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
