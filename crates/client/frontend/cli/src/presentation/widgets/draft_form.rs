//! The "add new move" form with live statistics.

use client_frontend_core::view_model::DraftPanel;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    presentation::theme::RatatuiTheme,
    state::{AppState, Field},
};

/// Rows needed by the form, borders included.
pub const HEIGHT: u16 = 10;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    draft: &DraftPanel,
    app_state: &AppState,
    theme: &RatatuiTheme,
) {
    let editing = !app_state.is_picking();
    let name = if draft.name.is_empty() && app_state.focus != Field::Name {
        "(unnamed)".to_string()
    } else {
        draft.name.clone()
    };

    let field_line = |field: Field, value: String| {
        let focused = editing && app_state.focus == field;
        let value_style = if focused { theme.focused() } else { theme.value() };
        let value = match field {
            Field::Name if focused => format!("{value}_"),
            Field::Name => value,
            _ if focused => format!("◀ {value} ▶"),
            _ => value,
        };
        Line::from(vec![
            Span::styled(format!("{:<12}", field.label()), theme.label()),
            Span::styled(value, value_style),
        ])
    };

    let tags = if draft.tags.is_empty() {
        Span::styled("none", theme.disabled())
    } else {
        Span::styled(draft.tags.clone(), theme.value())
    };

    let lines = vec![
        field_line(Field::Name, name),
        field_line(Field::Level, draft.level.to_string()),
        field_line(Field::AttackType, draft.attack_type.to_string()),
        field_line(Field::MoveType, draft.move_type.to_string()),
        Line::from(vec![Span::styled(format!("{:<12}", "Tags"), theme.label()), tags]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Damage: ", theme.label()),
            Span::styled(draft.stats.damage.to_string(), theme.stat()),
            Span::styled("   Cooldown: ", theme.label()),
            Span::styled(draft.stats.cooldown.to_string(), theme.stat()),
            Span::styled("   XP Cost: ", theme.label()),
            Span::styled(draft.stats.xp.to_string(), theme.stat()),
        ]),
        Line::from(vec![
            action("[Ctrl-T] Add Tag", draft.can_add_tag, theme),
            Span::raw("  "),
            action("[Ctrl-L] Clear Tags", draft.can_clear_tags, theme),
            Span::raw("  "),
            action("[Enter] Add Move", true, theme),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(editing))
            .title(" Add New Move "),
    );

    frame.render_widget(paragraph, area);
}

fn action<'a>(label: &'a str, enabled: bool, theme: &RatatuiTheme) -> Span<'a> {
    let style: Style = if enabled { theme.value() } else { theme.disabled() };
    Span::styled(label, style)
}
