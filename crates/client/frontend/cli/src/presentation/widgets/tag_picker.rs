//! Tag picker overlay: choose a tag type, then a cost axis when one is needed.

use client_frontend_core::view_model::TagPickerView;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use crate::{presentation::theme::RatatuiTheme, state::PickerStage};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    picker: &TagPickerView,
    stage: PickerStage,
    cursor: usize,
    theme: &RatatuiTheme,
) {
    let (title, items): (String, Vec<ListItem>) = match (stage, picker.selected_type) {
        (PickerStage::ChooseAxis, Some(tag_type)) => (
            format!(" {tag_type}: pay with "),
            picker
                .axes
                .iter()
                .map(|&axis| {
                    let cost = tag_type.axis_cost(axis);
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{:<10}", axis.as_ref()), theme.value()),
                        Span::styled(
                            format!("{:+} damage, {:+} cooldown", cost.damage, cost.cooldown),
                            theme.label(),
                        ),
                    ]))
                })
                .collect(),
        ),
        _ => (
            " Add Tag ".to_string(),
            picker
                .tag_types
                .iter()
                .map(|tag_type| ListItem::new(Span::styled(tag_type.to_string(), theme.value())))
                .collect(),
        ),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border(true))
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .highlight_style(theme.focused())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(cursor));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}
