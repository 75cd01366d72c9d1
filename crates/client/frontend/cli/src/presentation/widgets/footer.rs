//! Key hints for the current mode.

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use crate::{
    presentation::theme::RatatuiTheme,
    state::{AppMode, AppState, PickerStage},
};

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState, theme: &RatatuiTheme) {
    let hints = match app_state.mode {
        AppMode::Editing => {
            "Tab/↑↓ field | ←→ change | Ctrl-T add tag | Ctrl-L clear tags | \
             Enter add move | Ctrl-R clear draft | Esc quit"
        }
        AppMode::TagPicker {
            stage: PickerStage::ChooseType,
            ..
        } => "↑↓ choose tag | Enter select | Esc cancel",
        AppMode::TagPicker {
            stage: PickerStage::ChooseAxis,
            ..
        } => "↑↓ choose cost | Enter save tag | Esc back",
    };

    frame.render_widget(Paragraph::new(Line::styled(hints, theme.hint())), area);
}
