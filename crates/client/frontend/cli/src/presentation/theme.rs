//! Ratatui styling for the move builder.
//!
//! Widgets ask the theme instead of hard-coding colors so the palette
//! stays consistent across panels.

use client_frontend_core::message::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn value(&self) -> Style {
        Style::default().fg(Color::White)
    }

    /// Field or picker row under the keyboard.
    pub fn focused(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn stat(&self) -> Style {
        Style::default().fg(Color::LightGreen)
    }

    pub fn disabled(&self) -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn hint(&self) -> Style {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn border(&self, active: bool) -> Style {
        if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
        }
    }
}
