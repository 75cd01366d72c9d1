//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_frontend_core::{BuilderCommand, Step};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, Field};

/// Edit applied to the draft name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameEdit {
    Push(char),
    Pop,
}

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Apply a builder command directly.
    Command(BuilderCommand),
    EditName(NameEdit),
    FocusNext,
    FocusPrev,
    /// Picker navigation.
    CursorUp,
    CursorDown,
    Confirm,
    Back,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into form commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, state: &AppState) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_control(key.code, state);
        }

        if state.is_picking() {
            return self.handle_picker(key.code);
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Tab | KeyCode::Down => KeyAction::FocusNext,
            KeyCode::BackTab | KeyCode::Up => KeyAction::FocusPrev,
            KeyCode::Left => self.step(state.focus, Step::Backward),
            KeyCode::Right => self.step(state.focus, Step::Forward),
            KeyCode::Enter => KeyAction::Command(BuilderCommand::AddMove),
            KeyCode::Backspace if state.focus == Field::Name => KeyAction::EditName(NameEdit::Pop),
            KeyCode::Char(ch) if state.focus == Field::Name => {
                KeyAction::EditName(NameEdit::Push(ch))
            }
            _ => KeyAction::None,
        }
    }

    fn handle_control(&self, code: KeyCode, state: &AppState) -> KeyAction {
        let KeyCode::Char(ch) = code else {
            return KeyAction::None;
        };

        match ch.to_ascii_lowercase() {
            'c' => KeyAction::Quit,
            // Form shortcuts are inert while the picker is up.
            _ if state.is_picking() => KeyAction::None,
            't' => KeyAction::Command(BuilderCommand::OpenTagPicker),
            'l' => KeyAction::Command(BuilderCommand::ClearTags),
            'a' => KeyAction::Command(BuilderCommand::AddMove),
            'r' => KeyAction::Command(BuilderCommand::ClearDraft),
            _ => KeyAction::None,
        }
    }

    fn handle_picker(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Up | KeyCode::BackTab => KeyAction::CursorUp,
            KeyCode::Down | KeyCode::Tab => KeyAction::CursorDown,
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Esc | KeyCode::Backspace => KeyAction::Back,
            _ => KeyAction::None,
        }
    }

    fn step(&self, focus: Field, step: Step) -> KeyAction {
        let command = match focus {
            Field::Name => return KeyAction::None,
            Field::Level => BuilderCommand::StepLevel(step),
            Field::AttackType => BuilderCommand::CycleAttackType(step),
            Field::MoveType => BuilderCommand::CycleMoveType(step),
        };
        KeyAction::Command(command)
    }
}
