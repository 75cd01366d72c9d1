//! Event loop orchestrating user input, builder commands, and rendering.
//!
//! Every key press becomes at most a few [`BuilderCommand`]s; their
//! outcomes go to the consumer and the screen is redrawn from a fresh
//! [`ViewModel`].

use std::ops::ControlFlow;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::{self, Duration, MissedTickBehavior};

use client_frontend_core::{
    BuilderCommand, BuilderEvent, EventConsumer, EventImpact, ViewModel, apply,
};
use move_core::{BuilderPhase, CostAxis, MoveBuilder, TagType};

use crate::{
    config::CliConfig,
    input::{InputHandler, KeyAction, NameEdit},
    presentation::{
        terminal::Tui,
        ui::{self, RenderContext},
    },
    state::{AppMode, AppState, PickerStage},
};

/// Owns the session's builder and coordinates input and rendering.
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) builder: MoveBuilder,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) app_state: AppState,
    pub(crate) cli_config: CliConfig,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(builder: MoveBuilder, consumer: C, cli_config: CliConfig) -> Self {
        Self {
            builder,
            input: InputHandler::new(),
            consumer,
            app_state: AppState::new(),
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        let mut ticker = time::interval(Duration::from_millis(self.cli_config.ui.frame_interval_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if self.handle_input_tick(terminal)? {
                break;
            }
        }

        Ok(self.consumer)
    }

    /// Drains pending terminal events. Returns `true` when the user quit.
    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        let mut impact = EventImpact::none();

        while term_event::poll(Duration::from_millis(0))? {
            match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    match self.process_key(key) {
                        ControlFlow::Continue(next) => impact = impact.combine(next),
                        ControlFlow::Break(()) => {
                            self.consumer.message_log_mut().push_text("Quitting...");
                            self.render(terminal)?;
                            return Ok(true);
                        }
                    }
                }
                TermEvent::Resize(_, _) => impact = impact.combine(EventImpact::redraw()),
                _ => {}
            }
        }

        if impact.requires_redraw {
            self.render(terminal)?;
        }
        Ok(false)
    }

    /// Applies one key press. `Break` means quit.
    pub(crate) fn process_key(&mut self, key: KeyEvent) -> ControlFlow<(), EventImpact> {
        let impact = match self.input.handle_key(key, &self.app_state) {
            KeyAction::Quit => return ControlFlow::Break(()),
            KeyAction::None => EventImpact::none(),
            KeyAction::Command(command) => self.dispatch(command).0,
            KeyAction::EditName(edit) => {
                let mut name = self.builder.draft().name.clone();
                match edit {
                    NameEdit::Push(ch) => name.push(ch),
                    NameEdit::Pop => {
                        name.pop();
                    }
                }
                self.dispatch(BuilderCommand::SetName(name)).0
            }
            KeyAction::FocusNext => {
                self.app_state.focus = self.app_state.focus.next();
                EventImpact::redraw()
            }
            KeyAction::FocusPrev => {
                self.app_state.focus = self.app_state.focus.prev();
                EventImpact::redraw()
            }
            KeyAction::CursorUp => {
                self.app_state.move_cursor(-1, self.picker_len());
                EventImpact::redraw()
            }
            KeyAction::CursorDown => {
                self.app_state.move_cursor(1, self.picker_len());
                EventImpact::redraw()
            }
            KeyAction::Confirm => self.confirm_picker(),
            KeyAction::Back => self.back_picker(),
        };

        ControlFlow::Continue(impact)
    }

    /// Applies a command and reports the outcome to the consumer.
    ///
    /// The flag is `true` when the builder accepted the command.
    fn dispatch(&mut self, command: BuilderCommand) -> (EventImpact, bool) {
        tracing::debug!(?command, "applying command");

        match apply(&mut self.builder, command) {
            Ok(event) => {
                tracing::debug!(?event, "command applied");
                self.sync_mode(&event);
                (self.consumer.on_event(&event), true)
            }
            Err(error) => {
                tracing::warn!(code = error.error_code(), "command rejected: {}", error);
                (self.consumer.on_rejected(&error), false)
            }
        }
    }

    fn sync_mode(&mut self, event: &BuilderEvent) {
        match event {
            BuilderEvent::TagPickerOpened => self.app_state.open_picker(),
            BuilderEvent::TagAdded(_) | BuilderEvent::TagPickerClosed => {
                self.app_state.close_picker()
            }
            _ => {}
        }
    }

    fn confirm_picker(&mut self) -> EventImpact {
        let AppMode::TagPicker { stage, cursor } = self.app_state.mode else {
            return EventImpact::none();
        };

        match stage {
            PickerStage::ChooseType => {
                let Some(tag_type) = self.offered_types().get(cursor).copied() else {
                    return EventImpact::none();
                };
                let (impact, accepted) = self.dispatch(BuilderCommand::SelectTagType(tag_type));
                if !accepted {
                    return impact;
                }

                if self.builder.cost_axes(tag_type).is_empty() {
                    impact.combine(self.dispatch(BuilderCommand::SaveTag).0)
                } else {
                    self.app_state.choose_axis();
                    impact
                }
            }
            PickerStage::ChooseAxis => {
                let Some(axis) = self.offered_axes().get(cursor).copied() else {
                    return EventImpact::none();
                };
                let (impact, accepted) = self.dispatch(BuilderCommand::SelectCostAxis(axis));
                if !accepted {
                    return impact;
                }
                impact.combine(self.dispatch(BuilderCommand::SaveTag).0)
            }
        }
    }

    fn back_picker(&mut self) -> EventImpact {
        match self.app_state.mode {
            AppMode::TagPicker {
                stage: PickerStage::ChooseAxis,
                ..
            } => {
                let cursor = self
                    .selected_type()
                    .and_then(|selected| self.offered_types().iter().position(|t| *t == selected))
                    .unwrap_or(0);
                self.app_state.back_to_types(cursor);
                EventImpact::redraw()
            }
            AppMode::TagPicker {
                stage: PickerStage::ChooseType,
                ..
            } => self.dispatch(BuilderCommand::CancelTagPicker).0,
            AppMode::Editing => EventImpact::none(),
        }
    }

    fn offered_types(&self) -> Vec<TagType> {
        self.builder.eligibility().tag_types.to_vec()
    }

    fn selected_type(&self) -> Option<TagType> {
        match self.builder.phase() {
            BuilderPhase::PendingTag(pending) => pending.tag_type,
            BuilderPhase::Editing => None,
        }
    }

    fn offered_axes(&self) -> Vec<CostAxis> {
        self.selected_type()
            .map(|tag_type| self.builder.cost_axes(tag_type).axes().collect())
            .unwrap_or_default()
    }

    fn picker_len(&self) -> usize {
        match self.app_state.mode {
            AppMode::TagPicker {
                stage: PickerStage::ChooseType,
                ..
            } => self.offered_types().len(),
            AppMode::TagPicker {
                stage: PickerStage::ChooseAxis,
                ..
            } => self.offered_axes().len(),
            AppMode::Editing => 0,
        }
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let view_model = ViewModel::from_builder(&self.builder);
        let ctx = RenderContext {
            view_model: &view_model,
            messages: self.consumer.message_log(),
            app_state: &self.app_state,
            message_panel_height: self.cli_config.ui.message_panel_height,
        };
        ui::render(terminal, &ctx)
    }
}
