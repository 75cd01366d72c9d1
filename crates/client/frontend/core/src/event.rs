//! Outcomes of applied commands and the trait UI layers consume them with.
use move_core::{AttackType, CostAxis, DraftError, Level, MoveStats, MoveType, Tag, TagType};

use crate::message::MessageLog;

/// What a successfully applied [`BuilderCommand`](crate::BuilderCommand) changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuilderEvent {
    NameChanged,
    LevelChanged(Level),
    /// The attack type changed and the tag list was rebuilt.
    AttackTypeChanged {
        attack_type: AttackType,
        dropped_tags: usize,
    },
    /// The move type changed and the tag list was rebuilt.
    MoveTypeChanged {
        move_type: MoveType,
        dropped_tags: usize,
    },
    TagPickerOpened,
    TagTypeSelected(TagType),
    CostAxisSelected(CostAxis),
    TagAdded(Tag),
    TagPickerClosed,
    TagsCleared {
        dropped_tags: usize,
    },
    MoveAdded {
        name: String,
        stats: MoveStats,
    },
    DraftCleared,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

/// Receives the outcome of every command a frontend applies.
pub trait EventConsumer {
    fn on_event(&mut self, event: &BuilderEvent) -> EventImpact;
    fn on_rejected(&mut self, error: &DraftError) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}
