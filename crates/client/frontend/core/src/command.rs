//! User intents and their application to a [`MoveBuilder`].
//!
//! Frontends map raw input (keys, clicks) to [`BuilderCommand`]s and hand
//! them to [`apply`]; the resulting [`BuilderEvent`] or [`DraftError`] tells
//! them what to report.

use move_core::{AttackType, CostAxis, DraftError, MoveBuilder, MoveType, TagType};
use strum::IntoEnumIterator;

use crate::event::BuilderEvent;

/// Direction for stepping through a bounded or cyclic field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuilderCommand {
    SetName(String),
    StepLevel(Step),
    CycleAttackType(Step),
    CycleMoveType(Step),
    SetAttackType(AttackType),
    SetMoveType(MoveType),
    OpenTagPicker,
    SelectTagType(TagType),
    SelectCostAxis(CostAxis),
    SaveTag,
    CancelTagPicker,
    ClearTags,
    AddMove,
    ClearDraft,
}

/// Applies one command to the builder.
pub fn apply(
    builder: &mut MoveBuilder,
    command: BuilderCommand,
) -> Result<BuilderEvent, DraftError> {
    let tag_count = builder.draft().tags.len();

    let event = match command {
        BuilderCommand::SetName(name) => {
            builder.set_name(name);
            BuilderEvent::NameChanged
        }
        BuilderCommand::StepLevel(step) => {
            let current = builder.draft().level;
            let level = match step {
                Step::Forward => current.saturating_inc(),
                Step::Backward => current.saturating_dec(),
            };
            builder.set_level(level);
            BuilderEvent::LevelChanged(level)
        }
        BuilderCommand::CycleAttackType(step) => {
            let attack_type = cycle(builder.draft().attack_type, step);
            return apply(builder, BuilderCommand::SetAttackType(attack_type));
        }
        BuilderCommand::CycleMoveType(step) => {
            let move_type = cycle(builder.draft().move_type, step);
            return apply(builder, BuilderCommand::SetMoveType(move_type));
        }
        BuilderCommand::SetAttackType(attack_type) => {
            builder.set_attack_type(attack_type);
            BuilderEvent::AttackTypeChanged {
                attack_type,
                dropped_tags: tag_count,
            }
        }
        BuilderCommand::SetMoveType(move_type) => {
            builder.set_move_type(move_type);
            BuilderEvent::MoveTypeChanged {
                move_type,
                dropped_tags: tag_count,
            }
        }
        BuilderCommand::OpenTagPicker => {
            builder.open_tag_picker()?;
            BuilderEvent::TagPickerOpened
        }
        BuilderCommand::SelectTagType(tag_type) => {
            builder.select_tag_type(tag_type)?;
            BuilderEvent::TagTypeSelected(tag_type)
        }
        BuilderCommand::SelectCostAxis(axis) => {
            builder.select_cost_axis(axis)?;
            BuilderEvent::CostAxisSelected(axis)
        }
        BuilderCommand::SaveTag => BuilderEvent::TagAdded(builder.save_tag()?),
        BuilderCommand::CancelTagPicker => {
            builder.cancel_tag_picker();
            BuilderEvent::TagPickerClosed
        }
        BuilderCommand::ClearTags => {
            builder.clear_tags();
            BuilderEvent::TagsCleared {
                dropped_tags: tag_count,
            }
        }
        BuilderCommand::AddMove => {
            let added = builder.add_move();
            BuilderEvent::MoveAdded {
                name: added.name.clone(),
                stats: added.stats(),
            }
        }
        BuilderCommand::ClearDraft => {
            builder.clear_draft();
            BuilderEvent::DraftCleared
        }
    };

    Ok(event)
}

/// Next (or previous) variant of a closed enum, wrapping at the ends.
fn cycle<T>(current: T, step: Step) -> T
where
    T: IntoEnumIterator + PartialEq + Copy,
{
    let variants: Vec<T> = T::iter().collect();
    let index = variants.iter().position(|v| *v == current).unwrap_or(0);
    let next = match step {
        Step::Forward => (index + 1) % variants.len(),
        Step::Backward => (index + variants.len() - 1) % variants.len(),
    };
    variants[next]
}
