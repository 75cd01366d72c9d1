//! Which tags and cost axes a draft may take next.
//!
//! Each tag spends either damage or cooldown budget. The thresholds below
//! stop a Standard move from stacking discounts past what its budget can
//! pay for, and stop Finishing/Combo moves from taking tags once their
//! damage runs low.
//!
//! ```text
//! Standard:
//!   Damage              cooldown <= 3
//!   Ranged              not present, and (cooldown <= 4 or damage >= 1)
//!   AOE                 cooldown <= 3 or damage >= 2
//!   Immobilize          not present, and (cooldown <= 2 or damage >= 3)
//!   Cooldown Reduction  cooldown >= 1 and damage >= 1
//! Finishing / Combo:
//!   AOE                 damage >= 2
//!   Immobilize          not present, and damage >= 2
//! ```
//!
//! All thresholds compare against the draft's current damage and cooldown,
//! before the candidate tag is applied.

use arrayvec::ArrayVec;

use crate::config::RulesConfig;
use crate::scoring::{calculate_cooldown, calculate_damage};
use crate::state::{CostAxes, CostAxis, Level, MoveType, Tag, TagType};

/// Tag types offerable at once; at most every type.
pub type TagTypeList = ArrayVec<TagType, { TagType::ALL.len() }>;

/// Budget limits of a tag type whose cost is paid on a chosen axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisBudget {
    /// Paying on the damage axis needs at least this much current damage.
    pub min_damage: i32,
    /// Paying on the cooldown axis needs at most this much current cooldown.
    pub max_cooldown: i32,
}

impl AxisBudget {
    pub const fn allows(&self, axis: CostAxis, damage: i32, cooldown: i32) -> bool {
        match axis {
            CostAxis::Damage => damage >= self.min_damage,
            CostAxis::Cooldown => cooldown <= self.max_cooldown,
        }
    }

    pub const fn allows_any(&self, damage: i32, cooldown: i32) -> bool {
        self.allows(CostAxis::Damage, damage, cooldown)
            || self.allows(CostAxis::Cooldown, damage, cooldown)
    }
}

impl TagType {
    /// Axis budget for tag types priced per axis; `None` for fixed-cost types.
    pub const fn axis_budget(self) -> Option<AxisBudget> {
        let (min_damage, max_cooldown) = match self {
            Self::Ranged => (1, 4),
            Self::Aoe => (2, 3),
            Self::Immobilize => (3, 2),
            Self::Damage | Self::CooldownReduction => return None,
        };
        Some(AxisBudget {
            min_damage,
            max_cooldown,
        })
    }
}

/// Tag types the draft may take next, in display order.
pub fn available_tag_types(move_type: MoveType, level: Level, tags: &[Tag]) -> TagTypeList {
    let damage = calculate_damage(move_type, level, tags);
    let cooldown = calculate_cooldown(move_type, tags);

    TagType::ALL
        .into_iter()
        .filter(|tag_type| {
            let present = tags.iter().any(|tag| tag.tag_type == *tag_type);
            is_offerable(move_type, *tag_type, present, damage, cooldown)
        })
        .collect()
}

/// Cost axes open for paying a tag of `tag_type` on the draft.
///
/// Empty for fixed-cost tag types and for Finishing/Combo moves, whose tags
/// carry no axis.
pub fn available_cost_axes(
    move_type: MoveType,
    level: Level,
    tags: &[Tag],
    tag_type: TagType,
) -> CostAxes {
    let mut axes = CostAxes::empty();
    if !move_type.is_standard() {
        return axes;
    }
    let Some(budget) = tag_type.axis_budget() else {
        return axes;
    };

    let damage = calculate_damage(move_type, level, tags);
    let cooldown = calculate_cooldown(move_type, tags);

    for axis in CostAxis::ALL {
        if budget.allows(axis, damage, cooldown) {
            axes.allow(axis);
        }
    }
    axes
}

fn is_offerable(
    move_type: MoveType,
    tag_type: TagType,
    present: bool,
    damage: i32,
    cooldown: i32,
) -> bool {
    if present && tag_type.is_unique() {
        return false;
    }

    if !move_type.is_standard() {
        return matches!(tag_type, TagType::Aoe | TagType::Immobilize)
            && damage >= RulesConfig::SPECIAL_MOVE_MIN_DAMAGE;
    }

    match tag_type {
        TagType::Damage => cooldown <= RulesConfig::DAMAGE_TAG_MAX_COOLDOWN,
        TagType::CooldownReduction => {
            cooldown >= RulesConfig::COOLDOWN_REDUCTION_MIN_COOLDOWN
                && damage >= RulesConfig::COOLDOWN_REDUCTION_MIN_DAMAGE
        }
        TagType::Ranged | TagType::Aoe | TagType::Immobilize => tag_type
            .axis_budget()
            .is_some_and(|budget| budget.allows_any(damage, cooldown)),
    }
}

/// Both eligibility answers for one draft state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Eligibility {
    pub tag_types: TagTypeList,
    pub can_clear_tags: bool,
}

impl Eligibility {
    pub fn evaluate(move_type: MoveType, level: Level, tags: &[Tag]) -> Self {
        Self {
            tag_types: available_tag_types(move_type, level, tags),
            can_clear_tags: !tags.is_empty(),
        }
    }

    /// Whether the "add tag" affordance should be shown.
    pub fn can_add_tag(&self) -> bool {
        !self.tag_types.is_empty()
    }

    pub fn offers(&self, tag_type: TagType) -> bool {
        self.tag_types.contains(&tag_type)
    }
}
