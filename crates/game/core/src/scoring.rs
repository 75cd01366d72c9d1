//! Damage, cooldown and experience formulas.
//!
//! Every function here is total: any move type, level and tag list yields a
//! number. Zero or negative damage is a legal result, not an error.
//!
//! # Formulas
//!
//! ```text
//! Standard:  damage   = 1 + level*2 + Σ damage_cost
//!            cooldown = Σ cooldown_cost
//!            xp       = level*2 + 2 * count(Damage tags)
//! Finishing: damage   = level - count(tags)
//!            cooldown = 0
//!            xp       = 6 + level*2
//! Combo:     damage   = level + 1 - count(tags)
//!            cooldown = 0
//!            xp       = 8 + level*2
//! ```

use crate::config::RulesConfig;
use crate::state::{Level, MoveType, Tag, TagType};

/// Point-in-time statistics of a move or draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveStats {
    pub damage: i32,
    pub cooldown: i32,
    pub xp: i32,
}

impl MoveStats {
    pub fn compute(move_type: MoveType, level: Level, tags: &[Tag]) -> Self {
        Self {
            damage: calculate_damage(move_type, level, tags),
            cooldown: calculate_cooldown(move_type, tags),
            xp: calculate_xp(move_type, level, tags),
        }
    }
}

pub fn calculate_damage(move_type: MoveType, level: Level, tags: &[Tag]) -> i32 {
    match move_type {
        MoveType::Standard => {
            let tag_shift: i32 = tags.iter().map(|tag| tag.damage_cost).sum();
            RulesConfig::STANDARD_BASE_DAMAGE
                + level.value() * RulesConfig::STANDARD_DAMAGE_PER_LEVEL
                + tag_shift
        }
        MoveType::Finishing => level.value() - tag_count(tags),
        MoveType::Combo => level.value() + RulesConfig::COMBO_DAMAGE_BONUS - tag_count(tags),
    }
}

/// Only Standard moves accumulate cooldown.
pub fn calculate_cooldown(move_type: MoveType, tags: &[Tag]) -> i32 {
    match move_type {
        MoveType::Standard => tags.iter().map(|tag| tag.cooldown_cost).sum(),
        MoveType::Finishing | MoveType::Combo => 0,
    }
}

pub fn calculate_xp(move_type: MoveType, level: Level, tags: &[Tag]) -> i32 {
    let level_xp = level.value() * RulesConfig::XP_PER_LEVEL;

    match move_type {
        MoveType::Standard => {
            let damage_tags = tags
                .iter()
                .filter(|tag| tag.tag_type == TagType::Damage)
                .count() as i32;
            level_xp + damage_tags * RulesConfig::XP_PER_DAMAGE_TAG
        }
        MoveType::Finishing => RulesConfig::FINISHING_BASE_XP + level_xp,
        MoveType::Combo => RulesConfig::COMBO_BASE_XP + level_xp,
    }
}

fn tag_count(tags: &[Tag]) -> i32 {
    tags.len() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CostAxis, TagCost};

    fn level(value: u8) -> Level {
        Level::new(value).unwrap()
    }

    fn damage_tag() -> Tag {
        Tag::new(TagType::Damage, TagCost::new(2, 2))
    }

    #[test]
    fn standard_without_tags() {
        for value in 1..=3 {
            let stats = MoveStats::compute(MoveType::Standard, level(value), &[]);
            let l = value as i32;
            assert_eq!(stats.damage, 1 + l * 2);
            assert_eq!(stats.cooldown, 0);
            assert_eq!(stats.xp, l * 2);
        }
    }

    #[test]
    fn standard_sums_tag_costs() {
        let tags = [
            damage_tag(),
            Tag::new(TagType::Aoe, TagType::Aoe.axis_cost(CostAxis::Damage)),
            Tag::new(
                TagType::Immobilize,
                TagType::Immobilize.axis_cost(CostAxis::Cooldown),
            ),
        ];

        // 1 + 4 + 2 - 2 + 0
        assert_eq!(calculate_damage(MoveType::Standard, level(2), &tags), 5);
        // 2 + 0 + 3
        assert_eq!(calculate_cooldown(MoveType::Standard, &tags), 5);
        // only the Damage tag costs experience
        assert_eq!(calculate_xp(MoveType::Standard, level(2), &tags), 6);
    }

    #[test]
    fn finishing_counts_tags() {
        let tags = [damage_tag(), damage_tag()];
        let stats = MoveStats::compute(MoveType::Finishing, level(3), &tags);
        assert_eq!(stats.damage, 1);
        assert_eq!(stats.cooldown, 0);
        assert_eq!(stats.xp, 12);
    }

    #[test]
    fn finishing_xp_ignores_tags() {
        let none = calculate_xp(MoveType::Finishing, level(2), &[]);
        let some = calculate_xp(MoveType::Finishing, level(2), &[damage_tag(); 3]);
        assert_eq!(none, 10);
        assert_eq!(none, some);
    }

    #[test]
    fn combo_counts_tags_with_bonus() {
        let tags = [Tag::ranged_seed()];
        let stats = MoveStats::compute(MoveType::Combo, level(1), &tags);
        assert_eq!(stats.damage, 1);
        assert_eq!(stats.cooldown, 0);
        assert_eq!(stats.xp, 10);
    }

    #[test]
    fn damage_may_go_negative() {
        let tags = [Tag::ranged_seed(); 3];
        assert_eq!(calculate_damage(MoveType::Finishing, level(1), &tags), -2);

        let heavy = [
            Tag::new(TagType::Immobilize, TagCost::new(-3, 0)),
            Tag::new(TagType::Aoe, TagCost::new(-2, 0)),
        ];
        assert_eq!(calculate_damage(MoveType::Standard, level(1), &heavy), -2);
    }

    #[test]
    fn cooldown_reduction_can_drive_cooldown_negative() {
        let tags = [Tag::new(TagType::CooldownReduction, TagCost::new(-1, -1))];
        assert_eq!(calculate_cooldown(MoveType::Standard, &tags), -1);
    }
}
