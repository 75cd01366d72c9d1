//! Finalized moves and the draft they are built from.

use crate::format::format_tags;
use crate::scoring::MoveStats;
use crate::state::{AttackType, Level, MoveType, Tag, TagCost, TagType};

/// A finalized move.
///
/// Only [`Draft::finalize`] creates one, and nothing mutates it afterwards;
/// fields are public for reading by frontends.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub name: String,
    pub level: Level,
    pub attack_type: AttackType,
    pub move_type: MoveType,
    pub tags: Vec<Tag>,
}

impl Move {
    pub fn stats(&self) -> MoveStats {
        MoveStats::compute(self.move_type, self.level, &self.tags)
    }

    pub fn tag_summary(&self) -> String {
        format_tags(&self.tags)
    }

    /// Sample moves showing a typical Standard build.
    pub fn examples() -> Vec<Move> {
        let damage = Tag::new(TagType::Damage, TagCost::new(2, 2));

        vec![
            Move {
                name: "Move 1".to_string(),
                level: Level::MIN,
                attack_type: AttackType::Martial,
                move_type: MoveType::Standard,
                tags: vec![damage, Tag::ranged_seed()],
            },
            Move {
                name: "Move 2".to_string(),
                level: Level::clamped(2),
                attack_type: AttackType::Melee,
                move_type: MoveType::Standard,
                tags: vec![damage, damage, Tag::ranged_seed()],
            },
        ]
    }
}

/// The move currently being composed.
///
/// Same shape as [`Move`] but editable field by field. Tag bookkeeping that
/// depends on the rules (auto-seeding, eligibility) lives in
/// [`crate::MoveBuilder`]; the draft itself is plain data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Draft {
    pub name: String,
    pub level: Level,
    pub attack_type: AttackType,
    pub move_type: MoveType,
    pub tags: Vec<Tag>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags a draft with this attack/move type combination starts from.
    pub fn seed_tags(attack_type: AttackType, move_type: MoveType) -> Vec<Tag> {
        if attack_type == AttackType::Ranged && move_type == MoveType::Standard {
            vec![Tag::ranged_seed()]
        } else {
            Vec::new()
        }
    }

    /// Live statistics for the draft as it stands.
    pub fn stats(&self) -> MoveStats {
        MoveStats::compute(self.move_type, self.level, &self.tags)
    }

    pub fn tag_summary(&self) -> String {
        format_tags(&self.tags)
    }

    pub fn has_tag(&self, tag_type: TagType) -> bool {
        self.tags.iter().any(|tag| tag.tag_type == tag_type)
    }

    /// Freezes a copy of the draft as a finished move.
    pub fn finalize(&self) -> Move {
        Move {
            name: self.name.clone(),
            level: self.level,
            attack_type: self.attack_type,
            move_type: self.move_type,
            tags: self.tags.clone(),
        }
    }
}
