//! Closed sets of choices a move is built from.
//!
//! Display names match the labels shown to the player, so frontends can
//! render any of these enums with `to_string()` and nothing else.

use bitflags::bitflags;

/// How the move is delivered.
///
/// Descriptive only: scoring ignores it. It matters for the Ranged auto-seed
/// rule in [`crate::MoveBuilder`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackType {
    #[default]
    Martial,
    Melee,
    Ranged,
}

/// Selects which scoring formula applies to a move.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveType {
    #[default]
    Standard,
    Finishing,
    Combo,
}

impl MoveType {
    /// Returns true for the only move type whose tags carry a cost split.
    pub const fn is_standard(self) -> bool {
        matches!(self, Self::Standard)
    }
}

/// Modifier kinds that can be attached to a move.
///
/// Variant order is the order tag summaries and tag pickers list them in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagType {
    Damage,
    Ranged,
    #[strum(serialize = "AOE")]
    Aoe,
    Immobilize,
    #[strum(serialize = "Cooldown Reduction")]
    CooldownReduction,
}

impl TagType {
    /// All tag types in display order.
    pub const ALL: [TagType; 5] = [
        TagType::Damage,
        TagType::Ranged,
        TagType::Aoe,
        TagType::Immobilize,
        TagType::CooldownReduction,
    ];

    /// Returns true if a Standard move must pay for this tag on a chosen axis.
    pub const fn requires_axis(self) -> bool {
        matches!(self, Self::Ranged | Self::Aoe | Self::Immobilize)
    }

    /// Returns true if at most one tag of this type may sit on a move.
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Ranged | Self::Immobilize)
    }
}

/// The budget a tag is paid from: lower damage or longer cooldown.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostAxis {
    Damage,
    Cooldown,
}

impl CostAxis {
    pub const ALL: [CostAxis; 2] = [CostAxis::Damage, CostAxis::Cooldown];

    const fn flag(self) -> CostAxes {
        match self {
            Self::Damage => CostAxes::DAMAGE,
            Self::Cooldown => CostAxes::COOLDOWN,
        }
    }
}

bitflags! {
    /// Set of cost axes currently open for a pending tag.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CostAxes: u8 {
        const DAMAGE = 1 << 0;
        const COOLDOWN = 1 << 1;
    }
}

impl CostAxes {
    /// Returns true if the given axis is in the set.
    pub const fn allows(self, axis: CostAxis) -> bool {
        self.contains(axis.flag())
    }

    /// Adds an axis to the set.
    pub fn allow(&mut self, axis: CostAxis) {
        self.insert(axis.flag());
    }

    /// Iterates the axes in the set, Damage first.
    pub fn axes(self) -> impl Iterator<Item = CostAxis> {
        CostAxis::ALL
            .into_iter()
            .filter(move |axis| self.allows(*axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn display_names_match_form_labels() {
        assert_eq!(TagType::Aoe.to_string(), "AOE");
        assert_eq!(
            TagType::CooldownReduction.to_string(),
            "Cooldown Reduction"
        );
        assert_eq!(AttackType::Melee.as_ref(), "Melee");
        assert_eq!(MoveType::Finishing.to_string(), "Finishing");
    }

    #[test]
    fn tag_iteration_follows_summary_order() {
        let iterated: Vec<_> = TagType::iter().collect();
        assert_eq!(iterated, TagType::ALL.to_vec());
    }

    #[test]
    fn defaults_match_fresh_draft() {
        assert_eq!(AttackType::default(), AttackType::Martial);
        assert_eq!(MoveType::default(), MoveType::Standard);
    }

    #[test]
    fn cost_axes_set_operations() {
        let mut axes = CostAxes::empty();
        assert!(!axes.allows(CostAxis::Damage));
        assert_eq!(axes.axes().count(), 0);

        axes.allow(CostAxis::Cooldown);
        assert!(axes.allows(CostAxis::Cooldown));
        assert!(!axes.allows(CostAxis::Damage));

        axes.allow(CostAxis::Damage);
        assert_eq!(
            axes.axes().collect::<Vec<_>>(),
            vec![CostAxis::Damage, CostAxis::Cooldown]
        );
    }
}
