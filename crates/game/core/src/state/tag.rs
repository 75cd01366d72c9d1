//! Tags and the cost table they are priced from.

use crate::error::DraftError;
use crate::state::{CostAxis, MoveType, TagType};

/// Damage and cooldown shift a tag applies to a Standard move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagCost {
    pub damage: i32,
    pub cooldown: i32,
}

impl TagCost {
    /// Cost of tags on Finishing and Combo moves, which are priced by count.
    pub const FREE: TagCost = TagCost::new(0, 0);

    pub const fn new(damage: i32, cooldown: i32) -> Self {
        Self { damage, cooldown }
    }
}

impl TagType {
    /// Cost of a tag type that has no axis choice, or `None` if the player
    /// must pick one.
    pub const fn fixed_cost(self) -> Option<TagCost> {
        match self {
            Self::Damage => Some(TagCost::new(2, 2)),
            Self::CooldownReduction => Some(TagCost::new(-1, -1)),
            Self::Ranged | Self::Aoe | Self::Immobilize => None,
        }
    }

    /// Cost of paying for this tag on the given axis.
    ///
    /// Fixed-cost tag types ignore the axis.
    pub const fn axis_cost(self, axis: CostAxis) -> TagCost {
        if let Some(cost) = self.fixed_cost() {
            return cost;
        }

        let amount = match self {
            Self::Ranged => 1,
            Self::Aoe => 2,
            Self::Immobilize => 3,
            Self::Damage | Self::CooldownReduction => 0,
        };

        match axis {
            CostAxis::Damage => TagCost::new(-amount, 0),
            CostAxis::Cooldown => TagCost::new(0, amount),
        }
    }
}

/// A modifier attached to a move, with its cost fixed at creation.
///
/// The cost is a snapshot: two Ranged tags may carry different costs
/// depending on which axis paid for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    pub tag_type: TagType,
    pub damage_cost: i32,
    pub cooldown_cost: i32,
}

impl Tag {
    pub const fn new(tag_type: TagType, cost: TagCost) -> Self {
        Self {
            tag_type,
            damage_cost: cost.damage,
            cooldown_cost: cost.cooldown,
        }
    }

    /// The Ranged tag every Ranged Standard draft starts with.
    pub const fn ranged_seed() -> Self {
        Self::new(TagType::Ranged, TagCost::new(-1, 0))
    }

    /// Prices a tag for a move of the given type.
    ///
    /// Finishing and Combo tags are free (their cost is the tag count) and
    /// ignore `axis`. Standard Ranged, AOE and Immobilize tags need an axis.
    pub fn for_move(
        move_type: MoveType,
        tag_type: TagType,
        axis: Option<CostAxis>,
    ) -> Result<Self, DraftError> {
        if !move_type.is_standard() {
            return Ok(Self::new(tag_type, TagCost::FREE));
        }

        let cost = match (tag_type.fixed_cost(), axis) {
            (Some(cost), _) => cost,
            (None, Some(axis)) => tag_type.axis_cost(axis),
            (None, None) => return Err(DraftError::CostAxisRequired(tag_type)),
        };

        Ok(Self::new(tag_type, cost))
    }

    pub const fn cost(&self) -> TagCost {
        TagCost::new(self.damage_cost, self.cooldown_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_costs() {
        assert_eq!(TagType::Damage.fixed_cost(), Some(TagCost::new(2, 2)));
        assert_eq!(
            TagType::CooldownReduction.fixed_cost(),
            Some(TagCost::new(-1, -1))
        );
        assert_eq!(TagType::Aoe.fixed_cost(), None);
    }

    #[test]
    fn axis_costs() {
        assert_eq!(
            TagType::Ranged.axis_cost(CostAxis::Damage),
            TagCost::new(-1, 0)
        );
        assert_eq!(
            TagType::Ranged.axis_cost(CostAxis::Cooldown),
            TagCost::new(0, 1)
        );
        assert_eq!(TagType::Aoe.axis_cost(CostAxis::Damage), TagCost::new(-2, 0));
        assert_eq!(
            TagType::Immobilize.axis_cost(CostAxis::Cooldown),
            TagCost::new(0, 3)
        );
        assert_eq!(
            TagType::Damage.axis_cost(CostAxis::Cooldown),
            TagCost::new(2, 2)
        );
    }

    #[test]
    fn seed_matches_damage_paid_ranged_tag() {
        let paid = Tag::for_move(MoveType::Standard, TagType::Ranged, Some(CostAxis::Damage));
        assert_eq!(paid, Ok(Tag::ranged_seed()));
    }

    #[test]
    fn standard_axis_tag_without_axis_is_rejected() {
        assert_eq!(
            Tag::for_move(MoveType::Standard, TagType::Immobilize, None),
            Err(DraftError::CostAxisRequired(TagType::Immobilize))
        );
    }

    #[test]
    fn special_move_tags_are_free() {
        let tag = Tag::for_move(MoveType::Combo, TagType::Aoe, Some(CostAxis::Damage)).unwrap();
        assert_eq!(tag.cost(), TagCost::FREE);

        let tag = Tag::for_move(MoveType::Finishing, TagType::Immobilize, None).unwrap();
        assert_eq!(tag.tag_type, TagType::Immobilize);
        assert_eq!(tag.cost(), TagCost::FREE);
    }
}
