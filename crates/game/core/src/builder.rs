//! Draft/finalize controller.
//!
//! [`MoveBuilder`] owns the draft being composed and the list of finished
//! moves. Every edit goes through it so the rules it enforces always hold:
//!
//! - changing the attack or move type rebuilds the tag list from scratch
//!   (a Ranged Standard draft starts with one Ranged tag, anything else with
//!   none);
//! - tags only enter the draft through the tag picker, which accepts only
//!   what the eligibility engine offers at that moment;
//! - finishing or discarding a draft returns it to the start state.
//!
//! # Phases
//!
//! ```text
//!            open_tag_picker
//!   Editing ────────────────▶ PendingTag { tag_type?, axis? }
//!      ▲                         │
//!      └──── save_tag / cancel ──┘
//! ```

use crate::eligibility::{Eligibility, available_cost_axes, available_tag_types};
use crate::error::DraftError;
use crate::scoring::MoveStats;
use crate::state::{AttackType, CostAxes, CostAxis, Draft, Level, Move, MoveType, Tag, TagType};

/// Selections made so far in an open tag picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingTag {
    pub tag_type: Option<TagType>,
    pub axis: Option<CostAxis>,
}

/// Whether the tag picker is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuilderPhase {
    #[default]
    Editing,
    PendingTag(PendingTag),
}

impl BuilderPhase {
    pub fn pending(&self) -> Option<&PendingTag> {
        match self {
            Self::Editing => None,
            Self::PendingTag(pending) => Some(pending),
        }
    }
}

/// Holds the in-progress draft and the finished move list.
#[derive(Clone, Debug, Default)]
pub struct MoveBuilder {
    draft: Draft,
    moves: Vec<Move>,
    phase: BuilderPhase,
}

impl MoveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an existing move list, e.g. [`Move::examples`].
    pub fn with_moves(moves: Vec<Move>) -> Self {
        Self {
            moves,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn phase(&self) -> BuilderPhase {
        self.phase
    }

    /// Live statistics of the draft.
    pub fn draft_stats(&self) -> MoveStats {
        self.draft.stats()
    }

    pub fn eligibility(&self) -> Eligibility {
        Eligibility::evaluate(self.draft.move_type, self.draft.level, &self.draft.tags)
    }

    /// Cost axes open for a tag of `tag_type` on the current draft.
    pub fn cost_axes(&self, tag_type: TagType) -> CostAxes {
        available_cost_axes(
            self.draft.move_type,
            self.draft.level,
            &self.draft.tags,
            tag_type,
        )
    }

    // ===== field edits =====

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Changes the level. Existing tags are kept as they are.
    pub fn set_level(&mut self, level: Level) {
        self.draft.level = level;
    }

    /// Changes the attack type and rebuilds the tag list.
    pub fn set_attack_type(&mut self, attack_type: AttackType) {
        self.draft.attack_type = attack_type;
        self.reseed_tags();
    }

    /// Changes the move type and rebuilds the tag list.
    pub fn set_move_type(&mut self, move_type: MoveType) {
        self.draft.move_type = move_type;
        self.reseed_tags();
    }

    pub fn clear_tags(&mut self) {
        self.draft.tags.clear();
    }

    // TODO: ask for confirmation in the frontends before a type change drops manually added tags.
    fn reseed_tags(&mut self) {
        self.draft.tags = Draft::seed_tags(self.draft.attack_type, self.draft.move_type);
    }

    // ===== tag picker =====

    pub fn open_tag_picker(&mut self) -> Result<(), DraftError> {
        if !self.eligibility().can_add_tag() {
            return Err(DraftError::NoTagTypesAvailable);
        }
        self.phase = BuilderPhase::PendingTag(PendingTag::default());
        Ok(())
    }

    /// Chooses the tag type of the pending tag, discarding any chosen axis.
    pub fn select_tag_type(&mut self, tag_type: TagType) -> Result<(), DraftError> {
        let draft = &self.draft;
        let BuilderPhase::PendingTag(pending) = &mut self.phase else {
            return Err(DraftError::NoPendingTag);
        };

        if !available_tag_types(draft.move_type, draft.level, &draft.tags).contains(&tag_type) {
            return Err(DraftError::TagTypeUnavailable(tag_type));
        }

        *pending = PendingTag {
            tag_type: Some(tag_type),
            axis: None,
        };
        Ok(())
    }

    /// Chooses which budget pays for the pending tag.
    pub fn select_cost_axis(&mut self, axis: CostAxis) -> Result<(), DraftError> {
        let pending = self.phase.pending().ok_or(DraftError::NoPendingTag)?;
        let tag_type = pending.tag_type.ok_or(DraftError::NoTagTypeSelected)?;

        if !self.cost_axes(tag_type).allows(axis) {
            return Err(DraftError::CostAxisUnavailable { tag_type, axis });
        }

        self.phase = BuilderPhase::PendingTag(PendingTag {
            tag_type: Some(tag_type),
            axis: Some(axis),
        });
        Ok(())
    }

    /// Prices the pending tag, appends it and closes the picker.
    ///
    /// The choices are checked again against the draft as it is now, since
    /// field edits may have happened after they were made. On error the
    /// picker stays open so a valid choice can be made.
    pub fn save_tag(&mut self) -> Result<Tag, DraftError> {
        let pending = *self.phase.pending().ok_or(DraftError::NoPendingTag)?;
        let tag_type = pending.tag_type.ok_or(DraftError::NoTagTypeSelected)?;

        if !self.eligibility().offers(tag_type) {
            return Err(DraftError::TagTypeUnavailable(tag_type));
        }
        if let Some(axis) = pending.axis
            && self.draft.move_type.is_standard()
            && !self.cost_axes(tag_type).allows(axis)
        {
            return Err(DraftError::CostAxisUnavailable { tag_type, axis });
        }

        let tag = Tag::for_move(self.draft.move_type, tag_type, pending.axis)?;
        self.draft.tags.push(tag);
        self.phase = BuilderPhase::Editing;
        Ok(tag)
    }

    pub fn cancel_tag_picker(&mut self) {
        self.phase = BuilderPhase::Editing;
    }

    // ===== finalize / discard =====

    /// Appends a frozen copy of the draft to the move list and starts a new
    /// draft.
    pub fn add_move(&mut self) -> &Move {
        let finished = self.draft.finalize();
        self.clear_draft();
        self.moves.push(finished);
        &self.moves[self.moves.len() - 1]
    }

    /// Throws the draft away and starts a new one.
    pub fn clear_draft(&mut self) {
        self.draft = Draft::new();
        self.phase = BuilderPhase::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(value: u8) -> Level {
        Level::new(value).unwrap()
    }

    #[test]
    fn ranged_standard_seeds_one_ranged_tag() {
        let mut builder = MoveBuilder::new();
        builder.set_attack_type(AttackType::Ranged);
        assert_eq!(builder.draft().tags, vec![Tag::ranged_seed()]);
    }

    #[test]
    fn type_change_resets_tags_destructively() {
        let mut builder = MoveBuilder::new();
        builder.set_attack_type(AttackType::Ranged);
        builder.open_tag_picker().unwrap();
        builder.select_tag_type(TagType::Damage).unwrap();
        builder.save_tag().unwrap();
        assert_eq!(builder.draft().tags.len(), 2);

        // Still Ranged + Standard, but the manual Damage tag is gone.
        builder.set_attack_type(AttackType::Ranged);
        assert_eq!(builder.draft().tags, vec![Tag::ranged_seed()]);

        builder.set_move_type(MoveType::Combo);
        assert!(builder.draft().tags.is_empty());

        builder.set_move_type(MoveType::Standard);
        assert_eq!(builder.draft().tags, vec![Tag::ranged_seed()]);

        builder.set_attack_type(AttackType::Melee);
        assert!(builder.draft().tags.is_empty());
    }

    #[test]
    fn level_change_keeps_tags() {
        let mut builder = MoveBuilder::new();
        builder.set_attack_type(AttackType::Ranged);
        builder.set_level(level(3));
        assert_eq!(builder.draft().tags, vec![Tag::ranged_seed()]);
    }

    #[test]
    fn clear_tags_does_not_reseed() {
        let mut builder = MoveBuilder::new();
        builder.set_attack_type(AttackType::Ranged);
        builder.clear_tags();
        assert!(builder.draft().tags.is_empty());
    }

    #[test]
    fn axis_tag_walkthrough() {
        let mut builder = MoveBuilder::new();
        builder.open_tag_picker().unwrap();
        assert_eq!(
            builder.phase(),
            BuilderPhase::PendingTag(PendingTag::default())
        );

        builder.select_tag_type(TagType::Aoe).unwrap();
        assert_eq!(
            builder.save_tag(),
            Err(DraftError::CostAxisRequired(TagType::Aoe))
        );
        assert!(builder.phase().pending().is_some());

        builder.select_cost_axis(CostAxis::Cooldown).unwrap();
        let tag = builder.save_tag().unwrap();
        assert_eq!(tag.tag_type, TagType::Aoe);
        assert_eq!((tag.damage_cost, tag.cooldown_cost), (0, 2));
        assert_eq!(builder.phase(), BuilderPhase::Editing);
        assert_eq!(builder.draft_stats().cooldown, 2);
    }

    #[test]
    fn reselecting_type_discards_axis() {
        let mut builder = MoveBuilder::new();
        builder.open_tag_picker().unwrap();
        builder.select_tag_type(TagType::Ranged).unwrap();
        builder.select_cost_axis(CostAxis::Damage).unwrap();
        builder.select_tag_type(TagType::Immobilize).unwrap();
        assert_eq!(
            builder.phase().pending().copied(),
            Some(PendingTag {
                tag_type: Some(TagType::Immobilize),
                axis: None
            })
        );
    }

    #[test]
    fn picker_guards() {
        let mut builder = MoveBuilder::new();
        assert_eq!(
            builder.select_tag_type(TagType::Damage),
            Err(DraftError::NoPendingTag)
        );
        assert_eq!(builder.save_tag(), Err(DraftError::NoPendingTag));

        builder.open_tag_picker().unwrap();
        assert_eq!(builder.save_tag(), Err(DraftError::NoTagTypeSelected));
        assert_eq!(
            builder.select_cost_axis(CostAxis::Damage),
            Err(DraftError::NoTagTypeSelected)
        );
        assert_eq!(
            builder.select_tag_type(TagType::CooldownReduction),
            Err(DraftError::TagTypeUnavailable(TagType::CooldownReduction))
        );

        builder.select_tag_type(TagType::Damage).unwrap();
        assert_eq!(
            builder.select_cost_axis(CostAxis::Cooldown),
            Err(DraftError::CostAxisUnavailable {
                tag_type: TagType::Damage,
                axis: CostAxis::Cooldown
            })
        );
    }

    #[test]
    fn picker_refuses_to_open_without_options() {
        let mut builder = MoveBuilder::new();
        builder.set_move_type(MoveType::Finishing);
        assert_eq!(
            builder.open_tag_picker(),
            Err(DraftError::NoTagTypesAvailable)
        );
        assert_eq!(builder.phase(), BuilderPhase::Editing);
    }

    #[test]
    fn cancel_leaves_tags_alone() {
        let mut builder = MoveBuilder::new();
        builder.open_tag_picker().unwrap();
        builder.select_tag_type(TagType::Damage).unwrap();
        builder.cancel_tag_picker();
        assert_eq!(builder.phase(), BuilderPhase::Editing);
        assert!(builder.draft().tags.is_empty());
    }

    #[test]
    fn special_move_tags_are_axis_less() {
        let mut builder = MoveBuilder::new();
        builder.set_move_type(MoveType::Combo);
        builder.open_tag_picker().unwrap();
        builder.select_tag_type(TagType::Immobilize).unwrap();
        assert!(builder.cost_axes(TagType::Immobilize).is_empty());

        let tag = builder.save_tag().unwrap();
        assert_eq!((tag.damage_cost, tag.cooldown_cost), (0, 0));
        assert_eq!(builder.draft_stats().damage, 1);
    }

    #[test]
    fn add_move_freezes_and_resets() {
        let mut builder = MoveBuilder::new();
        builder.set_name("Rider Punch");
        builder.set_level(level(2));
        builder.set_attack_type(AttackType::Ranged);

        let added = builder.add_move().clone();
        assert_eq!(added.name, "Rider Punch");
        assert_eq!(added.stats().damage, 4);

        assert_eq!(builder.moves(), &[added]);
        assert_eq!(builder.draft(), &Draft::new());
    }

    #[test]
    fn clear_draft_discards_and_closes_picker() {
        let mut builder = MoveBuilder::with_moves(Move::examples());
        builder.set_name("Scrapped");
        builder.open_tag_picker().unwrap();
        builder.clear_draft();

        assert_eq!(builder.draft(), &Draft::new());
        assert_eq!(builder.phase(), BuilderPhase::Editing);
        assert_eq!(builder.moves().len(), 2);
    }

    #[test]
    fn save_rechecks_type_after_attack_change() {
        let mut builder = MoveBuilder::new();
        builder.open_tag_picker().unwrap();
        builder.select_tag_type(TagType::Ranged).unwrap();
        builder.select_cost_axis(CostAxis::Damage).unwrap();

        // the reseed adds a Ranged tag of its own
        builder.set_attack_type(AttackType::Ranged);
        assert_eq!(
            builder.save_tag(),
            Err(DraftError::TagTypeUnavailable(TagType::Ranged))
        );
        assert_eq!(builder.draft().tags, vec![Tag::ranged_seed()]);
        assert!(builder.phase().pending().is_some());
    }

    #[test]
    fn save_rechecks_type_after_move_type_change() {
        let mut builder = MoveBuilder::new();
        builder.open_tag_picker().unwrap();
        builder.select_tag_type(TagType::Damage).unwrap();

        builder.set_level(level(3));
        builder.set_move_type(MoveType::Combo);
        assert_eq!(
            builder.save_tag(),
            Err(DraftError::TagTypeUnavailable(TagType::Damage))
        );
        assert!(builder.draft().tags.is_empty());

        // a type Combo moves do take still saves
        builder.select_tag_type(TagType::Aoe).unwrap();
        let tag = builder.save_tag().unwrap();
        assert_eq!(tag.cost(), crate::state::TagCost::FREE);
    }

    #[test]
    fn save_rechecks_axis_after_level_change() {
        let mut builder = MoveBuilder::new();
        builder.set_level(level(2));
        builder.open_tag_picker().unwrap();
        builder.select_tag_type(TagType::Ranged).unwrap();
        builder.select_cost_axis(CostAxis::Damage).unwrap();
        builder.save_tag().unwrap();

        // damage 4 pays for Immobilize; at level 1 it drops to 2
        builder.open_tag_picker().unwrap();
        builder.select_tag_type(TagType::Immobilize).unwrap();
        builder.select_cost_axis(CostAxis::Damage).unwrap();
        builder.set_level(level(1));
        assert_eq!(builder.draft_stats().damage, 2);
        assert_eq!(
            builder.save_tag(),
            Err(DraftError::CostAxisUnavailable {
                tag_type: TagType::Immobilize,
                axis: CostAxis::Damage,
            })
        );

        builder.select_cost_axis(CostAxis::Cooldown).unwrap();
        assert_eq!(builder.save_tag().unwrap().cooldown_cost, 3);
    }

    #[test]
    fn empty_name_is_accepted() {
        let mut builder = MoveBuilder::new();
        builder.add_move();
        assert_eq!(builder.moves().len(), 1);
        assert!(builder.moves()[0].name.is_empty());
    }
}
