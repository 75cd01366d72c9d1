//! View-model snapshots derived from a [`MoveBuilder`].
//!
//! Everything a frontend displays is computed here once per frame, so
//! widgets never call into the rules themselves.
use move_core::{
    AttackType, BuilderPhase, CostAxis, Move, MoveBuilder, MoveStats, MoveType, TagType,
};

/// Column headers of the move table, in display order.
pub const MOVE_TABLE_HEADERS: [&str; 8] = [
    "Name",
    "Level",
    "Attack Type",
    "Move Type",
    "Damage",
    "Cooldown",
    "Tags",
    "XP Cost",
];

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub moves: Vec<MoveRow>,
    pub draft: DraftPanel,
    /// Present while the tag picker is open.
    pub tag_picker: Option<TagPickerView>,
}

impl ViewModel {
    pub fn from_builder(builder: &MoveBuilder) -> Self {
        Self {
            moves: builder.moves().iter().map(MoveRow::from_move).collect(),
            draft: DraftPanel::from_builder(builder),
            tag_picker: TagPickerView::from_builder(builder),
        }
    }
}

/// One finished move as shown in the move table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRow {
    pub name: String,
    pub level: u8,
    pub attack_type: AttackType,
    pub move_type: MoveType,
    pub stats: MoveStats,
    pub tags: String,
}

impl MoveRow {
    pub fn from_move(finished: &Move) -> Self {
        Self {
            name: finished.name.clone(),
            level: finished.level.get(),
            attack_type: finished.attack_type,
            move_type: finished.move_type,
            stats: finished.stats(),
            tags: finished.tag_summary(),
        }
    }

    /// Cell texts in [`MOVE_TABLE_HEADERS`] order.
    pub fn cells(&self) -> [String; 8] {
        [
            self.name.clone(),
            self.level.to_string(),
            self.attack_type.to_string(),
            self.move_type.to_string(),
            self.stats.damage.to_string(),
            self.stats.cooldown.to_string(),
            self.tags.clone(),
            self.stats.xp.to_string(),
        ]
    }
}

/// The "add new move" form with live statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftPanel {
    pub name: String,
    pub level: u8,
    pub attack_type: AttackType,
    pub move_type: MoveType,
    pub tags: String,
    pub stats: MoveStats,
    pub can_add_tag: bool,
    pub can_clear_tags: bool,
}

impl DraftPanel {
    pub fn from_builder(builder: &MoveBuilder) -> Self {
        let draft = builder.draft();
        let eligibility = builder.eligibility();

        Self {
            name: draft.name.clone(),
            level: draft.level.get(),
            attack_type: draft.attack_type,
            move_type: draft.move_type,
            tags: draft.tag_summary(),
            stats: draft.stats(),
            can_add_tag: eligibility.can_add_tag(),
            can_clear_tags: eligibility.can_clear_tags,
        }
    }
}

/// Choices offered by the open tag picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagPickerView {
    pub tag_types: Vec<TagType>,
    pub selected_type: Option<TagType>,
    /// Cost axes for the selected type; empty when the type has a fixed cost
    /// or the move is not Standard.
    pub axes: Vec<CostAxis>,
    pub selected_axis: Option<CostAxis>,
}

impl TagPickerView {
    pub fn from_builder(builder: &MoveBuilder) -> Option<Self> {
        let BuilderPhase::PendingTag(pending) = builder.phase() else {
            return None;
        };

        let axes = pending
            .tag_type
            .map(|tag_type| builder.cost_axes(tag_type).axes().collect())
            .unwrap_or_default();

        Some(Self {
            tag_types: builder.eligibility().tag_types.to_vec(),
            selected_type: pending.tag_type,
            axes,
            selected_axis: pending.axis,
        })
    }

    /// Whether the selected type still needs an axis before it can be saved.
    pub fn needs_axis(&self) -> bool {
        !self.axes.is_empty() && self.selected_axis.is_none()
    }
}
