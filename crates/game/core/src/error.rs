//! Error types for move-core.
//!
//! Scoring, formatting and eligibility are total and never fail. The errors
//! here come from the two places that guard input: building a [`Level`] and
//! driving the [`MoveBuilder`] through an illegal step.
//!
//! [`Level`]: crate::Level
//! [`MoveBuilder`]: crate::MoveBuilder

use crate::state::{CostAxis, TagType};

/// Rejected level input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("level {value} is outside {min}..={max}")]
    OutOfRange { value: u8, min: u8, max: u8 },
}

/// Rejected draft or tag-picker step.
///
/// A frontend that only offers what the eligibility engine returns never
/// produces these. Every picker step, `save_tag` included, is checked
/// against the draft as it stands at that call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("no tag types are available for the current draft")]
    NoTagTypesAvailable,

    #[error("tag type {0} is not available for the current draft")]
    TagTypeUnavailable(TagType),

    #[error("cost axis {axis} is not available for {tag_type}")]
    CostAxisUnavailable { tag_type: TagType, axis: CostAxis },

    #[error("{0} on a Standard move needs a cost axis")]
    CostAxisRequired(TagType),

    #[error("the tag picker is not open")]
    NoPendingTag,

    #[error("no tag type has been selected")]
    NoTagTypeSelected,
}

impl DraftError {
    /// Returns a static identifier for this error variant.
    ///
    /// Useful for log fields and for asserting on a variant without its payload.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoTagTypesAvailable => "no_tag_types_available",
            Self::TagTypeUnavailable(_) => "tag_type_unavailable",
            Self::CostAxisUnavailable { .. } => "cost_axis_unavailable",
            Self::CostAxisRequired(_) => "cost_axis_required",
            Self::NoPendingTag => "no_pending_tag",
            Self::NoTagTypeSelected => "no_tag_type_selected",
        }
    }
}
