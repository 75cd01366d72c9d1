//! Deterministic rules of the move builder.
//!
//! `move-core` defines the data model (attack/move/tag types, tags, drafts,
//! moves), the scoring formulas, the tag summary formatter and the
//! eligibility engine, and exposes them as pure APIs. All draft mutation
//! flows through [`MoveBuilder`]; frontends only render what it reports.
pub mod builder;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod format;
pub mod scoring;
pub mod state;

pub use builder::{BuilderPhase, MoveBuilder, PendingTag};
pub use config::RulesConfig;
pub use eligibility::{
    AxisBudget, Eligibility, TagTypeList, available_cost_axes, available_tag_types,
};
pub use error::{DraftError, LevelError};
pub use format::{TagCounts, format_tags};
pub use scoring::{MoveStats, calculate_cooldown, calculate_damage, calculate_xp};
pub use state::{
    AttackType, CostAxes, CostAxis, Draft, Level, Move, MoveType, Tag, TagCost, TagType,
};
