//! Data model of the move builder: choices, tags, drafts and moves.

pub mod kinds;
pub mod level;
pub mod moves;
pub mod tag;

pub use kinds::{AttackType, CostAxes, CostAxis, MoveType, TagType};
pub use level::Level;
pub use moves::{Draft, Move};
pub use tag::{Tag, TagCost};
