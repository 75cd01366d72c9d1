//! Cross-frontend primitives for presenting the move builder.
//!
//! Houses configuration, message logging, command dispatch and view-model
//! types that both the terminal client and future graphical clients can
//! reuse. Nothing here draws anything.
pub mod command;
pub mod config;
pub mod event;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use command::{BuilderCommand, Step, apply};
pub use config::{FrontendConfig, MessageConfig};
pub use event::{BuilderEvent, EventConsumer, EventImpact};
pub use frontend::FrontendApp;
pub use view_model::{DraftPanel, MoveRow, TagPickerView, ViewModel};
