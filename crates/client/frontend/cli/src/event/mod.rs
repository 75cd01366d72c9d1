//! Event handling for CLI client.
//!
//! This module contains the event loop orchestrator and event consumer
//! that coordinate user input, builder commands and UI updates.

mod consumer;
mod r#loop;

pub use consumer::CliEventConsumer;
pub use r#loop::EventLoop;
