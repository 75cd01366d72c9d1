//! Terminal UI frontend for the move builder.
//!
//! This crate provides a terminal-based form for composing moves. It
//! implements the `FrontendApp` trait from `client-frontend-core`.
//!
//! # Architecture
//!
//! CliApp owns a single `MoveBuilder` for the whole session and:
//! - Translates key presses into `BuilderCommand`s (see `input`)
//! - Applies them and reports outcomes to the message log (see `event`)
//! - Redraws from a fresh `ViewModel` after every change (see `presentation`)

mod app;
mod config;
mod event;
mod input;
pub mod logging;
mod presentation;
mod state;

pub use app::{CliApp, CliAppBuilder};
pub use config::CliConfig;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
