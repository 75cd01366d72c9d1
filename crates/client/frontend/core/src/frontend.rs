//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

/// Frontend abstraction for UI layers.
///
/// A frontend owns its [`move_core::MoveBuilder`] for the whole session,
/// renders it, and translates user input into
/// [`BuilderCommand`](crate::BuilderCommand)s. It returns when the user quits.
///
/// # Implementations
///
/// - `CliApp`: Terminal-based UI (ratatui + crossterm)
/// - Future: graphical or web frontends
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::{BuilderCommand, FrontendApp, apply};
/// use move_core::MoveBuilder;
/// use anyhow::Result;
///
/// struct Scripted(Vec<BuilderCommand>);
///
/// #[async_trait]
/// impl FrontendApp for Scripted {
///     async fn run(self) -> Result<()> {
///         let mut builder = MoveBuilder::new();
///         for command in self.0 {
///             let _ = apply(&mut builder, command);
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait FrontendApp: Send {
    /// Run the frontend until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error (for a
    /// terminal UI: the terminal cannot be set up, drawn to, or read from).
    async fn run(self) -> Result<()>
    where
        Self: Sized;
}
