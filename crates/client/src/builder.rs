//! Client builder with dependency injection pattern.

use anyhow::{Context, Result};
use client_frontend_core::FrontendApp;

use crate::Client;

/// Builder for constructing a Client with proper validation.
///
/// The frontend is required; `build()` fails fast without one.
pub struct ClientBuilder<F> {
    frontend: Option<F>,
}

impl<F> Default for ClientBuilder<F> {
    fn default() -> Self {
        Self { frontend: None }
    }
}

impl<F> ClientBuilder<F>
where
    F: FrontendApp,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frontend (required).
    ///
    /// The frontend owns the move builder session and all user interaction.
    pub fn frontend(mut self, frontend: F) -> Self {
        self.frontend = Some(frontend);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend is not set.
    pub fn build(self) -> Result<Client<F>> {
        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { frontend })
    }
}
