//! Top-level client hosting a move builder frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//!         └─→ MoveBuilder (rules, owned by the frontend)
//! ```
//!
//! The binary picks a frontend by feature flag, builds it from
//! environment configuration and hands it to [`Client`].

mod builder;

pub use builder::ClientBuilder;

// Re-export FrontendApp trait from client-frontend-core
pub use client_frontend_core::FrontendApp;

use anyhow::Result;

/// Top-level client container.
pub struct Client<F> {
    frontend: F,
}

impl<F> Client<F>
where
    F: FrontendApp,
{
    pub fn builder() -> ClientBuilder<F> {
        ClientBuilder::new()
    }

    /// Transfers control to the frontend until the user quits.
    pub async fn run(self) -> Result<()> {
        tracing::debug!("Handing control to frontend");
        let result = self.frontend.run().await;

        if let Err(error) = &result {
            tracing::error!("Frontend exited with error: {:#}", error);
        }
        result
    }
}
