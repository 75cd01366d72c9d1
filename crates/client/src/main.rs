//! Move builder client binary.
//!
//! This binary is the composition root: it loads configuration from the
//! environment (and an optional `.env`), installs file logging, builds the
//! selected frontend and runs it.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! MOVE_BUILDER_PRELOAD_EXAMPLES=1 cargo run -p move-builder-client
//! ```

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{
        CliApp, CliConfig, FrontendConfig,
        logging::{self, LogConfig},
    };
    use move_builder_client::Client;

    // 1. Load configuration from environment
    let log_config = LogConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the file writer on drop
    let _log_guard = logging::setup_logging(&log_config)?;

    tracing::info!("Starting move builder");
    tracing::info!("Preload examples: {}", frontend_config.preload_examples);
    tracing::info!("Message capacity: {}", frontend_config.messages.capacity);

    // 3. Build Frontend
    let frontend = CliApp::builder(frontend_config, cli_config).build();

    // 4. Build and run
    let client = Client::builder().frontend(frontend).build()?;
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
