//! File logging for the terminal client.
//!
//! The TUI owns stdout, so logs only go to
//! `<cache dir>/logs/<session>/client.log`.
use std::{
    env,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Result;
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "client.log";

/// Where and under which session name logs are written.
#[derive(Clone, Debug, Default)]
pub struct LogConfig {
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    /// Environment variables:
    /// - `MOVE_BUILDER_SESSION_ID` - Session directory name (default: `session_<unix secs>`)
    /// - `MOVE_BUILDER_LOG_DIR` - Log root (default: platform cache dir)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            session_id: non_empty("MOVE_BUILDER_SESSION_ID"),
            log_dir: non_empty("MOVE_BUILDER_LOG_DIR").map(PathBuf::from),
        }
    }

    pub fn session_id(&self) -> String {
        self.session_id.clone().unwrap_or_else(|| {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{timestamp}")
        })
    }
}

/// Platform log root, e.g. `~/.cache/move-builder/logs` on Linux.
pub fn resolve_log_dir(config: &LogConfig) -> PathBuf {
    if let Some(dir) = &config.log_dir {
        return dir.clone();
    }

    ProjectDirs::from("", "", "move-builder")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| env::temp_dir().join("move-builder").join("logs"))
}

/// Creates `<root>/<session>` and returns it.
pub fn prepare_session_dir(root: &Path, session_id: &str) -> Result<PathBuf> {
    let session_dir = root.join(session_id);
    std::fs::create_dir_all(&session_dir)?;
    Ok(session_dir)
}

/// Installs the global subscriber.
///
/// Keep the returned guard alive until exit; dropping it flushes and stops
/// the background writer.
pub fn setup_logging(config: &LogConfig) -> Result<WorkerGuard> {
    let session_id = config.session_id();
    let session_dir = prepare_session_dir(&resolve_log_dir(config), &session_id)?;

    let file_appender = tracing_appender::rolling::never(&session_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", session_dir.join(LOG_FILE).display());

    Ok(guard)
}
