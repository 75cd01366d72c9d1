//! CLI-specific configuration for terminal UI.
use std::env;

use client_frontend_core::config::parse;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 6)
    /// - `CLI_FRAME_INTERVAL_MS` - Input poll interval in milliseconds (default: 16)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(height) = parse::<u16>(&lookup, "CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }
        if let Some(interval) = parse::<u64>(&lookup, "CLI_FRAME_INTERVAL_MS") {
            config.ui.frame_interval_ms = interval.max(1);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    /// How often input is polled.
    pub frame_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 6,
            frame_interval_ms: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_clamps() {
        let config = CliConfig::from_lookup(|key| match key {
            "CLI_MESSAGE_PANEL_HEIGHT" => Some("1".into()),
            "CLI_FRAME_INTERVAL_MS" => Some("40".into()),
            _ => None,
        });
        assert_eq!(config.ui.message_panel_height, 3);
        assert_eq!(config.ui.frame_interval_ms, 40);
    }

    #[test]
    fn defaults() {
        let config = CliConfig::from_lookup(|_| None);
        assert_eq!(config.ui.message_panel_height, 6);
        assert_eq!(config.ui.frame_interval_ms, 16);
    }
}
