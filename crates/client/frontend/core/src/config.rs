//! Frontend configuration structures and loaders.
//!
//! This module contains UI-related settings that are shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    /// Start the session with the bundled sample moves in the move list.
    pub preload_examples: bool,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, preload_examples: bool) -> Self {
        Self {
            messages,
            preload_examples,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `MOVE_BUILDER_PRELOAD_EXAMPLES` - Preload sample moves (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    ///
    /// [`from_env`](Self::from_env) is this with the process environment;
    /// tests pass a map instead.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(capacity) = parse::<usize>(&lookup, "CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(preload) = lookup("MOVE_BUILDER_PRELOAD_EXAMPLES").and_then(|v| parse_bool(&v))
        {
            config.preload_examples = preload;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Parses the value under `key`, ignoring it if missing or malformed.
pub fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

/// Parses the usual spellings of a boolean flag.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = FrontendConfig::from_lookup(lookup(&[]));
        assert_eq!(config.messages.capacity, 64);
        assert!(!config.preload_examples);
    }

    #[test]
    fn reads_overrides() {
        let config = FrontendConfig::from_lookup(lookup(&[
            ("CLI_MESSAGE_CAPACITY", "12"),
            ("MOVE_BUILDER_PRELOAD_EXAMPLES", "Yes"),
        ]));
        assert_eq!(config.messages.capacity, 12);
        assert!(config.preload_examples);
    }

    #[test]
    fn clamps_and_ignores_garbage() {
        let config = FrontendConfig::from_lookup(lookup(&[
            ("CLI_MESSAGE_CAPACITY", "0"),
            ("MOVE_BUILDER_PRELOAD_EXAMPLES", "maybe"),
        ]));
        assert_eq!(config.messages.capacity, 1);
        assert!(!config.preload_examples);

        let config = FrontendConfig::from_lookup(lookup(&[("CLI_MESSAGE_CAPACITY", "lots")]));
        assert_eq!(config.messages.capacity, 64);
    }

    #[test]
    fn bool_spellings() {
        assert_eq!(parse_bool("on"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("nope"), None);
    }
}
