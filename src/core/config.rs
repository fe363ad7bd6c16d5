//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, asset paths and reload port come from
//! `[package.metadata.leptos]` instead.

/// Default tracing level when neither `RUST_LOG` nor `IDEA0_LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive, e.g. `info` or `idea0=debug,tower_http=warn`
    pub log_level: String,

    /// Whether responses are Brotli/gzip compressed
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = lookup("IDEA0_LOG_LEVEL")
            .map(|level| level.trim().to_string())
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let compression = lookup("IDEA0_COMPRESSION")
            .map(|value| parse_flag(&value))
            .unwrap_or(true);

        Self {
            log_level,
            compression,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            compression: true,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "info");
        assert!(config.compression);
    }

    #[test]
    fn test_log_level_override() {
        let config = Config::from_lookup(lookup_from(&[("IDEA0_LOG_LEVEL", " debug ")]));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_blank_log_level_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("IDEA0_LOG_LEVEL", "  ")]));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_compression_flag() {
        for off in ["0", "false", "OFF", "no"] {
            let config = Config::from_lookup(lookup_from(&[("IDEA0_COMPRESSION", off)]));
            assert!(!config.compression, "{off} should disable compression");
        }
        for on in ["1", "true", "yes", "anything"] {
            let config = Config::from_lookup(lookup_from(&[("IDEA0_COMPRESSION", on)]));
            assert!(config.compression, "{on} should keep compression");
        }
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Values depend on the environment, so only check it loads
        let config = Config::from_env();
        assert!(!config.log_level.is_empty());
    }
}
