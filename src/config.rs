//! Engine configuration.
//!
//! Loaded from a TOML file with environment variable overrides. A missing or
//! broken file falls back to defaults with a warning; configuration never
//! aborts the program.
//!
//! ```toml
//! search_depth = 5
//! routing = "free_on_decided"
//! start_position = "04000000000..."
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::BoardState;
use crate::error::EngineResult;
use crate::notation::{decode, INITIAL_POSITION};
use crate::rules::{RoutingRule, Rules};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "UTTT_CONFIG";

/// Standard locations to search for the config file
pub const CONFIG_SEARCH_PATHS: &[&str] = &["uttt.toml", "../uttt.toml"];

/// Default search depth
pub const DEFAULT_DEPTH: u8 = 4;

/// Analysis session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched by `evaluate` and `best` when no depth is given
    pub search_depth: u8,
    /// Active-subboard routing variant
    pub routing: RoutingRule,
    /// Base position, 83-digit text
    pub start_position: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_DEPTH,
            routing: RoutingRule::Strict,
            start_position: INITIAL_POSITION.to_string(),
        }
    }
}

impl EngineConfig {
    #[inline]
    pub fn rules(&self) -> Rules {
        Rules::new(self.routing)
    }

    /// Decode the configured base position
    pub fn start_state(&self) -> EngineResult<BoardState> {
        decode(&self.start_position)
    }
}

/// Load the configuration.
///
/// Searches in the following order:
/// 1. Path in the `UTTT_CONFIG` environment variable
/// 2. `uttt.toml` in the current directory
/// 3. `../uttt.toml`
///
/// Environment overrides are applied afterwards.
pub fn load_config() -> EngineConfig {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from {}: {}", CONFIG_ENV, path.display());
            return load_from_path(&path);
        }
        warn!(
            "{}={} not found, searching defaults",
            CONFIG_ENV,
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    debug!("No uttt.toml found, using built-in defaults");
    apply_env_overrides(EngineConfig::default())
}

/// Load configuration from a specific path.
pub fn load_from_path(path: &Path) -> EngineConfig {
    apply_env_overrides(read_config_file(path))
}

/// Read a config file without environment overrides.
///
/// A missing or unparseable file yields the defaults.
pub fn read_config_file(path: &Path) -> EngineConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                EngineConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            EngineConfig::default()
        }
    }
}

/// Apply `UTTT_*` environment variable overrides.
pub fn apply_env_overrides(config: EngineConfig) -> EngineConfig {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any key lookup.
///
/// Unparseable values are ignored with a warning.
pub fn apply_overrides<F>(mut config: EngineConfig, lookup: F) -> EngineConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("UTTT_DEPTH") {
        match v.trim().parse() {
            Ok(depth) => config.search_depth = depth,
            Err(_) => warn!("Ignoring UTTT_DEPTH={}: not a depth", v),
        }
    }
    if let Some(v) = lookup("UTTT_ROUTING") {
        match v.trim() {
            "strict" => config.routing = RoutingRule::Strict,
            "free_on_decided" => config.routing = RoutingRule::FreeOnDecided,
            other => warn!("Ignoring UTTT_ROUTING={}: unknown rule", other),
        }
    }
    if let Some(v) = lookup("UTTT_START_POSITION") {
        config.start_position = v.trim().to_string();
    }
    config
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
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.search_depth, 4);
        assert_eq!(config.routing, RoutingRule::Strict);
        assert_eq!(config.start_state().unwrap(), BoardState::new());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: EngineConfig = toml::from_str("search_depth = 6").unwrap();
        assert_eq!(config.search_depth, 6);
        assert_eq!(config.start_position, INITIAL_POSITION);
    }

    #[test]
    fn test_parse_routing() {
        let config: EngineConfig = toml::from_str("routing = \"free_on_decided\"").unwrap();
        assert_eq!(config.routing, RoutingRule::FreeOnDecided);
        assert_eq!(config.rules().routing, RoutingRule::FreeOnDecided);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig {
            search_depth: 2,
            ..EngineConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: EngineConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_overrides() {
        let config = apply_overrides(
            EngineConfig::default(),
            lookup(&[("UTTT_DEPTH", "7"), ("UTTT_ROUTING", "free_on_decided")]),
        );
        assert_eq!(config.search_depth, 7);
        assert_eq!(config.routing, RoutingRule::FreeOnDecided);
    }

    #[test]
    fn test_bad_overrides_ignored() {
        let config = apply_overrides(
            EngineConfig::default(),
            lookup(&[("UTTT_DEPTH", "deep"), ("UTTT_ROUTING", "sideways")]),
        );
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = apply_overrides(
            read_config_file(Path::new("/nonexistent/uttt.toml")),
            lookup(&[]),
        );
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_unparseable_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!("uttt-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "search_depth = \"deep\"").unwrap();
        let config = read_config_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_read_config_file_ignores_environment() {
        let path = std::env::temp_dir().join(format!("uttt-ok-{}.toml", std::process::id()));
        std::fs::write(&path, "search_depth = 3\nrouting = \"free_on_decided\"").unwrap();
        let config = apply_overrides(read_config_file(&path), lookup(&[]));
        let _ = std::fs::remove_file(&path);
        assert_eq!(config.search_depth, 3);
        assert_eq!(config.routing, RoutingRule::FreeOnDecided);
        assert_eq!(config.start_position, INITIAL_POSITION);
    }

    #[test]
    fn test_bad_start_position_reported_on_use() {
        let config = apply_overrides(
            EngineConfig::default(),
            lookup(&[("UTTT_START_POSITION", "04")]),
        );
        assert!(config.start_state().is_err());
    }
}
