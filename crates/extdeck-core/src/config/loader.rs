//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User config (~/.extdeck/config.yaml, or an explicit path)
//! 3. Environment variables (EXTDECK_* prefix)
//! 4. CLI flags (handled by caller)
//!
//! Nothing is ever written back; configuration is read-only.

use crate::config::DeckConfig;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_yaml_ng::Value;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "defaults.yaml";
const USER_CONFIG_FILE: &str = "config.yaml";
const CONFIG_DIR_NAME: &str = ".extdeck";

/// Configuration hierarchy loader
pub struct ConfigLoader {
    /// Directory holding the user config file
    config_dir: Utf8PathBuf,
}

impl ConfigLoader {
    /// Create a loader rooted at ~/.extdeck
    ///
    /// A non-empty `HOME` wins over the platform lookup so sandboxed runs
    /// (containers, tests) keep their config apart from the real user's.
    pub fn new() -> Result<Self> {
        let home = env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .ok_or_else(|| Error::invalid_config("Could not determine home directory"))?;
        let home = Utf8PathBuf::from_path_buf(home)
            .map_err(|p| Error::invalid_config(format!("Home directory is not UTF-8: {:?}", p)))?;

        Ok(Self {
            config_dir: home.join(CONFIG_DIR_NAME),
        })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Load configuration with hierarchical precedence
    ///
    /// An explicit path must exist; the default user config is optional.
    pub fn load(&self, explicit: Option<&Utf8Path>) -> Result<DeckConfig> {
        let mut merged = Self::load_embedded_defaults()?;

        let user_path = match explicit {
            Some(path) if !path.exists() => return Err(Error::config_not_found(path.as_str())),
            Some(path) => Some(path.to_path_buf()),
            None => {
                let path = self.config_dir.join(USER_CONFIG_FILE);
                path.exists().then_some(path)
            }
        };

        if let Some(path) = user_path {
            debug!("Loading config overlay from {}", path);
            let overlay = Self::load_yaml_file(&path)?;
            merge_values(&mut merged, overlay);
        }

        let config: DeckConfig = serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Failed to parse configuration: {}", e)))?;

        Self::apply_env_overrides(config)
    }

    /// Load the embedded defaults as a YAML tree
    fn load_embedded_defaults() -> Result<Value> {
        let embedded_file = EmbeddedConfigs::get(DEFAULTS_FILE).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", DEFAULTS_FILE))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", DEFAULTS_FILE))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                DEFAULTS_FILE, e
            ))
        })
    }

    /// Load a YAML file as a tree
    fn load_yaml_file(path: &Utf8Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: DeckConfig) -> Result<DeckConfig> {
        if let Ok(val) = env::var("EXTDECK_SOURCE") {
            config.source = val;
        }

        if let Ok(val) = env::var("EXTDECK_HTTP_TIMEOUT_SECS") {
            config.network.http_timeout_secs = val.parse().map_err(|_| {
                Error::invalid_config("EXTDECK_HTTP_TIMEOUT_SECS must be a valid number")
            })?;
        }

        if let Ok(val) = env::var("EXTDECK_LOCALE") {
            config.locale = val.parse()?;
        }

        if let Ok(val) = env::var("EXTDECK_THEME") {
            config.theme = val.parse()?;
        }

        if let Ok(val) = env::var("EXTDECK_NO_COLOR") {
            config.display.color_enabled = !val.parse().unwrap_or(false);
        }

        Ok(config)
    }
}

/// Recursively overlay one YAML tree onto another
///
/// Mappings merge key by key; any other overlay value replaces the base.
/// A null overlay (empty file) changes nothing.
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
