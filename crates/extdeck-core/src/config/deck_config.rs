//! Runtime configuration for extdeck

use crate::messages::Locale;
use crate::types::ThemePreference;
use serde::{Deserialize, Serialize};

/// Resolved extdeck configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeckConfig {
    /// Data source location: an http(s) URL or a file path
    #[serde(default = "default_source")]
    pub source: String,

    /// Message catalog
    #[serde(default)]
    pub locale: Locale,

    /// Starting theme
    #[serde(default)]
    pub theme: ThemePreference,

    /// Network settings for HTTP data sources
    #[serde(default)]
    pub network: NetworkConfig,

    /// Display and output settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            locale: Locale::default(),
            theme: ThemePreference::default(),
            network: NetworkConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Network and HTTP configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    /// HTTP timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: default_http_timeout(),
        }
    }
}

/// Display and output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DisplayConfig {
    /// Enable colored output
    #[serde(default = "default_color_enabled")]
    pub color_enabled: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_enabled: default_color_enabled(),
        }
    }
}

fn default_source() -> String {
    "./data.json".to_string()
}
fn default_http_timeout() -> u64 {
    30
}
fn default_color_enabled() -> bool {
    true
}
