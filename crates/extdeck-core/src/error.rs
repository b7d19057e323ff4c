//! Error types for extdeck-core

use thiserror::Error;

/// Result type alias using extdeck-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration and general errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown filter value
    #[error("Unknown filter: {value}. Valid filters: all, active, inactive")]
    InvalidFilter { value: String },

    /// Unknown theme value
    #[error("Unknown theme: {value}. Valid themes: dark, light, auto")]
    InvalidTheme { value: String },

    /// Unknown locale
    #[error("Unknown locale: {value}. Valid locales: en, pt-BR")]
    InvalidLocale { value: String },
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid filter error
    pub fn invalid_filter(value: impl Into<String>) -> Self {
        Self::InvalidFilter {
            value: value.into(),
        }
    }

    /// Create an invalid theme error
    pub fn invalid_theme(value: impl Into<String>) -> Self {
        Self::InvalidTheme {
            value: value.into(),
        }
    }

    /// Create an invalid locale error
    pub fn invalid_locale(value: impl Into<String>) -> Self {
        Self::InvalidLocale {
            value: value.into(),
        }
    }
}

/// Failure to obtain the initial record sequence from a data source
///
/// The controller recovers from every variant locally: the list stays empty
/// and an error placeholder is rendered.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The data source could not be reached at all
    #[error("Data source {location} is unreachable: {message}")]
    Unreachable { location: String, message: String },

    /// The data source answered with a non-success status
    #[error("Data source {location} returned HTTP {status}")]
    Status { location: String, status: u16 },

    /// The payload is not a sequence of extension records
    #[error("Data source {location} returned an invalid payload: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// The list was already populated by an earlier load
    #[error("Extension list is already initialized")]
    AlreadyInitialized,
}

impl LoadError {
    /// Create an unreachable error
    pub fn unreachable(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unreachable {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a non-success status error
    pub fn status(location: impl Into<String>, status: u16) -> Self {
        Self::Status {
            location: location.into(),
            status,
        }
    }

    /// Create a payload parse error
    pub fn parse(location: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            location: location.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = LoadError::status("https://example.com/data.json", 404);
        assert_eq!(
            err.to_string(),
            "Data source https://example.com/data.json returned HTTP 404"
        );
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = LoadError::parse("data.json", json_err);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Data source data.json returned an invalid payload"));
    }

    #[test]
    fn test_invalid_filter_lists_choices() {
        let err = Error::invalid_filter("pending");
        assert!(err.to_string().contains("all, active, inactive"));
    }
}
