//! # extdeck-core
//!
//! Core library for extdeck providing:
//! - Extension record, filter and theme types
//! - Load and configuration error types
//! - Localized user-facing messages
//! - Hierarchical configuration loading (embedded defaults, file, environment)

pub mod config;
pub mod error;
pub mod messages;
pub mod types;

pub use config::{ConfigLoader, DeckConfig};
pub use error::{Error, LoadError, Result};
pub use messages::{Locale, Messages};
pub use types::{ExtensionRecord, Filter, RawExtension, Theme, ThemePreference};
