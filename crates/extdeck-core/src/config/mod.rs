//! Configuration loading and management

mod deck_config;
mod loader;

pub use deck_config::{DeckConfig, DisplayConfig, NetworkConfig};
pub use loader::ConfigLoader;
