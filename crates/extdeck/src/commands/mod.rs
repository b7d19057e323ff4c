//! CLI command implementations

pub mod browse;
mod common;
pub mod completions;
pub mod list;
pub mod version;
