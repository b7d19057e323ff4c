//! Extension list management for extdeck
//!
//! This crate handles:
//! - Loading the initial record sequence from a data source (HTTP, file, in-memory)
//! - The injectable removal confirmation capability
//! - Pure projection of (list, filter) into a renderable frame
//! - The renderer boundary
//! - The extension list controller and its commands

pub mod command;
pub mod confirm;
pub mod manager;
pub mod render;
pub mod source;
pub mod view;

pub use command::Command;
pub use confirm::{AutoConfirm, Confirmer};
pub use manager::{ExtensionManager, Phase, Removal};
pub use render::Renderer;
pub use source::{
    DataSource, DataSourceLocation, FileDataSource, HttpDataSource, StaticDataSource,
};
pub use view::{Card, FilterBar, FilterTab, Frame, View};
