//! Type definitions for extension records and presentation state

mod filter_types;
mod record_types;
mod theme_types;

pub use filter_types::*;
pub use record_types::*;
pub use theme_types::*;
