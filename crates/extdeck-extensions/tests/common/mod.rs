//! Common test utilities for extdeck-extensions
//!
//! This module provides shared test infrastructure including:
//! - Record builders and sample payloads
//! - Mock renderer, confirmer and data sources
//! - Assertion helpers for list and view state

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod builders;
pub mod mocks;

pub use assertions::*;
pub use builders::*;
pub use mocks::*;
