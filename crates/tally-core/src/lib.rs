//! Tally Core - Foundational types for the Tally workspace
//!
//! This crate provides what the other Tally crates depend on:
//! - Error types and Result alias
//! - Locale resolution and grouped number formatting

mod error;
mod locale;

pub use error::{Result, TallyError};
pub use locale::{format_value, resolve_locale};
pub use num_format::Locale;
