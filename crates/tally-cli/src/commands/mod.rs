//! CLI command implementations

pub mod count;
pub mod interest;
