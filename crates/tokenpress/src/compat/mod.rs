//! # Small Shared Helpers

pub mod ranges;
pub mod traits;
