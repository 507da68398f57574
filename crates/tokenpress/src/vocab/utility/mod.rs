//! # Vocabulary Utilities

pub mod specials_tools;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
