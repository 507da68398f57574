//! # Text Spanning
//!
//! Splits text into the chunks the BPE merger works on.
//!
//! [`TextSpanningConfig`] describes the declarative needs of a tokenizer:
//! * `pattern` - the word/span split pattern.
//! * `specials` - the special words, excised before the pattern runs.
//!
//! [`TextSpanner`] is the compiled form; it yields [`SpanRef`]s.

mod spanning_config;
mod special_matcher;
mod text_spanner;

#[doc(inline)]
pub use spanning_config::*;
#[doc(inline)]
pub use special_matcher::*;
#[doc(inline)]
pub use text_spanner::*;
