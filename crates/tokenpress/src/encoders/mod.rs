//! # Token Encoders
//!
//! [`TokenSpanEncoder`] splits text with a [`TextSpanner`](crate::spanning::TextSpanner)
//! and merges each span with a [`SpanEncoder`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use tokenpress::{
//!     encoders::{SpanEncoderSelector, TokenEncoder, TokenSpanEncoder},
//!     spanning::TextSpanner,
//!     types::TokenType,
//!     vocab::Vocabulary,
//! };
//!
//! fn example<T: TokenType>(
//!     vocab: Arc<Vocabulary<T>>,
//!     spanner: Arc<TextSpanner<T>>,
//!     batch: &[&str],
//! ) -> Vec<Vec<T>> {
//!     let encoder = TokenSpanEncoder::new_with_selector(spanner, vocab, SpanEncoderSelector::Default);
//!     encoder.encode_batch(batch)
//! }
//! ```

#[cfg(any(test, feature = "testing"))]
pub mod testing;
mod token_encoder;
pub mod token_span_encoder;

#[doc(inline)]
pub use token_encoder::*;
#[doc(inline)]
pub use token_span_encoder::{SpanEncoder, SpanEncoderSelector, TokenSpanEncoder};
