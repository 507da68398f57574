//! # Token Decoders
//!
//! Decoder clients should use:
//!
//! * [`SlabIndexDecoder`] - the dense-index `TokenDecoder`.
//! * `ParallelRayonDecoder` - a batch parallelism wrapper around any `TokenDecoder`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use tokenpress::{
//!     decoders::{SlabIndexDecoder, TokenDecoder},
//!     types::TokenType,
//!     vocab::Vocabulary,
//! };
//!
//! fn example<T: TokenType>(
//!     vocab: Arc<Vocabulary<T>>,
//!     batch: &[&[T]],
//! ) -> Vec<Option<String>> {
//!     let decoder = SlabIndexDecoder::from_vocab(vocab);
//!
//!     #[cfg(feature = "rayon")]
//!     let decoder = tokenpress::rayon::ParallelRayonDecoder::new(decoder);
//!
//!     decoder.try_decode_batch_to_strings(batch).unwrap()
//! }
//! ```

mod slab_index_decoder;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
mod token_decoder;

#[doc(inline)]
pub use slab_index_decoder::*;
#[doc(inline)]
pub use token_decoder::*;
