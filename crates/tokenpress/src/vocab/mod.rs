//! # Vocabulary
//!
//! This module provides the vocabulary and related io mechanisms.
//!
//! ## Byte Vocabulary
//!
//! Published vocabularies assign the 256 single-byte tokens their own ids;
//! the mapping between byte values and token ids is held by:
//! * [`ByteMapVocab`].
//!
//! ## Vocabulary
//!
//! The primary user-oriented vocabulary is [`Vocabulary`], which contains:
//! * `span_vocab` - a [`SpanMapVocab`] ``{ Vec<u8> -> T }`` vocabulary,
//! * `pair_vocab` - a [`PairMapVocab`] ``{ (T, T) -> T }`` merge table,
//! * `special_vocab` - a [`SpecialVocab`] ``{ literal -> T }`` table,
//! * `slab` - a [`TokenSlab`] dense ``{ T -> &[u8] }`` index.
//!
//! A [`Vocabulary`] is built once from a [`RankList`] and is never mutated
//! afterwards; share it behind an `Arc`.
pub mod io;

pub mod byte_vocab;
pub mod pair_vocab;
pub mod size_hints;
pub mod span_vocab;
pub mod special_vocab;
pub mod token_slab;
pub mod utility;
pub mod vocab_index;
pub mod vocab_types;
pub mod vocabulary;

#[doc(inline)]
pub use byte_vocab::ByteMapVocab;
#[doc(inline)]
pub use pair_vocab::PairMapVocab;
#[doc(inline)]
pub use span_vocab::SpanMapVocab;
#[doc(inline)]
pub use special_vocab::SpecialVocab;
#[doc(inline)]
pub use token_slab::TokenSlab;
#[doc(inline)]
pub use vocab_index::VocabIndex;
#[doc(inline)]
pub use vocab_types::{ByteTokenArray, PairTokenMap, RankList, SpanTokenMap, TokenByteMap};
#[doc(inline)]
pub use vocabulary::Vocabulary;
