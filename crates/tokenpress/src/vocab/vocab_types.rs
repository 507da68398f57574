//! # Vocabulary Types

use crate::types::{Pair, TPHashMap};

/// `{ Pair<T> -> T}` map.
///
/// ## Style Hints
/// Instance names should prefer `pairs`, or `pair_token_map`.
pub type PairTokenMap<T> = TPHashMap<Pair<T>, T>;

/// `{ Vec<u8> -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `span_map`, or `span_token_map`.
pub type SpanTokenMap<T> = TPHashMap<Vec<u8>, T>;

/// `{ T -> u8 }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_bytes`, or `token_byte_map`.
pub type TokenByteMap<T> = TPHashMap<T, u8>;

/// `[T; 256]` array.
///
/// ## Style Hints
/// Instance names should prefer `byte_tokens`, or `byte_token_array`.
pub type ByteTokenArray<T> = [T; 256];

/// Ordered ``(bytes, token)`` entries; the pre-parsed input to vocabulary construction.
///
/// In the `tiktoken` convention the token id is also the merge rank.
///
/// ## Style Hints
/// Instance names should prefer `rank_list`.
pub type RankList<T> = Vec<(Vec<u8>, T)>;
