//! # Vocab Testing Tools

use crate::{
    types::TokenType,
    vocab::{ByteMapVocab, RankList, SpecialVocab, VocabIndex, Vocabulary},
};

/// Merged words of the test vocabulary, with their tokens.
///
/// Every word splits into two earlier entries (or bytes).
pub const TEST_VOCAB_WORDS: &[(&str, usize)] = &[
    ("at", 300),
    ("ate", 301),
    ("th", 302),
    ("the", 303),
    (", ", 304),
    ("on", 305),
    ("he", 306),
    ("ll", 307),
    ("hell", 308),
    ("hello", 309),
    ("wo", 310),
    ("ld", 311),
    ("rld", 312),
    ("world", 313),
    ("fo", 314),
    ("for", 315),
    ("all", 316),
    (". ", 317),
    ("o ", 318),
    (" world", 319),
];

/// Build a byte vocabulary where byte `b` is token `b + shift`.
pub fn build_test_shift_byte_vocab<T: TokenType>(shift: usize) -> ByteMapVocab<T> {
    let byte_to_token: Vec<T> = (0..256)
        .map(|b| T::from_usize(b + shift).unwrap())
        .collect();
    ByteMapVocab::try_from_byte_to_token(&byte_to_token).unwrap()
}

/// Build the test [`RankList`] over the given byte base.
pub fn build_test_rank_list<T: TokenType>(byte_vocab: &ByteMapVocab<T>) -> RankList<T> {
    let mut rank_list: RankList<T> = byte_vocab.span_pairs().collect();
    rank_list.extend(
        TEST_VOCAB_WORDS
            .iter()
            .map(|&(word, token)| (word.as_bytes().to_vec(), T::from_usize(token).unwrap())),
    );
    rank_list
}

/// Create a test [`Vocabulary`].
pub fn build_test_vocab<T: TokenType>(
    byte_vocab: ByteMapVocab<T>,
    special_vocab: SpecialVocab<T>,
) -> Vocabulary<T> {
    Vocabulary::from_rank_list(build_test_rank_list(&byte_vocab), special_vocab).unwrap()
}
