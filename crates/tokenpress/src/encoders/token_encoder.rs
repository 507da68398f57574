//! # Token Encoder Trait

use std::sync::Arc;

use crate::{
    spanning::TextSpanner,
    types::TokenType,
    vocab::{Vocabulary, size_hints::predicted_token_capacity},
};

/// A trait for token encoders.
///
/// Encoding is total: every `&str` has a tokenization,
/// so none of these methods can fail.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `encoder`.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached vocabulary.
    fn vocab(&self) -> &Arc<Vocabulary<T>>;

    /// Return the attached text spanner.
    fn spanner(&self) -> &Arc<TextSpanner<T>>;

    /// Encode text into tokens, recognizing special words,
    /// appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    );

    /// Encode text into tokens, treating special words as plain text,
    /// appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_ordinary_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    );

    /// Count the tokens [`Self::encode`] would produce,
    /// without building the full token sequence.
    fn count(
        &self,
        text: &str,
    ) -> usize;

    /// Encode text into tokens, recognizing special words.
    ///
    /// ## Returns
    /// A vector of tokens; empty for empty text.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        let mut tokens = Vec::with_capacity(predicted_token_capacity(text.len()));
        self.encode_append(text, &mut tokens);
        tokens
    }

    /// Encode text into tokens, treating special words as plain text.
    fn encode_ordinary(
        &self,
        text: &str,
    ) -> Vec<T> {
        let mut tokens = Vec::with_capacity(predicted_token_capacity(text.len()));
        self.encode_ordinary_append(text, &mut tokens);
        tokens
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// A vector of token vectors, in batch order.
    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }

    /// Count the tokens of each text in a batch.
    fn count_batch(
        &self,
        batch: &[&str],
    ) -> Vec<usize> {
        batch.iter().map(|text| self.count(text)).collect()
    }
}
