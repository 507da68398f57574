//! # Token Vocabulary Index

use crate::types::{TPHashSet, TokenType};

/// Common read-only view over a token vocabulary.
pub trait VocabIndex<T: TokenType> {
    /// Returns the number of tokens in the vocabulary.
    fn len(&self) -> usize;

    /// Returns true if the vocabulary is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the set of all tokens.
    fn tokens(&self) -> TPHashSet<T>;

    /// Returns a vector of all tokens, sorted.
    fn sorted_tokens(&self) -> Vec<T> {
        let mut tokens: Vec<T> = self.tokens().into_iter().collect();
        tokens.sort_unstable();
        tokens
    }

    /// Gets the highest ranked token.
    ///
    /// ## Returns
    /// The maximum token value, or None.
    fn max_token(&self) -> Option<T> {
        self.tokens().into_iter().max()
    }

    /// Generate all ``(Vec<u8>, T)`` pairs in the vocabulary.
    ///
    /// ## Returns
    /// An iterator over pairs of byte vectors and their corresponding tokens.
    fn span_pairs(&self) -> impl Iterator<Item = (Vec<u8>, T)>;
}
