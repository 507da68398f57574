//! # Special Words Vocabulary

use crate::{
    errors::{TPResult, TokenpressError},
    types::{TPHashSet, TokenType},
    vocab::{SpanTokenMap, VocabIndex},
};

/// Token vocabulary for special words.
///
/// Special words are matched verbatim in the input and map to fixed tokens;
/// they are never split or merged. This contains no byte:token mappings, or pair mergers.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SpecialVocab<T: TokenType> {
    /// The map of special words to tokens.
    span_map: SpanTokenMap<T>,
}

impl<T: TokenType> SpecialVocab<T> {
    /// Build a special vocabulary from ``(word, token)`` entries.
    ///
    /// ## Returns
    /// An error if a word is empty, or if two entries share a word or a token.
    pub fn try_from_words<W, S>(words: W) -> TPResult<Self>
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for (word, token) in words {
            vocab.try_add_word(word.as_ref(), token)?;
        }
        Ok(vocab)
    }

    /// Build a special vocabulary from ``(word, usize)`` entries.
    ///
    /// ## Returns
    /// An error if a token does not fit in `T`, or for the conditions of
    /// [`Self::try_from_words`].
    pub fn try_from_usize_words<S: AsRef<str>>(words: &[(S, usize)]) -> TPResult<Self> {
        let mut vocab = Self::default();
        for (word, id) in words {
            let token = T::from_usize(*id).ok_or_else(|| {
                TokenpressError::VocabLoad(format!(
                    "special token {id} does not fit the token type"
                ))
            })?;
            vocab.try_add_word(word.as_ref(), token)?;
        }
        Ok(vocab)
    }

    /// Add a word to the vocab.
    ///
    /// ## Arguments
    /// * `word` - The word string to add.
    /// * `token` - The token value to assign to the word.
    pub fn try_add_word(
        &mut self,
        word: &str,
        token: T,
    ) -> TPResult<()> {
        if word.is_empty() {
            return Err(TokenpressError::VocabLoad(format!(
                "special token {token} has an empty literal"
            )));
        }
        if let Some(prev) = self.span_map.get(word.as_bytes()) {
            return Err(TokenpressError::VocabLoad(format!(
                "special literal {word:?} is assigned to both {prev} and {token}"
            )));
        }
        if self.span_map.values().any(|&t| t == token) {
            return Err(TokenpressError::VocabLoad(format!(
                "special token {token} is assigned to more than one literal"
            )));
        }
        self.span_map.insert(word.as_bytes().to_vec(), token);
        Ok(())
    }

    /// Get the span map.
    pub fn span_map(&self) -> &SpanTokenMap<T> {
        &self.span_map
    }

    /// Return the associated token for the word, if any.
    pub fn lookup_token(
        &self,
        span: &[u8],
    ) -> Option<T> {
        self.span_map.get(span).copied()
    }

    /// Get the associated span for a token, if any.
    pub fn lookup_span(
        &self,
        token: &T,
    ) -> Option<&[u8]> {
        self.span_map
            .iter()
            .find_map(|(span, t)| (t == token).then_some(span.as_slice()))
    }

    /// The ``(literal, token)`` entries, ordered by token.
    pub fn words(&self) -> Vec<(&str, T)> {
        let mut words: Vec<(&str, T)> = self
            .span_map
            .iter()
            .filter_map(|(span, &token)| core::str::from_utf8(span).ok().map(|w| (w, token)))
            .collect();
        words.sort_unstable_by_key(|&(_, token)| token);
        words
    }
}

impl<T: TokenType> VocabIndex<T> for SpecialVocab<T> {
    fn len(&self) -> usize {
        self.span_map.len()
    }

    fn tokens(&self) -> TPHashSet<T> {
        self.span_map.values().copied().collect()
    }

    fn max_token(&self) -> Option<T> {
        self.span_map.values().max().copied()
    }

    fn span_pairs(&self) -> impl Iterator<Item = (Vec<u8>, T)> {
        self.span_map
            .iter()
            .map(|(span, &token)| (span.clone(), token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_vocab() {
        type T = u32;
        let mut vocab: SpecialVocab<T> = SpecialVocab::default();
        assert!(vocab.is_empty());
        assert_eq!(vocab.max_token(), None);

        vocab.try_add_word("<|hello|>", 1000).unwrap();
        vocab.try_add_word("<|bye|>", 999).unwrap();
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.max_token(), Some(1000));

        assert_eq!(vocab.lookup_token(b"<|hello|>"), Some(1000));
        assert_eq!(vocab.lookup_token(b"<|nope|>"), None);
        assert_eq!(vocab.lookup_span(&999), Some(b"<|bye|>".as_slice()));
        assert_eq!(vocab.words(), vec![("<|bye|>", 999), ("<|hello|>", 1000)]);

        let rebuild = SpecialVocab::try_from_words(vocab.words()).unwrap();
        assert_eq!(rebuild, vocab);
    }

    #[test]
    fn test_special_vocab_conflicts() {
        type T = u32;

        assert!(SpecialVocab::<T>::try_from_words([("", 1)]).is_err());
        assert!(SpecialVocab::<T>::try_from_words([("<|a|>", 1), ("<|a|>", 2)]).is_err());
        assert!(SpecialVocab::<T>::try_from_words([("<|a|>", 1), ("<|b|>", 1)]).is_err());

        assert!(SpecialVocab::<u16>::try_from_usize_words(&[("<|big|>", 100_000)]).is_err());
        let vocab = SpecialVocab::<u32>::try_from_usize_words(&[("<|big|>", 100_000)]).unwrap();
        assert_eq!(vocab.lookup_token(b"<|big|>"), Some(100_000));
    }
}
