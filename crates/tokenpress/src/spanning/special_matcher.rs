//! # Special Word Matcher

use core::ops::Range;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::{
    errors::{TPResult, TokenpressError},
    types::TokenType,
    vocab::SpecialVocab,
};

/// Multi-literal scanner for special words.
///
/// Matches are non-overlapping and leftmost; when several words start at
/// the same position the longest wins.
#[derive(Debug, Clone)]
pub struct SpecialMatcher<T: TokenType> {
    automaton: AhoCorasick,

    /// Token of each automaton pattern, by pattern index.
    tokens: Vec<T>,
}

impl<T: TokenType> SpecialMatcher<T> {
    /// Build a matcher over ``(word, token)`` entries.
    pub fn new<S: AsRef<str>>(words: &[(S, T)]) -> TPResult<Self> {
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(words.iter().map(|(word, _)| word.as_ref()))
            .map_err(|e| TokenpressError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            automaton,
            tokens: words.iter().map(|&(_, token)| token).collect(),
        })
    }

    /// Build a matcher for a [`SpecialVocab`].
    ///
    /// ## Returns
    /// `None` when the vocabulary has no special words.
    pub fn from_special_vocab(special_vocab: &SpecialVocab<T>) -> TPResult<Option<Self>> {
        let words = special_vocab.words();
        if words.is_empty() {
            return Ok(None);
        }
        Self::new(&words).map(Some)
    }

    /// The number of special words.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the matcher empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over ``(range, token)`` for every special word in `text`.
    pub fn find_iter<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (Range<usize>, T)> + 'a {
        self.automaton
            .find_iter(text)
            .map(|m| (m.range(), self.tokens[m.pattern().as_usize()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leftmost_longest() {
        let matcher: SpecialMatcher<u32> =
            SpecialMatcher::new(&[("<|a|>", 10), ("<|a|><|b|>", 11), ("<|b|>", 12)]).unwrap();
        assert_eq!(matcher.len(), 3);

        let text = "x<|a|><|b|>y<|b|><|a|>";
        assert_eq!(
            matcher.find_iter(text).collect::<Vec<_>>(),
            vec![(1..11, 11), (12..17, 12), (17..22, 10)]
        );
    }

    #[test]
    fn test_from_special_vocab() {
        let empty = SpecialVocab::<u32>::default();
        assert!(SpecialMatcher::from_special_vocab(&empty).unwrap().is_none());

        let specials = SpecialVocab::try_from_words([("<|end|>", 7_u32)]).unwrap();
        let matcher = SpecialMatcher::from_special_vocab(&specials)
            .unwrap()
            .unwrap();
        assert!(!matcher.is_empty());
        assert_eq!(
            matcher.find_iter("a<|end|>").collect::<Vec<_>>(),
            vec![(1..8, 7)]
        );
        assert_eq!(matcher.find_iter("a<|end").count(), 0);
    }
}
