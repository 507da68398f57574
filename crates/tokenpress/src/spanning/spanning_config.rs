//! # Text Spanning Configuration

use crate::{
    errors::TPResult,
    regex::RegexWrapperPattern,
    types::TokenType,
    vocab::SpecialVocab,
};

/// Description of a segmentation rule set: the word split pattern,
/// and the special words which are excised before it runs.
///
/// ## Style Hints
///
/// Instance names should prefer `spanning_config`,
/// or `config` when there is no ambiguity.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpanningConfig<T: TokenType> {
    /// Pattern for word splitting.
    pattern: RegexWrapperPattern,

    /// Special tokens vocabulary.
    specials: SpecialVocab<T>,
}

impl<T: TokenType> TextSpanningConfig<T> {
    /// Build a new config from the given word split pattern.
    ///
    /// Will contain an empty list of specials.
    pub fn from_pattern<P>(pattern: P) -> Self
    where
        P: Into<RegexWrapperPattern>,
    {
        Self {
            pattern: pattern.into(),
            specials: SpecialVocab::default(),
        }
    }

    /// Replace the special words.
    pub fn with_specials(
        self,
        specials: SpecialVocab<T>,
    ) -> Self {
        Self { specials, ..self }
    }

    /// Add special words.
    ///
    /// ## Returns
    /// An error on empty or conflicting words; see [`SpecialVocab::try_add_word`].
    pub fn try_with_special_words<W, S>(
        mut self,
        special_words: W,
    ) -> TPResult<Self>
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        for (word, token) in special_words {
            self.specials.try_add_word(word.as_ref(), token)?;
        }
        Ok(self)
    }

    /// Get the word split pattern.
    pub fn pattern(&self) -> &RegexWrapperPattern {
        &self.pattern
    }

    /// Get the special words.
    pub fn specials(&self) -> &SpecialVocab<T> {
        &self.specials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::VocabIndex;

    #[test]
    fn test_config() {
        let config: TextSpanningConfig<u32> = TextSpanningConfig::from_pattern(r"\w+")
            .try_with_special_words([("<|a|>", 500), ("<|b|>", 501)])
            .unwrap();

        assert_eq!(config.pattern().as_str(), r"\w+");
        assert_eq!(config.specials().len(), 2);

        assert!(config.clone().try_with_special_words([("<|a|>", 9)]).is_err());

        let config = config.with_specials(SpecialVocab::default());
        assert!(config.specials().is_empty());
    }
}
