//! # Model Identifiers

use core::str::FromStr;

use crate::{
    errors::{TPResult, TokenpressError},
    models::{
        patterns::{CL100K_BASE_PATTERN, O200K_BASE_PATTERN, VOYAGE3_BASE_PATTERN},
        specials::{CL100K_BASE_SPECIALS, O200K_BASE_SPECIALS, VOYAGE3_BASE_SPECIALS},
    },
    regex::ConstRegexWrapperPattern,
    spanning::TextSpanningConfig,
    vocab::SpecialVocab,
};

/// The closed set of supported vocabularies.
///
/// Parses from, and displays as, the published vocabulary name:
///
/// ```rust
/// use tokenpress::models::ModelId;
///
/// let id: ModelId = "o200k_base".parse().unwrap();
/// assert_eq!(id, ModelId::O200kBase);
/// assert_eq!(id.to_string(), "o200k_base");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
    strum_macros::IntoStaticStr
)]
pub enum ModelId {
    /// GPT-3.5/GPT-4 "`cl100k_base`".
    #[strum(serialize = "cl100k_base")]
    Cl100kBase,

    /// GPT-4o "`o200k_base`".
    #[strum(serialize = "o200k_base")]
    O200kBase,

    /// Voyage embedding model "`voyage3_base`".
    #[strum(serialize = "voyage3_base")]
    Voyage3Base,
}

impl ModelId {
    /// Resolve a model name.
    ///
    /// ## Returns
    /// [`TokenpressError::UnknownModel`] for any other name.
    pub fn try_from_name(name: &str) -> TPResult<Self> {
        Self::from_str(name).map_err(|_| TokenpressError::UnknownModel {
            name: name.to_string(),
        })
    }

    /// The published vocabulary name.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// The word split pattern.
    pub fn pattern(&self) -> ConstRegexWrapperPattern {
        match self {
            Self::Cl100kBase => CL100K_BASE_PATTERN,
            Self::O200kBase => O200K_BASE_PATTERN,
            Self::Voyage3Base => VOYAGE3_BASE_PATTERN,
        }
    }

    /// The ``(literal, token)`` special tokens.
    pub fn special_tokens(&self) -> &'static [(&'static str, usize)] {
        match self {
            Self::Cl100kBase => CL100K_BASE_SPECIALS,
            Self::O200kBase => O200K_BASE_SPECIALS,
            Self::Voyage3Base => VOYAGE3_BASE_SPECIALS,
        }
    }

    /// The [`TextSpanningConfig`] of this model.
    pub fn spanning_config(&self) -> TPResult<TextSpanningConfig<u32>> {
        Ok(TextSpanningConfig::from_pattern(self.pattern())
            .with_specials(SpecialVocab::try_from_usize_words(self.special_tokens())?))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::vocab::VocabIndex;

    #[test]
    fn test_names() {
        for id in ModelId::iter() {
            assert_eq!(ModelId::try_from_name(id.name()).unwrap(), id);
            assert_eq!(id.to_string(), id.name());
        }
        assert_eq!(
            ModelId::iter().map(|id| id.name()).collect::<Vec<_>>(),
            vec!["cl100k_base", "o200k_base", "voyage3_base"]
        );
    }

    #[test]
    fn test_unknown_model() {
        for name in ["gpt2", "", "CL100K_BASE", "cl100k_base "] {
            match ModelId::try_from_name(name) {
                Err(TokenpressError::UnknownModel { name: n }) => assert_eq!(n, name),
                other => panic!("expected UnknownModel, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_spanning_config() {
        let config = ModelId::Cl100kBase.spanning_config().unwrap();
        assert_eq!(config.pattern().as_str(), CL100K_BASE_PATTERN.as_str());
        assert_eq!(config.specials().len(), 5);
        assert_eq!(config.specials().lookup_token(b"<|endoftext|>"), Some(100257));

        assert!(ModelId::Voyage3Base.spanning_config().unwrap().specials().is_empty());
    }
}
