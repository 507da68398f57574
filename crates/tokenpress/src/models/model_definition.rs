//! # Model Definitions

use std::sync::Arc;

use crate::{
    errors::TPResult,
    models::ModelId,
    spanning::{TextSpanner, TextSpanningConfig},
    vocab::{RankList, Vocabulary},
};

/// Everything a [`Tokenizer`](crate::Tokenizer) needs for one model:
/// the validated vocabulary and the compiled spanner.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ModelDefinition {
    id: ModelId,
    spanning_config: TextSpanningConfig<u32>,
    vocab: Arc<Vocabulary<u32>>,
    spanner: Arc<TextSpanner<u32>>,
}

impl ModelDefinition {
    /// Build the definition of a built-in model from its rank list.
    ///
    /// ## Arguments
    /// * `id` - The model; selects the word pattern and special tokens.
    /// * `rank_list` - The normal vocabulary entries.
    ///
    /// ## Returns
    /// [`TokenpressError::VocabLoad`](crate::TokenpressError::VocabLoad)
    /// if the rank list is inconsistent.
    pub fn build(
        id: ModelId,
        rank_list: RankList<u32>,
    ) -> TPResult<Self> {
        Self::from_parts(id, id.spanning_config()?, rank_list)
    }

    /// Build a definition with an explicit [`TextSpanningConfig`].
    ///
    /// The special words of the config become the special tokens of the vocabulary.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(spanning_config, rank_list)))]
    pub fn from_parts(
        id: ModelId,
        spanning_config: TextSpanningConfig<u32>,
        rank_list: RankList<u32>,
    ) -> TPResult<Self> {
        let vocab = Vocabulary::from_rank_list(rank_list, spanning_config.specials().clone())?;
        let spanner = TextSpanner::from_config(&spanning_config)?;

        log::info!(
            "built {id}: {} tokens, {} merge pairs, {} specials, vocab size {}",
            vocab.span_vocab().span_map().len(),
            vocab.pair_vocab().len(),
            vocab.special_vocab().span_map().len(),
            vocab.vocab_size(),
        );

        Ok(Self {
            id,
            spanning_config,
            vocab: vocab.into(),
            spanner: spanner.into(),
        })
    }

    /// The model identifier.
    pub fn id(&self) -> ModelId {
        self.id
    }

    /// The spanning config the definition was built from.
    pub fn spanning_config(&self) -> &TextSpanningConfig<u32> {
        &self.spanning_config
    }

    /// The shared vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary<u32>> {
        &self.vocab
    }

    /// The shared spanner.
    pub fn spanner(&self) -> &Arc<TextSpanner<u32>> {
        &self.spanner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::TokenpressError,
        vocab::utility::testing::{build_test_rank_list, build_test_shift_byte_vocab},
    };

    #[test]
    fn test_from_parts() {
        let rank_list = build_test_rank_list(&build_test_shift_byte_vocab::<u32>(0));
        let config = ModelId::Voyage3Base
            .spanning_config()
            .unwrap()
            .try_with_special_words([("<|pad|>", 1000_u32)])
            .unwrap();

        let definition = ModelDefinition::from_parts(ModelId::Voyage3Base, config, rank_list).unwrap();
        assert_eq!(definition.id(), ModelId::Voyage3Base);
        assert_eq!(definition.vocab().vocab_size(), 1001);
        assert_eq!(definition.vocab().special_token_id("<|pad|>"), Some(1000));
        assert!(definition.spanner().special_matcher().is_some());
        assert_eq!(definition.spanning_config().specials().span_map().len(), 1);
    }

    #[test]
    fn test_build_rejects_special_collision() {
        // cl100k specials start at 100257; a normal token there collides.
        let mut rank_list = build_test_rank_list(&build_test_shift_byte_vocab::<u32>(0));
        rank_list.push((b"zz".to_vec(), 100257));

        assert!(matches!(
            ModelDefinition::build(ModelId::Cl100kBase, rank_list),
            Err(TokenpressError::VocabLoad(_))
        ));
    }
}
