//! # Vocabulary Loading
//!
//! The crate does no file or network I/O of its own;
//! a [`VocabLoader`] hands it the rank list of a model.

use std::sync::Arc;

use crate::{
    errors::{TPResult, TokenpressError},
    models::ModelId,
    types::TPHashMap,
    vocab::{RankList, io::read_tiktoken_rank_list},
};

/// Source of model rank lists.
pub trait VocabLoader: Send + Sync {
    /// Load the normal-token rank list of a model.
    ///
    /// ## Returns
    /// [`TokenpressError::VocabLoad`] when the data is unavailable or malformed.
    fn load_rank_list(
        &self,
        model: ModelId,
    ) -> TPResult<RankList<u32>>;
}

impl<F> VocabLoader for F
where
    F: Fn(ModelId) -> TPResult<RankList<u32>> + Send + Sync,
{
    fn load_rank_list(
        &self,
        model: ModelId,
    ) -> TPResult<RankList<u32>> {
        self(model)
    }
}

/// A [`VocabLoader`] over in-memory `tiktoken` rank files.
///
/// ## Style Hints
///
/// Instance names should prefer `loader`.
#[derive(Debug, Clone, Default)]
pub struct TiktokenReaderLoader {
    sources: TPHashMap<ModelId, Arc<[u8]>>,
}

impl TiktokenReaderLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rank file contents of a model, replacing any earlier ones.
    pub fn with_model<D>(
        mut self,
        model: ModelId,
        data: D,
    ) -> Self
    where
        D: Into<Vec<u8>>,
    {
        self.sources.insert(model, data.into().into());
        self
    }

    /// The models with registered data, sorted.
    pub fn models(&self) -> Vec<ModelId> {
        let mut models: Vec<ModelId> = self.sources.keys().copied().collect();
        models.sort_unstable();
        models
    }
}

impl VocabLoader for TiktokenReaderLoader {
    fn load_rank_list(
        &self,
        model: ModelId,
    ) -> TPResult<RankList<u32>> {
        let data = self
            .sources
            .get(&model)
            .ok_or_else(|| TokenpressError::VocabLoad(format!("no rank data for model {model}")))?;
        read_tiktoken_rank_list(data.as_ref())
    }
}
