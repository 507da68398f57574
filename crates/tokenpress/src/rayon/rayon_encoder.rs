//! # Parallel Encoder

use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    encoders::TokenEncoder,
    spanning::TextSpanner,
    types::TokenType,
    vocab::Vocabulary,
};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches; each text is still
/// encoded on a single thread.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<T: TokenType, E: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: core::marker::PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: core::marker::PhantomData,
        }
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn vocab(&self) -> &Arc<Vocabulary<T>> {
        self.inner.vocab()
    }

    fn spanner(&self) -> &Arc<TextSpanner<T>> {
        self.inner.spanner()
    }

    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        self.inner.encode_append(text, tokens)
    }

    fn encode_ordinary_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        self.inner.encode_ordinary_append(text, tokens)
    }

    fn count(
        &self,
        text: &str,
    ) -> usize {
        self.inner.count(text)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, batch), fields(batch_size = batch.len()))
    )]
    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<T>> {
        batch.par_iter().map(|text| self.inner.encode(text)).collect()
    }

    fn count_batch(
        &self,
        batch: &[&str],
    ) -> Vec<usize> {
        batch.par_iter().map(|text| self.inner.count(text)).collect()
    }
}
