//! # Parallel Decoder

use rayon::prelude::*;

use crate::{decoders::TokenDecoder, errors::TPResult, types::TokenType};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches.
#[derive(Debug, Clone)]
pub struct ParallelRayonDecoder<T: TokenType, D: TokenDecoder<T>> {
    /// Wrapped decoder.
    pub inner: D,

    _marker: core::marker::PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel token decoder.
    ///
    /// ## Arguments
    /// * `inner` - The token decoder to wrap.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: core::marker::PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn try_decode_append_bytes(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> TPResult<()> {
        self.inner.try_decode_append_bytes(tokens, buf)
    }

    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> TPResult<Vec<u8>> {
        self.inner.try_decode_to_bytes(tokens)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, batch), fields(batch_size = batch.len()))
    )]
    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> TPResult<Vec<Vec<u8>>> {
        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_bytes(tokens))
            .collect()
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> TPResult<Vec<Option<String>>> {
        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_string(tokens))
            .collect()
    }
}
