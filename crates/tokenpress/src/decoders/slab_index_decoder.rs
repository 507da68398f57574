//! # Slab Index Decoder

use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    errors::{TPResult, TokenpressError},
    types::TokenType,
    vocab::{Vocabulary, size_hints::EXPECTED_BYTES_PER_TOKEN},
};

/// A [`TokenDecoder<T>`] over the dense slab index of a [`Vocabulary`].
///
/// All tokens (single-byte and multibyte words,
/// and special tokens) are stored in the slab index.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `decoder`;
/// and expand to `slab_decoder` when there is ambiguity.
#[derive(Debug, Clone)]
pub struct SlabIndexDecoder<T: TokenType> {
    vocab: Arc<Vocabulary<T>>,

    expected_bytes_per_token: f32,
}

impl<T: TokenType> SlabIndexDecoder<T> {
    /// Build a [`SlabIndexDecoder`] over this [`Vocabulary`].
    pub fn from_vocab(vocab: Arc<Vocabulary<T>>) -> Self {
        Self {
            vocab,
            expected_bytes_per_token: EXPECTED_BYTES_PER_TOKEN,
        }
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }

    /// Get the expected bytes per token.
    pub fn expected_bytes_per_token(&self) -> f32 {
        self.expected_bytes_per_token
    }

    /// Sets the expected bytes per token.
    ///
    /// This biases the capacity of the output buffer in `try_decode_to_bytes`.
    pub fn with_expected_bytes_per_token(
        mut self,
        expected: f32,
    ) -> Self {
        self.expected_bytes_per_token = expected;
        self
    }

    /// Predict the capacity needed when pre-allocating output buffers.
    pub fn predicted_byte_buffer_size(
        &self,
        tokens: &[T],
    ) -> usize {
        (tokens.len() as f32 * 1.1 * self.expected_bytes_per_token) as usize
    }
}

impl<T: TokenType> TokenDecoder<T> for SlabIndexDecoder<T> {
    fn try_decode_append_bytes(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> TPResult<()> {
        let slab = self.vocab.slab();
        for &token in tokens {
            let span = slab
                .lookup_span(&token)
                .ok_or_else(|| TokenpressError::unknown_token(token))?;
            buf.extend_from_slice(span);
        }
        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> TPResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.predicted_byte_buffer_size(tokens));
        self.try_decode_append_bytes(tokens, &mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::testing::common_decoder_unit_test;

    #[test]
    fn test_decoder() {
        let vocab = crate::encoders::testing::common_encoder_test_vocab::<u16>();

        let decoder = SlabIndexDecoder::from_vocab(vocab.clone()).with_expected_bytes_per_token(7.5);
        assert_eq!(decoder.expected_bytes_per_token(), 7.5);
        assert_eq!(decoder.predicted_byte_buffer_size(&[1, 2]), 16);

        common_decoder_unit_test(vocab, &decoder);
    }
}
