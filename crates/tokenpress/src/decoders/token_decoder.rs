//! # Token Decoder Trait

use crate::{
    errors::TPResult,
    types::TokenType,
    vocab::size_hints::predicted_byte_capacity,
};

/// Trait for token decoders.
///
/// Decoding is strict: an out-of-range or unassigned token fails the whole
/// call with [`TokenpressError::UnknownToken`](crate::TokenpressError::UnknownToken).
/// Bytes which are not valid UTF-8 are not an error; the string forms
/// report them as `None` (or replace them, for the lossy form).
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes tokens, appending their bytes to a target buffer.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `buf` - The target byte buffer.
    ///
    /// ## Returns
    /// An error on the first unknown token; `buf` may then hold a partial prefix.
    fn try_decode_append_bytes(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> TPResult<()>;

    /// Decodes tokens into bytes.
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> TPResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(predicted_byte_capacity(tokens.len()));
        self.try_decode_append_bytes(tokens, &mut buf)?;
        Ok(buf)
    }

    /// Decodes tokens into a string.
    ///
    /// ## Returns
    /// `Ok(None)` when the decoded bytes are not valid UTF-8.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> TPResult<Option<String>> {
        Ok(String::from_utf8(self.try_decode_to_bytes(tokens)?).ok())
    }

    /// Decodes tokens into a string, replacing invalid UTF-8 sequences
    /// with `U+FFFD`.
    fn try_decode_to_string_lossy(
        &self,
        tokens: &[T],
    ) -> TPResult<String> {
        let buf = self.try_decode_to_bytes(tokens)?;
        Ok(match String::from_utf8(buf) {
            Ok(s) => s,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }

    /// Decodes a batch of tokens into bytes.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    ///
    /// ## Returns
    /// One buffer per item; or the first error.
    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> TPResult<Vec<Vec<u8>>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_bytes(tokens))
            .collect()
    }

    /// Decodes a batch of tokens into strings.
    ///
    /// See [`Self::try_decode_to_string`].
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> TPResult<Vec<Option<String>>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}
