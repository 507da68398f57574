//! # Byte/Token Mapping Table

use core::fmt::Debug;

use crate::{
    errors::{TPResult, TokenpressError},
    types::{TPHashSet, TokenType},
    vocab::{ByteTokenArray, SpanTokenMap, TokenByteMap, VocabIndex},
};

/// ``0..=255`` Byte/Token Bijection Table
///
/// This will always have 256 entries, one for each byte value.
/// The token values are not required to be dense, or in the range ``0..=255``;
/// but they must be 256 distinct tokens.
#[derive(Clone, PartialEq)]
pub struct ByteMapVocab<T: TokenType> {
    /// Hash map from token to byte ordinal value.
    token_bytes: TokenByteMap<T>,

    /// Table mapping from byte ordinal (position) to token.
    byte_tokens: ByteTokenArray<T>,
}

impl<T: TokenType> Debug for ByteMapVocab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ByteMapVocab")
            .field("min_token", &self.byte_tokens.iter().min())
            .field("max_token", &self.byte_tokens.iter().max())
            .finish()
    }
}

impl<T: TokenType> Default for ByteMapVocab<T> {
    /// The identity mapping, byte `b` is token `b`.
    fn default() -> Self {
        let mut byte_tokens = [T::zero(); 256];
        let mut token_bytes = TokenByteMap::with_capacity(256);
        for (idx, slot) in byte_tokens.iter_mut().enumerate() {
            // Every unsigned primitive holds 0..=255.
            let token = T::from_usize(idx).unwrap_or_default();
            *slot = token;
            token_bytes.insert(token, idx as u8);
        }
        Self {
            token_bytes,
            byte_tokens,
        }
    }
}

impl<T: TokenType> ByteMapVocab<T> {
    /// Build a [`ByteMapVocab`] from a byte-ord => token table.
    ///
    /// ## Arguments
    /// * `byte_to_token` - A slice of tokens where the index corresponds to the byte value.
    ///
    /// ## Returns
    /// An error unless the table has exactly 256 distinct entries.
    pub fn try_from_byte_to_token(byte_to_token: &[T]) -> TPResult<Self> {
        let byte_tokens: ByteTokenArray<T> = byte_to_token.try_into().map_err(|_| {
            TokenpressError::VocabLoad(format!(
                "byte table must have 256 entries, found {}",
                byte_to_token.len()
            ))
        })?;

        let mut token_bytes: TokenByteMap<T> = TokenByteMap::with_capacity(256);
        for (idx, &token) in byte_tokens.iter().enumerate() {
            if let Some(prev) = token_bytes.insert(token, idx as u8) {
                return Err(TokenpressError::VocabLoad(format!(
                    "token {token} is mapped to both byte {prev:#04x} and byte {idx:#04x}"
                )));
            }
        }

        Ok(Self {
            token_bytes,
            byte_tokens,
        })
    }

    /// Read the byte base out of a ``{ Vec<u8> -> T }`` map.
    ///
    /// Every one of the 256 single-byte spans must be present.
    pub fn try_from_span_map(span_map: &SpanTokenMap<T>) -> TPResult<Self> {
        let mut byte_to_token = Vec::with_capacity(256);
        for b in 0..=255_u8 {
            match span_map.get([b].as_slice()) {
                Some(&token) => byte_to_token.push(token),
                None => {
                    return Err(TokenpressError::VocabLoad(format!(
                        "byte base is missing the single-byte entry {b:#04x}"
                    )));
                }
            }
        }
        Self::try_from_byte_to_token(&byte_to_token)
    }

    /// Get the byte-ord => token mapping table.
    pub fn byte_tokens(&self) -> &ByteTokenArray<T> {
        &self.byte_tokens
    }

    /// Get the token->byte hash map.
    pub fn token_bytes(&self) -> &TokenByteMap<T> {
        &self.token_bytes
    }

    /// Get the token corresponding to a given byte.
    #[inline(always)]
    pub fn get_token(
        &self,
        byte: u8,
    ) -> T {
        self.byte_tokens[byte as usize]
    }

    /// Append the translated byte tokens to a target buffer.
    ///
    /// ## Arguments
    /// * `bytes` - The slice of bytes to translate and append.
    /// * `tokens` - The target token buffer.
    #[inline(always)]
    pub fn append_tokens(
        &self,
        bytes: &[u8],
        tokens: &mut Vec<T>,
    ) {
        tokens.extend(bytes.iter().map(|&b| self.get_token(b)));
    }

    /// Get the byte corresponding to a given token, if any.
    #[inline(always)]
    pub fn get_byte(
        &self,
        token: T,
    ) -> Option<u8> {
        self.token_bytes.get(&token).copied()
    }
}

impl<T: TokenType> VocabIndex<T> for ByteMapVocab<T> {
    fn len(&self) -> usize {
        256
    }

    fn tokens(&self) -> TPHashSet<T> {
        self.byte_tokens.iter().copied().collect()
    }

    fn span_pairs(&self) -> impl Iterator<Item = (Vec<u8>, T)> {
        self.byte_tokens
            .iter()
            .enumerate()
            .map(|(idx, &token)| (vec![idx as u8], token))
    }
}
