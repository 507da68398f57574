//! # Buffer Size Hints

/// Expected bytes/token ratio for natural-language text.
///
/// Used to pre-size token and byte buffers.
pub const EXPECTED_BYTES_PER_TOKEN: f32 = 4.0;

/// Predict a token buffer capacity for `text_len` bytes of input.
pub fn predicted_token_capacity(text_len: usize) -> usize {
    (text_len as f32 / (EXPECTED_BYTES_PER_TOKEN * 0.5)) as usize
}

/// Predict a byte buffer capacity for `token_count` tokens.
pub fn predicted_byte_capacity(token_count: usize) -> usize {
    (token_count as f32 * 1.1 * EXPECTED_BYTES_PER_TOKEN) as usize
}
