//! # Common Decoder Unit Tests

use std::sync::Arc;

use crate::{
    compat::traits::static_is_send_sync_check,
    decoders::TokenDecoder,
    encoders::{
        SpanEncoderSelector,
        TokenEncoder,
        TokenSpanEncoder,
        testing::common_encoder_test_spanner,
    },
    errors::TokenpressError,
    types::TokenType,
    vocab::Vocabulary,
};

/// Common Unittest for [`TokenDecoder`] implementations.
///
/// Expects a vocabulary shaped like
/// [`common_encoder_test_vocab`](crate::encoders::testing::common_encoder_test_vocab).
pub fn common_decoder_unit_test<T: TokenType, D: TokenDecoder<T>>(
    vocab: Arc<Vocabulary<T>>,
    decoder: &D,
) {
    static_is_send_sync_check(decoder);

    let samples = vec![
        "hello world",
        "hello san francisco",
        "it's not the heat, it's the salt <|HI|>",
    ];

    let encoder = TokenSpanEncoder::new_with_selector(
        common_encoder_test_spanner(&vocab),
        vocab.clone(),
        SpanEncoderSelector::Reference,
    );

    let token_batch = encoder.encode_batch(&samples);
    let batch_view = token_batch.iter().map(Vec::as_slice).collect::<Vec<_>>();

    let decoded_strings = decoder.try_decode_batch_to_strings(&batch_view).unwrap();
    assert_eq!(
        decoded_strings,
        samples.iter().map(|s| Some(s.to_string())).collect::<Vec<_>>()
    );

    assert_eq!(
        decoder.try_decode_batch_to_bytes(&batch_view).unwrap(),
        samples
            .iter()
            .map(|s| s.as_bytes().to_vec())
            .collect::<Vec<_>>()
    );

    // Unknown: past the end, and a hole below the byte base.
    let past_end = T::from_usize(vocab.vocab_size()).unwrap();
    let mut tokens = encoder.encode("hello");
    tokens.push(past_end);
    match decoder.try_decode_to_bytes(&tokens) {
        Err(TokenpressError::UnknownToken { token }) => {
            assert_eq!(token, vocab.vocab_size() as u64)
        }
        other => panic!("expected UnknownToken, got {other:?}"),
    }
    assert!(decoder.try_decode_to_string(&[T::zero()]).is_err());
    let (empty, bad): (&[T], &[T]) = (&[], &[past_end]);
    assert!(decoder.try_decode_batch_to_strings(&[empty, bad]).is_err());

    // Invalid UTF-8 is not an error.
    let byte = |b: u8| vocab.byte_vocab().get_token(b);
    assert_eq!(decoder.try_decode_to_string(&[byte(0xff)]).unwrap(), None);
    assert_eq!(
        decoder
            .try_decode_to_string_lossy(&[byte(b'a'), byte(0xff)])
            .unwrap(),
        "a\u{fffd}"
    );

    // A split multibyte character.
    let e_acute = "\u{00e9}".as_bytes();
    assert_eq!(decoder.try_decode_to_string(&[byte(e_acute[0])]).unwrap(), None);
    assert_eq!(
        decoder
            .try_decode_to_string(&[byte(e_acute[0]), byte(e_acute[1])])
            .unwrap()
            .as_deref(),
        Some("\u{00e9}")
    );

    assert_eq!(decoder.try_decode_to_string(&[]).unwrap().as_deref(), Some(""));
}
