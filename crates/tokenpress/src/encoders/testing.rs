//! # Encoder Test Utilities

use std::sync::Arc;

use crate::{
    compat::traits::static_is_send_sync_check,
    decoders::{SlabIndexDecoder, TokenDecoder},
    encoders::TokenEncoder,
    models::patterns::CL100K_BASE_PATTERN,
    spanning::{TextSpanner, TextSpanningConfig},
    types::TokenType,
    vocab::{
        SpecialVocab,
        VocabIndex,
        Vocabulary,
        utility::testing::{build_test_rank_list, build_test_shift_byte_vocab},
    },
};

/// Build common test vocabulary for [`TokenEncoder`] tests.
///
/// The byte base is shifted by 10, and `<|HI|>` is the one special word,
/// placed just past the largest normal token.
pub fn common_encoder_test_vocab<T: TokenType>() -> Arc<Vocabulary<T>> {
    let rank_list = build_test_rank_list(&build_test_shift_byte_vocab::<T>(10));
    let hi_token = rank_list
        .iter()
        .map(|&(_, token)| token)
        .max()
        .unwrap()
        + T::one();

    let specials = SpecialVocab::try_from_words([("<|HI|>", hi_token)]).unwrap();
    Vocabulary::from_rank_list(rank_list, specials)
        .unwrap()
        .into()
}

/// Build a cl100k-pattern [`TextSpanner`] over the specials of `vocab`.
pub fn common_encoder_test_spanner<T: TokenType>(vocab: &Vocabulary<T>) -> Arc<TextSpanner<T>> {
    let config = TextSpanningConfig::from_pattern(CL100K_BASE_PATTERN)
        .with_specials(vocab.special_vocab().clone());
    TextSpanner::from_config(&config).unwrap().into()
}

/// Common [`TokenEncoder`] tests.
pub fn common_encoder_tests<T: TokenType, E: TokenEncoder<T> + Clone + 'static>(
    vocab: Arc<Vocabulary<T>>,
    encoder: &E,
) {
    static_is_send_sync_check(encoder);

    // Verify:
    // - clone
    // - Arc/dyn compat.
    let encoder: Arc<dyn TokenEncoder<T>> = Arc::new(encoder.clone());

    let byte = |b: u8| vocab.byte_vocab().get_token(b);
    let tok = |t: usize| T::from_usize(t).unwrap();

    let samples = vec![
        "hello world",
        "hello san francisco",
        "it's not the heat, it's the salt",
        "",
        "  \n\t\u{00e9}\u{4f60}\u{1f600}",
    ];

    let decoder = SlabIndexDecoder::from_vocab(vocab.clone());

    let token_batch = encoder.encode_batch(&samples);
    assert_eq!(encoder.count_batch(&samples), token_batch.iter().map(Vec::len).collect::<Vec<_>>());

    let decoded_strings = decoder
        .try_decode_batch_to_strings(&token_batch.iter().map(Vec::as_slice).collect::<Vec<_>>())
        .unwrap();
    assert_eq!(
        decoded_strings,
        samples.iter().map(|s| Some(s.to_string())).collect::<Vec<_>>()
    );

    // Whole words.
    assert_eq!(encoder.encode("hello world"), vec![tok(309), tok(319)]);

    // Merged: h e l l o f o r -> hello for.
    assert_eq!(encoder.encode("hellofor"), vec![tok(309), tok(315)]);

    // "o " is in the vocabulary, but never spans a chunk boundary.
    assert_eq!(
        encoder.encode("go world"),
        vec![byte(b'g'), byte(b'o'), tok(319)]
    );

    assert!(encoder.encode("").is_empty());
    assert_eq!(encoder.count(""), 0);

    // Specials.
    let hi_token = vocab.special_token_id("<|HI|>").unwrap();
    assert_eq!(hi_token, vocab.max_token().unwrap());

    assert_eq!(encoder.encode("<|HI|>"), vec![hi_token]);
    assert_eq!(
        encoder.encode("hello<|HI|> world"),
        vec![tok(309), hi_token, tok(319)]
    );
    assert_eq!(encoder.count("hello<|HI|> world"), 3);

    let ordinary = encoder.encode_ordinary("hello<|HI|> world");
    assert!(!ordinary.contains(&hi_token));
    assert_eq!(
        decoder.try_decode_to_string(&ordinary).unwrap().unwrap(),
        "hello<|HI|> world"
    );
}
