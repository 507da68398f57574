#![allow(missing_docs)]
//! Agreement with `tiktoken` on the published vocabularies.
//!
//! The rank lists are rebuilt from the data embedded in `tiktoken-rs`.

mod common;

use common::{CL100K, O200K, Reference, SAMPLES};
use tokenpress::{ModelId, TokenpressError, Tokenizer, TokenizerOptions, encoders::SpanEncoderSelector};

fn check_encode(
    reference: &Reference,
    text: &str,
) {
    let model = reference.tokenizer.model();
    let expected: Vec<u32> = reference
        .bpe
        .encode_with_special_tokens(text)
        .into_iter()
        .map(|t| t as u32)
        .collect();

    let tokens = reference.tokenizer.encode(text);
    assert_eq!(tokens, expected, "Encode mismatch for {model:?}: {text:?}");
    assert_eq!(
        reference.tokenizer.count(text),
        expected.len(),
        "Count mismatch for {model:?}: {text:?}"
    );
    assert_eq!(
        reference.tokenizer.decode(&tokens).unwrap().as_deref(),
        Some(text),
        "Decode mismatch for {model:?}: {text:?}"
    );
}

fn check_encode_ordinary(
    reference: &Reference,
    text: &str,
) {
    let model = reference.tokenizer.model();
    let expected: Vec<u32> = reference
        .bpe
        .encode_ordinary(text)
        .into_iter()
        .map(|t| t as u32)
        .collect();

    assert_eq!(
        reference.tokenizer.encode_ordinary(text),
        expected,
        "Ordinary encode mismatch for {model:?}: {text:?}"
    );
}

fn check_samples(reference: &Reference) {
    for text in SAMPLES {
        check_encode(reference, text);
        check_encode_ordinary(reference, text);
    }

    let token_batch = reference.tokenizer.encode_batch(SAMPLES);
    let views = token_batch.iter().map(Vec::as_slice).collect::<Vec<_>>();
    let decoded = reference.tokenizer.decode_batch(&views).unwrap();
    for (text, decoded) in SAMPLES.iter().zip(decoded) {
        assert_eq!(decoded.as_deref(), Some(*text));
    }
}

#[test]
fn test_cl100k_samples() {
    check_samples(&CL100K);
}

#[test]
fn test_o200k_samples() {
    check_samples(&O200K);
}

#[test]
fn test_known_ids() {
    assert_eq!(CL100K.tokenizer.encode("hello world"), vec![15339, 1917]);
    assert_eq!(CL100K.tokenizer.encode("<|endoftext|>"), vec![100257]);
    assert_eq!(CL100K.tokenizer.encode("<|endofprompt|>"), vec![100276]);
    assert_eq!(O200K.tokenizer.encode("<|endoftext|>"), vec![199999]);
    assert_eq!(O200K.tokenizer.encode("<|endofprompt|>"), vec![200018]);

    assert_eq!(CL100K.tokenizer.vocab_size(), 100277);
    assert_eq!(O200K.tokenizer.vocab_size(), 200019);
}

#[test]
fn test_specials() {
    let texts = [
        "hello <|endoftext|> world",
        "<|endoftext|><|endoftext|>",
        "<|fim_prefix|>def f():<|fim_suffix|>\n    return 1<|fim_middle|>",
        "prompt<|endofprompt|>",
        "<|endoftext",
        "<|im_start|>user",
    ];
    for text in texts {
        check_encode(&CL100K, text);
        check_encode_ordinary(&CL100K, text);
    }
    for text in ["hello <|endoftext|> world", "prompt<|endofprompt|>"] {
        check_encode(&O200K, text);
        check_encode_ordinary(&O200K, text);
    }

    let ordinary = CL100K.tokenizer.encode_ordinary("<|endoftext|>");
    assert!(ordinary.len() > 1);
    assert!(!ordinary.contains(&100257));
}

#[test]
fn test_repeated_characters() {
    let text = "a".repeat(37);
    let tokens = CL100K.tokenizer.encode(&text);
    assert!(tokens.len() < text.len());
    check_encode(&CL100K, &text);

    let text = " ".repeat(1000) + &"9".repeat(1000) + &"x".repeat(1000);
    check_encode(&CL100K, &text);
    check_encode(&O200K, &text);
}

#[test]
fn test_reference_merger_agrees() {
    let tokenizer = Tokenizer::with_options(
        CL100K.definition.clone(),
        TokenizerOptions::default()
            .with_span_encoder(SpanEncoderSelector::Reference)
            .with_parallel(false),
    );
    for text in SAMPLES {
        assert_eq!(
            tokenizer.encode(text),
            CL100K.tokenizer.encode(text),
            "Merger mismatch: {text:?}"
        );
    }
}

#[test]
fn test_decode_errors() {
    let tokenizer = &CL100K.tokenizer;
    let vocab_size = tokenizer.vocab_size() as u32;

    assert!(matches!(
        tokenizer.decode(&[15339, vocab_size]),
        Err(TokenpressError::UnknownToken { token }) if token == vocab_size as u64
    ));
    // Unassigned gap below the specials.
    assert!(matches!(
        tokenizer.decode(&[100256]),
        Err(TokenpressError::UnknownToken { token: 100256 })
    ));

    // A lone continuation byte.
    let byte_token = tokenizer.vocabulary().byte_vocab().get_token(0x80);
    assert_eq!(tokenizer.decode(&[byte_token]).unwrap(), None);
    assert_eq!(tokenizer.decode_bytes(&[byte_token]).unwrap(), vec![0x80]);
}

#[test]
fn test_rank_list_shape() {
    // Every byte and every merge in the data is reachable.
    assert_eq!(
        CL100K.definition.vocab().span_vocab().span_map().len(),
        CL100K.rank_list.len()
    );
    // Every id below the specials, less the one unassigned id.
    assert_eq!(CL100K.rank_list.len(), 100256);
    assert_eq!(O200K.rank_list.len(), 199998);
    assert_eq!(CL100K.definition.id(), ModelId::Cl100kBase);
    assert_eq!(O200K.definition.id(), ModelId::O200kBase);
}
