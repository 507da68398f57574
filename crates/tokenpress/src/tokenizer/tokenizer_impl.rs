use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    encoders::TokenEncoder,
    errors::TPResult,
    models::{ModelDefinition, ModelId, VocabLoader},
    tokenizer::TokenizerOptions,
    vocab::Vocabulary,
};

/// Unified Tokenizer.
///
/// Combines:
///  * a [`ModelDefinition`],
///  * a [`TokenEncoder`], and
///  * a [`TokenDecoder`].
///
/// Immutable, `Send + Sync`, and cheap to clone; build once and share.
///
/// ## Style Hints
///
/// Instance names should prefer `tokenizer`.
#[derive(Clone)]
pub struct Tokenizer {
    definition: Arc<ModelDefinition>,
    encoder: Arc<dyn TokenEncoder<u32>>,
    decoder: Arc<dyn TokenDecoder<u32>>,
}

impl core::fmt::Debug for Tokenizer {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("model", &self.model())
            .field("vocab_size", &self.vocab_size())
            .finish()
    }
}

impl Tokenizer {
    /// Create a tokenizer for a named model.
    ///
    /// Each call loads and builds a fresh vocabulary. To share one vocabulary
    /// between tokenizers of the same model, build them through a
    /// [`ModelRegistry`](crate::ModelRegistry) instead.
    ///
    /// ## Arguments
    /// * `name` - One of `cl100k_base`, `o200k_base`, `voyage3_base`.
    /// * `loader` - The source of the model's rank list.
    ///
    /// ## Returns
    /// [`TokenpressError::UnknownModel`](crate::TokenpressError::UnknownModel)
    /// for other names; [`TokenpressError::VocabLoad`](crate::TokenpressError::VocabLoad)
    /// if the rank list cannot be loaded or is inconsistent.
    pub fn create(
        name: &str,
        loader: &dyn VocabLoader,
    ) -> TPResult<Self> {
        let id = ModelId::try_from_name(name)?;
        let definition = ModelDefinition::build(id, loader.load_rank_list(id)?)?;
        Ok(Self::from_definition(Arc::new(definition)))
    }

    /// Create a tokenizer with default options.
    pub fn from_definition(definition: Arc<ModelDefinition>) -> Self {
        TokenizerOptions::default().build(definition)
    }

    /// Create a tokenizer with the given options.
    pub fn with_options(
        definition: Arc<ModelDefinition>,
        options: TokenizerOptions,
    ) -> Self {
        options.build(definition)
    }

    /// Assemble a tokenizer from parts.
    ///
    /// The encoder and decoder must be built over `definition.vocab()`.
    pub fn new(
        definition: Arc<ModelDefinition>,
        encoder: Arc<dyn TokenEncoder<u32>>,
        decoder: Arc<dyn TokenDecoder<u32>>,
    ) -> Self {
        Self {
            definition,
            encoder,
            decoder,
        }
    }

    /// Encode text, recognizing special tokens.
    ///
    /// ## Returns
    /// The token sequence; empty for empty text.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text), fields(len = text.len())))]
    pub fn encode(
        &self,
        text: &str,
    ) -> Vec<u32> {
        self.encoder.encode(text)
    }

    /// Encode text, treating special token literals as plain text.
    pub fn encode_ordinary(
        &self,
        text: &str,
    ) -> Vec<u32> {
        self.encoder.encode_ordinary(text)
    }

    /// Count the tokens of [`Self::encode`], without building them.
    pub fn count(
        &self,
        text: &str,
    ) -> usize {
        self.encoder.count(text)
    }

    /// Decode tokens into text.
    ///
    /// ## Returns
    /// * `Err(UnknownToken)` for an out-of-range or unassigned token;
    /// * `Ok(None)` when the bytes are not valid UTF-8;
    /// * `Ok(Some(text))` otherwise.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens), fields(len = tokens.len())))]
    pub fn decode(
        &self,
        tokens: &[u32],
    ) -> TPResult<Option<String>> {
        self.decoder.try_decode_to_string(tokens)
    }

    /// Decode tokens into bytes.
    pub fn decode_bytes(
        &self,
        tokens: &[u32],
    ) -> TPResult<Vec<u8>> {
        self.decoder.try_decode_to_bytes(tokens)
    }

    /// Encode a batch of texts; see [`Self::encode`].
    pub fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<u32>> {
        self.encoder.encode_batch(batch)
    }

    /// Decode a batch of token sequences; see [`Self::decode`].
    ///
    /// Fails if any sequence holds an unknown token.
    pub fn decode_batch(
        &self,
        batch: &[&[u32]],
    ) -> TPResult<Vec<Option<String>>> {
        self.decoder.try_decode_batch_to_strings(batch)
    }

    /// Count the tokens of a batch of texts; see [`Self::count`].
    pub fn count_batch(
        &self,
        batch: &[&str],
    ) -> Vec<usize> {
        self.encoder.count_batch(batch)
    }

    /// The model identifier.
    pub fn model(&self) -> ModelId {
        self.definition.id()
    }

    /// One more than the largest assigned token.
    pub fn vocab_size(&self) -> usize {
        self.definition.vocab().vocab_size()
    }

    /// The shared vocabulary.
    pub fn vocabulary(&self) -> &Arc<Vocabulary<u32>> {
        self.definition.vocab()
    }

    /// The model definition.
    pub fn definition(&self) -> &Arc<ModelDefinition> {
        &self.definition
    }

    /// Get the underlying encoder.
    pub fn encoder(&self) -> &Arc<dyn TokenEncoder<u32>> {
        &self.encoder
    }

    /// Get the underlying decoder.
    pub fn decoder(&self) -> &Arc<dyn TokenDecoder<u32>> {
        &self.decoder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        compat::traits::static_is_send_sync_check,
        encoders::SpanEncoderSelector,
        errors::TokenpressError,
        vocab::{
            RankList,
            utility::testing::{build_test_rank_list, build_test_shift_byte_vocab},
        },
    };

    fn test_definition() -> Arc<ModelDefinition> {
        let config = ModelId::Cl100kBase
            .spanning_config()
            .unwrap()
            .with_specials(Default::default())
            .try_with_special_words([("<|end|>", 500_u32), ("<|end|><|end|>", 501)])
            .unwrap();
        let rank_list = build_test_rank_list(&build_test_shift_byte_vocab(0));
        ModelDefinition::from_parts(ModelId::Cl100kBase, config, rank_list)
            .unwrap()
            .into()
    }

    fn all_tokenizers() -> Vec<Tokenizer> {
        let definition = test_definition();
        let mut tokenizers = Vec::new();
        for span_encoder in [SpanEncoderSelector::Default, SpanEncoderSelector::Reference] {
            for parallel in [false, true] {
                let options = TokenizerOptions::default()
                    .with_span_encoder(span_encoder)
                    .with_parallel(parallel);
                tokenizers.push(Tokenizer::with_options(definition.clone(), options));
            }
        }
        tokenizers
    }

    #[test]
    fn test_create() {
        let loader = |_: ModelId| -> TPResult<RankList<u32>> {
            Ok(build_test_rank_list(&build_test_shift_byte_vocab(0)))
        };

        let tokenizer = Tokenizer::create("voyage3_base", &loader).unwrap();
        static_is_send_sync_check(&tokenizer);
        assert_eq!(tokenizer.model(), ModelId::Voyage3Base);
        assert_eq!(tokenizer.vocab_size(), 320);
        assert!(format!("{tokenizer:?}").contains("Voyage3Base"));

        assert!(matches!(
            Tokenizer::create("p50k_base", &loader),
            Err(TokenpressError::UnknownModel { .. })
        ));

        // Specials sit far above the test vocabulary.
        assert!(Tokenizer::create("cl100k_base", &loader).is_ok());
    }

    #[test]
    fn test_create_vs_registry_sharing() {
        let loader = |_: ModelId| -> TPResult<RankList<u32>> {
            Ok(build_test_rank_list(&build_test_shift_byte_vocab(0)))
        };

        let a = Tokenizer::create("voyage3_base", &loader).unwrap();
        let b = Tokenizer::create("voyage3_base", &loader).unwrap();
        assert!(!Arc::ptr_eq(a.vocabulary(), b.vocabulary()));

        let registry = crate::ModelRegistry::new(loader);
        let a = registry.tokenizer("voyage3_base").unwrap();
        let b = registry.tokenizer("voyage3_base").unwrap();
        assert!(Arc::ptr_eq(a.vocabulary(), b.vocabulary()));
        assert_eq!(a.encode("hello world"), b.encode("hello world"));
    }

    #[test]
    fn test_encode_decode() {
        for tokenizer in all_tokenizers() {
            assert_eq!(tokenizer.encode("hello world"), vec![309, 319]);
            assert_eq!(tokenizer.count("hello world"), 2);
            assert!(tokenizer.encode("").is_empty());
            assert_eq!(tokenizer.decode(&[]).unwrap().as_deref(), Some(""));

            let text = "the world, all for one. \u{1f600}";
            let tokens = tokenizer.encode(text);
            assert_eq!(tokenizer.decode(&tokens).unwrap().as_deref(), Some(text));
            assert_eq!(tokenizer.decode_bytes(&tokens).unwrap(), text.as_bytes());
            assert_eq!(tokenizer.count(text), tokens.len());
        }
    }

    #[test]
    fn test_specials() {
        for tokenizer in all_tokenizers() {
            // Longest literal wins at a position.
            assert_eq!(tokenizer.encode("<|end|><|end|>"), vec![501]);
            assert_eq!(tokenizer.encode("<|end|><|end|><|end|>"), vec![501, 500]);
            assert_eq!(tokenizer.encode("hello<|end|>"), vec![309, 500]);

            let ordinary = tokenizer.encode_ordinary("hello<|end|>");
            assert!(!ordinary.contains(&500));
            assert_eq!(
                tokenizer.decode(&ordinary).unwrap().as_deref(),
                Some("hello<|end|>")
            );

            assert_eq!(
                tokenizer.decode(&[500]).unwrap().as_deref(),
                Some("<|end|>")
            );
        }
    }

    #[test]
    fn test_decode_errors() {
        for tokenizer in all_tokenizers() {
            let vocab_size = tokenizer.vocab_size() as u32;
            assert_eq!(vocab_size, 502);

            assert!(matches!(
                tokenizer.decode(&[309, vocab_size]),
                Err(TokenpressError::UnknownToken { token }) if token == vocab_size as u64
            ));
            // Unassigned, in range.
            assert!(tokenizer.decode(&[400]).is_err());

            assert_eq!(tokenizer.decode(&[0xff]).unwrap(), None);
        }
    }

    #[test]
    fn test_batches() {
        let batch = ["hello world", "", "for all<|end|>", "  \n\n"];
        for tokenizer in all_tokenizers() {
            let token_batch = tokenizer.encode_batch(&batch);
            assert_eq!(
                token_batch,
                batch.iter().map(|t| tokenizer.encode(t)).collect::<Vec<_>>()
            );
            assert_eq!(
                tokenizer.count_batch(&batch),
                token_batch.iter().map(Vec::len).collect::<Vec<_>>()
            );

            let views = token_batch.iter().map(Vec::as_slice).collect::<Vec<_>>();
            assert_eq!(
                tokenizer.decode_batch(&views).unwrap(),
                batch.iter().map(|t| Some(t.to_string())).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let tokenizer = Tokenizer::from_definition(test_definition());
        let text = "hello world, the ate all for one";
        let expected = tokenizer.encode(text);

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..16 {
                        assert_eq!(tokenizer.encode(text), expected);
                        assert_eq!(tokenizer.count(text), expected.len());
                    }
                });
            }
        });

        assert!(Arc::ptr_eq(tokenizer.encoder().vocab(), tokenizer.vocabulary()));
        let _ = tokenizer.decoder();
        assert_eq!(tokenizer.definition().id(), ModelId::Cl100kBase);
    }
}
