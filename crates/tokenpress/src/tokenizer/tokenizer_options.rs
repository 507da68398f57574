use std::sync::Arc;

use crate::{
    decoders::{SlabIndexDecoder, TokenDecoder},
    encoders::{SpanEncoderSelector, TokenEncoder, TokenSpanEncoder},
    models::ModelDefinition,
    tokenizer::Tokenizer,
};

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// The BPE merge implementation.
    pub span_encoder: SpanEncoderSelector,

    /// Run batch calls across threads.
    ///
    /// A request; without the `rayon` feature batches run sequentially.
    pub parallel: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            span_encoder: SpanEncoderSelector::Default,
            parallel: true,
        }
    }
}

impl TokenizerOptions {
    /// Sets the BPE merge implementation.
    pub fn with_span_encoder(
        mut self,
        span_encoder: SpanEncoderSelector,
    ) -> Self {
        self.span_encoder = span_encoder;
        self
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded batch implementations.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build a [`Tokenizer`] for the given model definition.
    pub fn build(
        &self,
        definition: Arc<ModelDefinition>,
    ) -> Tokenizer {
        let encoder = TokenSpanEncoder::new_with_selector(
            definition.spanner().clone(),
            definition.vocab().clone(),
            self.span_encoder,
        );
        let decoder = SlabIndexDecoder::from_vocab(definition.vocab().clone());

        #[cfg(feature = "rayon")]
        if self.parallel {
            use crate::rayon::{ParallelRayonDecoder, ParallelRayonEncoder};
            return Tokenizer::new(
                definition,
                Arc::new(ParallelRayonEncoder::new(encoder)),
                Arc::new(ParallelRayonDecoder::new(decoder)),
            );
        }

        let encoder: Arc<dyn TokenEncoder<u32>> = Arc::new(encoder);
        let decoder: Arc<dyn TokenDecoder<u32>> = Arc::new(decoder);
        Tokenizer::new(definition, encoder, decoder)
    }
}
