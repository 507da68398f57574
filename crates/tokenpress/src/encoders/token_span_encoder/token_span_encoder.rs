use std::sync::Arc;

use crate::{
    encoders::{
        TokenEncoder,
        token_span_encoder::SpanEncoderSelector,
    },
    spanning::{SpanRef, TextSpanner},
    types::TokenType,
    vocab::Vocabulary,
};

/// A [`TokenEncoder`] that composes a [`TextSpanner`] with a [`SpanEncoder`](crate::encoders::SpanEncoder).
///
/// Each call builds its own [`SpanEncoder`](crate::encoders::SpanEncoder) scratch state and drops it on
/// return; nothing is shared between calls but the immutable vocabulary
/// and spanner.
#[derive(Debug, Clone)]
pub struct TokenSpanEncoder<T>
where
    T: TokenType,
{
    /// The reference vocabulary.
    vocab: Arc<Vocabulary<T>>,

    /// Text Spanner.
    spanner: Arc<TextSpanner<T>>,

    selector: SpanEncoderSelector,
}

impl<T: TokenType> TokenSpanEncoder<T> {
    /// Create a new encoder using the selected [`SpanEncoder`](crate::encoders::SpanEncoder).
    ///
    /// ## Arguments
    /// * `spanner` - The text spanner; its specials must come from `vocab`.
    /// * `vocab` - The reference vocabulary.
    /// * `selector` - The [`SpanEncoder`](crate::encoders::SpanEncoder) policy.
    pub fn new_with_selector(
        spanner: Arc<TextSpanner<T>>,
        vocab: Arc<Vocabulary<T>>,
        selector: SpanEncoderSelector,
    ) -> Self {
        Self {
            vocab,
            spanner,
            selector,
        }
    }

    /// Get the [`SpanEncoder`](crate::encoders::SpanEncoder) policy.
    pub fn selector(&self) -> SpanEncoderSelector {
        self.selector
    }

    fn encode_spans<F>(
        &self,
        text: &str,
        ordinary: bool,
        tokens: &mut Vec<T>,
        mut per_span: F,
    ) where
        F: FnMut(&mut Vec<T>),
    {
        let mut se = self.selector.build_span_encoder::<T>();
        let mut f = |span_ref: SpanRef<T>| {
            se.encode_append_span_ref(&self.vocab, text, span_ref, tokens);
            per_span(tokens);
            true
        };

        if ordinary {
            self.spanner.for_each_ordinary_span(text, &mut f);
        } else {
            self.spanner.for_each_split_span(text, &mut f);
        }
    }
}

impl<T: TokenType> TokenEncoder<T> for TokenSpanEncoder<T> {
    fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }

    fn spanner(&self) -> &Arc<TextSpanner<T>> {
        &self.spanner
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, text, tokens))
    )]
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        self.encode_spans(text, false, tokens, |_| ());
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, text, tokens))
    )]
    fn encode_ordinary_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        self.encode_spans(text, true, tokens, |_| ());
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, text))
    )]
    fn count(
        &self,
        text: &str,
    ) -> usize {
        // Scratch holds one span at a time.
        let mut scratch = Vec::new();
        let mut count = 0;
        self.encode_spans(text, false, &mut scratch, |scratch| {
            count += scratch.len();
            scratch.clear();
        });
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        compat::traits::static_is_send_sync_check,
        encoders::testing::{common_encoder_test_spanner, common_encoder_test_vocab},
    };

    #[test]
    fn test_count_matches_encode() {
        type T = u32;
        let vocab = common_encoder_test_vocab::<T>();
        let encoder = TokenSpanEncoder::<T>::new_with_selector(
            common_encoder_test_spanner(&vocab),
            vocab,
            SpanEncoderSelector::Default,
        );
        static_is_send_sync_check(&encoder);
        assert_eq!(encoder.selector(), SpanEncoderSelector::Default);

        for text in [
            "",
            "hello world",
            "hello<|HI|>for all",
            "it's not the heat, it's the salt",
            "   \n\n\t",
        ] {
            assert_eq!(encoder.count(text), encoder.encode(text).len(), "{text:?}");
        }
    }

    #[test]
    fn test_encode_append_keeps_prefix() {
        type T = u32;
        let vocab = common_encoder_test_vocab::<T>();
        let encoder = TokenSpanEncoder::<T>::new_with_selector(
            common_encoder_test_spanner(&vocab),
            vocab,
            SpanEncoderSelector::Default,
        );

        let mut tokens = vec![1, 2, 3];
        encoder.encode_append("hello world", &mut tokens);
        assert_eq!(tokens, vec![1, 2, 3, 309, 319]);
    }
}
