//! # Tail Buffer Sweep [`SpanEncoder`].

use crate::{
    encoders::token_span_encoder::SpanEncoder,
    types::TokenType,
    vocab::Vocabulary,
};

/// A [`SpanEncoder`] which rescans for the best merge after every merge.
///
/// This encoder uses the token buffer tail as working memory:
/// it appends the byte tokens of the span, then repeatedly replaces the
/// lowest ranked (then leftmost) adjacent pair with its merge result.
///
/// Quadratic in the span length; kept as the reference for the faster encoders.
#[derive(Default, Debug, Clone)]
pub struct TailSweepSpanEncoder<T: TokenType> {
    marker: core::marker::PhantomData<T>,
}

impl<T: TokenType> SpanEncoder<T> for TailSweepSpanEncoder<T> {
    fn encode_append_compound_span(
        &mut self,
        vocab: &Vocabulary<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        let start = tokens.len();
        vocab.byte_vocab().append_tokens(span, tokens);

        let stop = start + 2;
        while tokens.len() >= stop {
            let Some((token, idx)) = tokens[start..]
                .windows(2)
                .enumerate()
                .filter_map(|(idx, w)| vocab.lookup_pair(&(w[0], w[1])).map(|token| (token, idx)))
                .min()
            else {
                break;
            };

            // tokens[idx..=idx+1] (a, b) -> tokens[idx] t
            let idx = start + idx;
            tokens[idx] = token;
            tokens.remove(idx + 1);
        }
    }
}
