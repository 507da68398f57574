use crate::{spanning::SpanRef, types::TokenType, vocab::Vocabulary};

/// A trait for encoding text spans into tokens.
///
/// Implementations may keep scratch buffers between spans,
/// but never state that changes the output.
pub trait SpanEncoder<T: TokenType>: Send {
    /// Encodes a span which is not a single vocabulary entry,
    /// by BPE merging from its byte tokens.
    ///
    /// ## Arguments
    /// * `vocab` - The reference vocabulary.
    /// * `span` - The byte span.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_compound_span(
        &mut self,
        vocab: &Vocabulary<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    );

    /// Encodes a single [`SpanRef`].
    ///
    /// ## Arguments
    /// * `vocab` - The reference vocabulary.
    /// * `text` - The source slice.
    /// * `span_ref` - The labeling and sub-slicing of a span in `text`.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_span_ref(
        &mut self,
        vocab: &Vocabulary<T>,
        text: &str,
        span_ref: SpanRef<T>,
        tokens: &mut Vec<T>,
    ) {
        match span_ref {
            SpanRef::Word(range) | SpanRef::Gap(range) => {
                let span = &text.as_bytes()[range];
                if let Some(token) = vocab.lookup_token(span) {
                    // Whole-span hit; some entries are unreachable by merging.
                    tokens.push(token);
                } else {
                    self.encode_append_compound_span(vocab, span, tokens);
                }
            }
            SpanRef::Special(_, token) => tokens.push(token),
        }
    }
}
