//! # Text Spanner

use core::ops::Range;

use crate::{
    compat::ranges::offset_range,
    errors::TPResult,
    regex::RegexWrapper,
    spanning::{SpecialMatcher, TextSpanningConfig},
    types::TokenType,
    vocab::size_hints::EXPECTED_BYTES_PER_TOKEN,
};

/// Span Label/Range Reference for [`TextSpanner`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpanRef<T: TokenType> {
    /// A word (chunk) matched by the split pattern.
    Word(Range<usize>),

    /// A special word, with its token.
    Special(Range<usize>, T),

    /// Text the split pattern did not cover.
    ///
    /// Encoded like a word, so that no byte is dropped.
    Gap(Range<usize>),
}

impl<T: TokenType> From<SpanRef<T>> for Range<usize> {
    fn from(span: SpanRef<T>) -> Self {
        match span {
            SpanRef::Word(range) => range,
            SpanRef::Special(range, _) => range,
            SpanRef::Gap(range) => range,
        }
    }
}

/// Text Spanner with Regex-based word splitting and special word matching.
///
/// Immutable and `Send + Sync`; one instance serves every thread.
#[derive(Debug, Clone)]
pub struct TextSpanner<T: TokenType> {
    /// Regex for splitting words.
    word_re: RegexWrapper,

    /// Matcher for special words.
    specials: Option<SpecialMatcher<T>>,
}

impl<T: TokenType> TextSpanner<T> {
    /// Build a new [`TextSpanner`] from a [`TextSpanningConfig`].
    ///
    /// ## Returns
    /// [`TokenpressError::InvalidPattern`](crate::TokenpressError::InvalidPattern)
    /// if the word pattern does not compile.
    pub fn from_config(config: &TextSpanningConfig<T>) -> TPResult<Self> {
        let word_re = config.pattern().compile()?;
        let specials = SpecialMatcher::from_special_vocab(config.specials())?;
        Ok(Self::new(word_re, specials))
    }

    /// Build a new [`TextSpanner`] from a compiled word regex.
    ///
    /// ## Arguments
    /// * `word_re` - The regex for word splitting.
    /// * `specials` - The optional special word matcher.
    pub fn new(
        word_re: RegexWrapper,
        specials: Option<SpecialMatcher<T>>,
    ) -> Self {
        Self { word_re, specials }
    }

    /// Get the word split regex.
    pub fn word_regex(&self) -> &RegexWrapper {
        &self.word_re
    }

    /// Get the optional special word matcher.
    pub fn special_matcher(&self) -> Option<&SpecialMatcher<T>> {
        self.specials.as_ref()
    }

    /// Iterate over all split [`SpanRef`]s in the text, recognizing special words.
    ///
    /// # Arguments
    /// * `text` - the text to split.
    /// * `f` - the function to apply to each span;
    ///   halts when the function returns `false`.
    ///
    /// Note: a span is consumed *only if* the function returns `true`.
    ///
    /// # Returns
    /// ``(completed, consumed)`` where:
    /// - `consumed` is the number of bytes covered by spans accepted by `f`;
    /// - `completed` is if all spans were accepted.
    pub fn for_each_split_span<F>(
        &self,
        text: &str,
        f: &mut F,
    ) -> (bool, usize)
    where
        F: FnMut(SpanRef<T>) -> bool,
    {
        let Some(specials) = &self.specials else {
            return self.for_each_word(text, 0, f);
        };

        let mut last = 0;
        for (range, token) in specials.find_iter(text) {
            let (cont, used) = self.for_each_word(&text[last..range.start], last, f);
            if !cont {
                return (false, last + used);
            }

            if !f(SpanRef::Special(range.clone(), token)) {
                // Special Exit
                return (false, range.start);
            }
            last = range.end;
        }

        let (cont, used) = self.for_each_word(&text[last..], last, f);
        (cont, last + used)
    }

    /// Iterate over all split [`SpanRef`]s in the text, treating special words
    /// as plain text.
    ///
    /// See [`Self::for_each_split_span`].
    pub fn for_each_ordinary_span<F>(
        &self,
        text: &str,
        f: &mut F,
    ) -> (bool, usize)
    where
        F: FnMut(SpanRef<T>) -> bool,
    {
        self.for_each_word(text, 0, f)
    }

    fn for_each_word<F>(
        &self,
        text: &str,
        offset: usize,
        f: &mut F,
    ) -> (bool, usize)
    where
        F: FnMut(SpanRef<T>) -> bool,
    {
        let mut last = 0;
        for range in self.word_re.find_iter(text) {
            let Range { start, end } = range;
            if start == end {
                continue;
            }

            if last < start {
                log::warn!(
                    "split pattern left bytes {}..{} unmatched; encoding them as one chunk",
                    offset + last,
                    offset + start
                );
                if !f(SpanRef::Gap(offset_range(last..start, offset))) {
                    // Leading Gap Exit
                    return (false, last);
                }
                last = start;
            }

            if !f(SpanRef::Word(offset_range(range, offset))) {
                // Word Exit
                return (false, last);
            }
            last = end;
        }

        if last < text.len() {
            log::warn!(
                "split pattern left bytes {}..{} unmatched; encoding them as one chunk",
                offset + last,
                offset + text.len()
            );
            if !f(SpanRef::Gap(offset_range(last..text.len(), offset))) {
                // Trailing Gap Exit
                return (false, last);
            }
            last = text.len();
        }

        (true, last)
    }

    /// Split text into spans, recognizing special words.
    pub fn split_spans(
        &self,
        text: &str,
    ) -> Vec<SpanRef<T>> {
        let capacity = text.len() as f32 / (EXPECTED_BYTES_PER_TOKEN * 0.8);
        let mut spans = Vec::with_capacity(capacity as usize);

        self.for_each_split_span(text, &mut |span_ref| {
            spans.push(span_ref);
            true
        });

        spans
    }
}
