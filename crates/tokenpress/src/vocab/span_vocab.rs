//! # Span Map ``{ Vec<u8> -> T }`` Token Vocabulary

use crate::{
    errors::{TPResult, TokenpressError},
    types::{TPHashSet, TokenType},
    vocab::{ByteMapVocab, PairMapVocab, PairTokenMap, SpanTokenMap, VocabIndex},
};

/// Validate that a [`ByteMapVocab`] and a [`SpanTokenMap`] agree on the byte base.
pub fn try_validate_span_map<T>(
    byte_vocab: &ByteMapVocab<T>,
    span_map: &SpanTokenMap<T>,
) -> TPResult<()>
where
    T: TokenType,
{
    for (span, token) in byte_vocab.span_pairs() {
        if let Some(&map_token) = span_map.get(&span)
            && token != map_token
        {
            return Err(TokenpressError::VocabLoad(format!(
                "byte table disagrees with span map for {:#04x}: {token} != {map_token}",
                span[0],
            )));
        }
    }

    Ok(())
}

/// Token vocabulary as a dictionary map of ``{ Vec<u8> -> T }``.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanMapVocab<T: TokenType> {
    /// The byte/token mapping table.
    byte_vocab: ByteMapVocab<T>,

    /// Map of ``{ Vec<u8> -> T }``; includes the 256 byte spans.
    span_map: SpanTokenMap<T>,
}

impl<T: TokenType> SpanMapVocab<T> {
    /// Build a [`SpanMapVocab`] from a [`SpanTokenMap`].
    ///
    /// The [`ByteMapVocab`] is read from the single-byte entries of the map,
    /// which must cover all 256 byte values.
    pub fn try_from_span_map(span_map: SpanTokenMap<T>) -> TPResult<Self> {
        let byte_vocab = ByteMapVocab::try_from_span_map(&span_map)?;
        Self::init(byte_vocab, span_map)
    }

    /// Initialize a [`SpanMapVocab`].
    ///
    /// The span map will be the union of the span map,
    /// and the byte spans from the `byte_vocab`.
    ///
    /// ## Arguments
    /// * `byte_vocab` - The byte vocabulary mapping.
    /// * `span_map` - The initial span to token mapping.
    pub fn init(
        byte_vocab: ByteMapVocab<T>,
        mut span_map: SpanTokenMap<T>,
    ) -> TPResult<Self> {
        try_validate_span_map(&byte_vocab, &span_map)?;

        span_map.extend(byte_vocab.span_pairs());
        span_map.shrink_to_fit();

        Ok(Self {
            byte_vocab,
            span_map,
        })
    }

    /// Get the byte/token mapping table.
    pub fn byte_vocab(&self) -> &ByteMapVocab<T> {
        &self.byte_vocab
    }

    /// Get the ``{ Vec<u8> -> T }`` map.
    pub fn span_map(&self) -> &SpanTokenMap<T> {
        &self.span_map
    }

    /// Iterate over the spans in the vocabulary.
    pub fn iter(&self) -> impl Iterator<Item = (&Vec<u8>, &T)> + '_ {
        self.span_map.iter()
    }

    /// Return the associated token for the span, if any.
    pub fn lookup_token(
        &self,
        span: &[u8],
    ) -> Option<T> {
        if span.len() == 1 {
            Some(self.byte_vocab.get_token(span[0]))
        } else {
            self.span_map.get(span).copied()
        }
    }

    /// Build the ``{ (T, T) -> T }`` merge table.
    ///
    /// Every split of every multi-byte span into two vocabulary spans
    /// becomes a pair entry; the merge result (and rank) is the span's token.
    ///
    /// ## Returns
    /// An error naming the first multi-byte token which has no such split.
    pub fn try_to_pair_vocab(&self) -> TPResult<PairMapVocab<T>> {
        let mut pairs = PairTokenMap::with_capacity(self.span_map.len() * 2);

        for (span, &token) in self.span_map.iter() {
            if span.len() < 2 {
                continue;
            }

            let mut found = false;
            for p in 1..span.len() {
                if let Some(a) = self.lookup_token(&span[..p])
                    && let Some(b) = self.lookup_token(&span[p..])
                {
                    pairs.insert((a, b), token);
                    found = true;
                }
            }

            if !found {
                return Err(TokenpressError::VocabLoad(format!(
                    "token {token} ({span:?}) has no split into two vocabulary entries"
                )));
            }
        }

        PairMapVocab::init(&self.byte_vocab, pairs)
    }
}

impl<T: TokenType> VocabIndex<T> for SpanMapVocab<T> {
    fn len(&self) -> usize {
        self.span_map.len()
    }

    fn tokens(&self) -> TPHashSet<T> {
        self.span_map.values().copied().collect()
    }

    fn span_pairs(&self) -> impl Iterator<Item = (Vec<u8>, T)> {
        self.span_map
            .iter()
            .map(|(span, &token)| (span.clone(), token))
    }
}
