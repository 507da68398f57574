//! # Vocabulary
//!
//! The immutable per-model token table: bytes ⇄ tokens, merge ranks,
//! and special words.

use std::collections::hash_map::Entry;

use crate::{
    errors::{TPResult, TokenpressError},
    types::{Pair, TPHashSet, TokenType},
    vocab::{
        ByteMapVocab,
        PairMapVocab,
        RankList,
        SpanMapVocab,
        SpanTokenMap,
        SpecialVocab,
        TokenSlab,
        VocabIndex,
    },
};

/// Read a [`RankList`] into a [`SpanTokenMap`], rejecting malformed entries.
///
/// ## Returns
/// An error if an entry is empty, or if two entries share a token or a byte sequence.
pub fn try_span_map_from_rank_list<T: TokenType>(
    rank_list: RankList<T>
) -> TPResult<SpanTokenMap<T>> {
    let mut span_map: SpanTokenMap<T> = SpanTokenMap::with_capacity(rank_list.len());
    let mut seen: TPHashSet<T> = TPHashSet::with_capacity(rank_list.len());

    for (span, token) in rank_list {
        if span.is_empty() {
            return Err(TokenpressError::VocabLoad(format!(
                "token {token} has an empty byte sequence"
            )));
        }
        if !seen.insert(token) {
            return Err(TokenpressError::VocabLoad(format!(
                "duplicate rank {token}"
            )));
        }
        match span_map.entry(span) {
            Entry::Occupied(entry) => {
                return Err(TokenpressError::VocabLoad(format!(
                    "tokens {} and {token} share the byte sequence {:?}",
                    entry.get(),
                    entry.key(),
                )));
            }
            Entry::Vacant(entry) => {
                entry.insert(token);
            }
        }
    }

    Ok(span_map)
}

/// Validate that no special token collides with a normal token.
pub fn try_validate_specials<T: TokenType>(
    normal_tokens: &TPHashSet<T>,
    special_vocab: &SpecialVocab<T>,
) -> TPResult<()> {
    for (span, token) in special_vocab.span_pairs() {
        if normal_tokens.contains(&token) {
            return Err(TokenpressError::VocabLoad(format!(
                "special token {token} ({:?}) collides with a normal token",
                String::from_utf8_lossy(&span),
            )));
        }
    }
    Ok(())
}

/// Token Vocabulary.
///
/// Contains:
/// * `span_vocab` - a [`SpanMapVocab`] ``{ Vec<u8> -> T }`` vocabulary,
/// * `pair_vocab` - a [`PairMapVocab`] ``{ (T, T) -> T }`` merge table,
/// * `special_vocab` - a [`SpecialVocab`] of verbatim special words,
/// * `slab` - a [`TokenSlab`] dense decode index over normal and special tokens.
///
/// Read-only after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Vocabulary<T: TokenType> {
    span_vocab: SpanMapVocab<T>,
    pair_vocab: PairMapVocab<T>,
    special_vocab: SpecialVocab<T>,
    slab: TokenSlab<T>,
}

impl<T: TokenType> Vocabulary<T> {
    /// Build a [`Vocabulary`] from a [`RankList`] and special words.
    ///
    /// ## Arguments
    /// * `rank_list` - the ``(bytes, token)`` entries of the normal vocabulary.
    /// * `special_vocab` - the special words.
    ///
    /// ## Returns
    /// [`TokenpressError::VocabLoad`] when the entries are inconsistent:
    /// duplicate tokens or byte sequences, empty entries, a missing
    /// single-byte entry, a multi-byte entry with no split into two
    /// entries, or a special token colliding with a normal token.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(rank_list, special_vocab), fields(entries = rank_list.len()))
    )]
    pub fn from_rank_list(
        rank_list: RankList<T>,
        special_vocab: SpecialVocab<T>,
    ) -> TPResult<Self> {
        let span_map = try_span_map_from_rank_list(rank_list)?;
        Self::from_span_vocab(SpanMapVocab::try_from_span_map(span_map)?, special_vocab)
    }

    /// Build a [`Vocabulary`] from a [`SpanMapVocab`] and special words.
    pub fn from_span_vocab(
        span_vocab: SpanMapVocab<T>,
        special_vocab: SpecialVocab<T>,
    ) -> TPResult<Self> {
        try_validate_specials(&span_vocab.tokens(), &special_vocab)?;

        let pair_vocab = span_vocab.try_to_pair_vocab()?;

        let slab = TokenSlab::try_from_token_spans(
            span_vocab
                .iter()
                .chain(special_vocab.span_map().iter())
                .map(|(span, &token)| (token, span.as_slice())),
        )?;

        log::debug!(
            "validated vocabulary: {} spans, {} pairs, {} specials, size {}",
            span_vocab.len(),
            pair_vocab.len(),
            special_vocab.len(),
            slab.len(),
        );

        Ok(Self {
            span_vocab,
            pair_vocab,
            special_vocab,
            slab,
        })
    }

    /// Get the span vocabulary.
    pub fn span_vocab(&self) -> &SpanMapVocab<T> {
        &self.span_vocab
    }

    /// Get the byte vocabulary.
    pub fn byte_vocab(&self) -> &ByteMapVocab<T> {
        self.span_vocab.byte_vocab()
    }

    /// Get the merge table.
    pub fn pair_vocab(&self) -> &PairMapVocab<T> {
        &self.pair_vocab
    }

    /// Get the special vocabulary.
    pub fn special_vocab(&self) -> &SpecialVocab<T> {
        &self.special_vocab
    }

    /// Get the dense decode index.
    pub fn slab(&self) -> &TokenSlab<T> {
        &self.slab
    }

    /// One more than the largest assigned token, normal or special.
    ///
    /// Ids below this may still be unassigned.
    pub fn vocab_size(&self) -> usize {
        self.slab.len()
    }

    /// The byte sequence of a normal or special token.
    ///
    /// ## Returns
    /// [`TokenpressError::UnknownToken`] if the token is out of range or unassigned.
    pub fn byte_sequence_of(
        &self,
        token: T,
    ) -> TPResult<&[u8]> {
        self.slab
            .lookup_span(&token)
            .ok_or_else(|| TokenpressError::unknown_token(token))
    }

    /// The merge rank of an adjacent pair, if the pair is mergeable.
    pub fn rank_of(
        &self,
        a: T,
        b: T,
    ) -> Option<T> {
        self.pair_vocab.lookup_pair(&(a, b))
    }

    /// The token of a special word, if registered.
    pub fn special_token_id(
        &self,
        literal: &str,
    ) -> Option<T> {
        self.special_vocab.lookup_token(literal.as_bytes())
    }

    /// Return the normal token for a whole span, if any.
    #[inline]
    pub fn lookup_token(
        &self,
        span: &[u8],
    ) -> Option<T> {
        self.span_vocab.lookup_token(span)
    }

    /// Return the merge result for a pair, if any.
    #[inline]
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.pair_vocab.lookup_pair(pair)
    }
}

impl<T: TokenType> VocabIndex<T> for Vocabulary<T> {
    fn len(&self) -> usize {
        self.span_vocab.len() + self.special_vocab.len()
    }

    fn tokens(&self) -> TPHashSet<T> {
        let mut tokens = self.span_vocab.tokens();
        tokens.extend(self.special_vocab.tokens());
        tokens
    }

    fn span_pairs(&self) -> impl Iterator<Item = (Vec<u8>, T)> {
        self.span_vocab
            .span_pairs()
            .chain(self.special_vocab.span_pairs())
    }
}
