//! # Dense Token Slab

use core::marker::PhantomData;

use crate::{
    errors::{TPResult, TokenpressError},
    types::TokenType,
};

/// The most unassigned ids a [`TokenSlab`] will hold slots for.
///
/// Published vocabularies leave a handful of ids unassigned; anything
/// sparser is rejected rather than allocated.
pub const MAX_UNASSIGNED_SLOTS: usize = 1 << 20;

/// A dense ``{ T -> &[u8] }`` index into one shared byte slab.
///
/// The index has one slot per id in ``0..=max_token``; unassigned ids
/// have an empty range and resolve to `None`.
#[derive(Clone, PartialEq)]
pub struct TokenSlab<T: TokenType> {
    index: Vec<(usize, usize)>,
    slab: Vec<u8>,
    _marker: PhantomData<T>,
}

impl<T: TokenType> core::fmt::Debug for TokenSlab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("TokenSlab")
            .field("slots", &self.index.len())
            .field("bytes", &self.slab.len())
            .finish()
    }
}

impl<T: TokenType> TokenSlab<T> {
    /// Build a slab from ``(token, span)`` entries.
    ///
    /// ## Returns
    /// [`TokenpressError::VocabLoad`] if a span is empty, a token is assigned
    /// twice, or the ids leave more than [`MAX_UNASSIGNED_SLOTS`] holes.
    pub fn try_from_token_spans<'a, I>(token_spans: I) -> TPResult<Self>
    where
        I: IntoIterator<Item = (T, &'a [u8])>,
    {
        let mut entries: Vec<(usize, &'a [u8])> = Vec::new();
        for (token, span) in token_spans {
            let idx = token
                .to_usize()
                .ok_or_else(|| TokenpressError::unknown_token(token))?;
            if span.is_empty() {
                return Err(TokenpressError::VocabLoad(format!(
                    "token {token} has an empty byte sequence"
                )));
            }
            entries.push((idx, span));
        }
        entries.sort_unstable_by_key(|&(idx, _)| idx);

        let unassigned = entries
            .last()
            .map_or(0, |&(idx, _)| idx.saturating_sub(entries.len() - 1));
        if unassigned > MAX_UNASSIGNED_SLOTS {
            return Err(TokenpressError::VocabLoad(format!(
                "{} ids span {unassigned} unassigned slots; at most {MAX_UNASSIGNED_SLOTS} allowed",
                entries.len()
            )));
        }

        let slots = entries.last().map_or(0, |&(idx, _)| idx + 1);
        let mut index = vec![(0, 0); slots];
        let mut slab = Vec::with_capacity(entries.iter().map(|(_, span)| span.len()).sum());

        for (idx, span) in entries {
            if index[idx] != (0, 0) {
                return Err(TokenpressError::VocabLoad(format!(
                    "token {idx} is assigned more than once"
                )));
            }
            index[idx] = (slab.len(), slab.len() + span.len());
            slab.extend_from_slice(span);
        }

        Ok(Self {
            index,
            slab,
            _marker: PhantomData,
        })
    }

    /// The number of slots; one more than the largest assigned token.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Is the slab empty?
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Total bytes held by the slab.
    pub fn total_bytes(&self) -> usize {
        self.slab.len()
    }

    /// Lookup a token.
    ///
    /// ## Returns
    /// `None` when the token is out of range or unassigned.
    #[inline]
    pub fn lookup_span(
        &self,
        token: &T,
    ) -> Option<&[u8]> {
        let &(start, end) = self.index.get(token.to_usize()?)?;
        if end > start {
            Some(&self.slab[start..end])
        } else {
            None
        }
    }
}
