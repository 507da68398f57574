//! # Pair Map ``{ (T, T) -> T }`` Merge Table

use crate::{
    errors::{TPResult, TokenpressError},
    types::{Pair, TPHashSet, TokenType},
    vocab::{ByteMapVocab, PairTokenMap},
};

/// Validate that a [`ByteMapVocab`] and [`PairTokenMap`] are compatible.
///
/// - for every ``(a, b) -> t`` entry:
///   - the parents ``(a, b)``:
///     - are either in the `byte_vocab`, or are targets in the map, not both.
///   - the target ``t`` is not in the `byte_vocab`.
///
/// ## Arguments
/// * `byte_vocab` - The byte vocabulary to validate against.
/// * `pairs` - The pair token map to validate.
pub fn try_validate_pair_map<T: TokenType>(
    byte_vocab: &ByteMapVocab<T>,
    pairs: &PairTokenMap<T>,
) -> TPResult<()> {
    let pair_targets: TPHashSet<T> = pairs.values().copied().collect();

    for t in &pair_targets {
        if let Some(b) = byte_vocab.get_byte(*t) {
            return Err(TokenpressError::VocabLoad(format!(
                "merge target {t} is also mapped to byte {b:#04x}"
            )));
        }
    }

    for (&pair, &t) in pairs.iter() {
        for pt in [pair.0, pair.1] {
            let is_pair_target = pair_targets.contains(&pt);
            let byte_target = byte_vocab.get_byte(pt);

            if is_pair_target && let Some(b) = byte_target {
                return Err(TokenpressError::VocabLoad(format!(
                    "pair {pair:?} -> {t} parent {pt} is both a merge target and byte {b:#04x}"
                )));
            }
            if !is_pair_target && byte_target.is_none() {
                return Err(TokenpressError::VocabLoad(format!(
                    "pair {pair:?} -> {t} parent {pt} is not defined"
                )));
            }
        }
    }

    Ok(())
}

/// Merge-rank table.
///
/// Following the `tiktoken` convention the rank of a mergeable pair
/// ``(a, b)`` is the token whose bytes are ``bytes(a) ++ bytes(b)``,
/// and that token is also the merge result. Lower ranks merge first.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct PairMapVocab<T: TokenType> {
    /// Map of ``{ (T, T) -> T }``.
    pairs: PairTokenMap<T>,
}

impl<T: TokenType> PairMapVocab<T> {
    /// Initialize a [`PairMapVocab`].
    ///
    /// ## Arguments
    /// * `byte_vocab` - The byte vocabulary the pairs are grounded in.
    /// * `pairs` - The pair token map.
    pub fn init(
        byte_vocab: &ByteMapVocab<T>,
        mut pairs: PairTokenMap<T>,
    ) -> TPResult<Self> {
        try_validate_pair_map(byte_vocab, &pairs)?;
        pairs.shrink_to_fit();
        Ok(Self { pairs })
    }

    /// Get the map of pairs.
    pub fn pairs(&self) -> &PairTokenMap<T> {
        &self.pairs
    }

    /// The number of mergeable pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Is the merge table empty?
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Looks up the merge result (which is also the rank) of a pair.
    #[inline(always)]
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.pairs.get(pair).copied()
    }
}
