//! # Word Split Patterns
//!
//! The pre-tokenization patterns of the built-in models.
//! All use look-around or possessive quantifiers, so all are `Fancy`.

use crate::{join_patterns, regex::ConstRegexWrapperPattern};

/// The "`cl100k_base`" word pattern.
pub const CL100K_BASE_PATTERN: ConstRegexWrapperPattern =
    ConstRegexWrapperPattern::Fancy(join_patterns!(
        r"'(?i:[sdmt]|ll|ve|re)",
        r"[^\r\n\p{L}\p{N}]?+\p{L}++",
        r"\p{N}{1,3}+",
        r" ?[^\s\p{L}\p{N}]++[\r\n]*+",
        r"\s++$",
        r"\s*[\r\n]",
        r"\s+(?!\S)",
        r"\s",
    ));

/// The "`o200k_base`" word pattern.
pub const O200K_BASE_PATTERN: ConstRegexWrapperPattern =
    ConstRegexWrapperPattern::Fancy(join_patterns!(
        r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]*[\p{Ll}\p{Lm}\p{Lo}\p{M}]+(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
        r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]+[\p{Ll}\p{Lm}\p{Lo}\p{M}]*(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
        r"\p{N}{1,3}",
        r" ?[^\s\p{L}\p{N}]+[\r\n/]*",
        r"\s*[\r\n]+",
        r"\s+(?!\S)",
        r"\s+",
    ));

/// The "`voyage3_base`" word pattern.
///
/// The cl100k rules, with every digit its own chunk.
pub const VOYAGE3_BASE_PATTERN: ConstRegexWrapperPattern =
    ConstRegexWrapperPattern::Fancy(join_patterns!(
        r"(?i:'s|'t|'re|'ve|'m|'ll|'d)",
        r"[^\r\n\p{L}\p{N}]?\p{L}+",
        r"\p{N}",
        r" ?[^\s\p{L}\p{N}]+[\r\n]*",
        r"\s*[\r\n]+",
        r"\s+(?!\S)",
        r"\s+",
    ));
