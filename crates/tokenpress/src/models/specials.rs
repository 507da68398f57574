//! # Special Tokens

use crate::declare_carrot_special;

declare_carrot_special!(
    (ENDOFTEXT, "endoftext"),
    (ENDOFPROMPT, "endofprompt"),
    (FIM_PREFIX, "fim_prefix"),
    (FIM_MIDDLE, "fim_middle"),
    (FIM_SUFFIX, "fim_suffix"),
);

/// The "`cl100k_base`" special tokens.
///
/// `100256` is unassigned.
pub const CL100K_BASE_SPECIALS: &[(&str, usize)] = &[
    (ENDOFTEXT, 100257),
    (FIM_PREFIX, 100258),
    (FIM_MIDDLE, 100259),
    (FIM_SUFFIX, 100260),
    (ENDOFPROMPT, 100276),
];

/// The "`o200k_base`" special tokens.
pub const O200K_BASE_SPECIALS: &[(&str, usize)] = &[(ENDOFTEXT, 199999), (ENDOFPROMPT, 200018)];

/// The "`voyage3_base`" special tokens; it has none.
pub const VOYAGE3_BASE_SPECIALS: &[(&str, usize)] = &[];
