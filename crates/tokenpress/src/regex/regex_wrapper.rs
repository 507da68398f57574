//! # Regex Wrapper
//!
//! One compiled-pattern type over both regex backends.

use core::ops::Range;

use crate::errors::{TPResult, TokenpressError};

fn compile_basic(pattern: &str) -> TPResult<RegexWrapper> {
    regex::Regex::new(pattern)
        .map(RegexWrapper::Basic)
        .map_err(|err| TokenpressError::InvalidPattern(format!("regex: {err}")))
}

fn compile_fancy(pattern: &str) -> TPResult<RegexWrapper> {
    fancy_regex::Regex::new(pattern)
        .map(RegexWrapper::Fancy)
        .map_err(|err| TokenpressError::InvalidPattern(format!("fancy_regex: {err}")))
}

/// A `'static` pattern with a fixed backend, for pattern constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConstRegexWrapperPattern {
    /// Written for `regex`.
    Basic(&'static str),

    /// Written for `fancy_regex`; uses look-around or possessive quantifiers.
    Fancy(&'static str),
}

impl ConstRegexWrapperPattern {
    /// The pattern source.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Basic(pattern) | Self::Fancy(pattern) => pattern,
        }
    }

    /// Compile on the labeled backend.
    pub fn compile(&self) -> TPResult<RegexWrapper> {
        match *self {
            Self::Basic(pattern) => compile_basic(pattern),
            Self::Fancy(pattern) => compile_fancy(pattern),
        }
    }
}

impl From<ConstRegexWrapperPattern> for RegexWrapperPattern {
    fn from(pattern: ConstRegexWrapperPattern) -> Self {
        match pattern {
            ConstRegexWrapperPattern::Basic(p) => Self::Basic(p.to_string()),
            ConstRegexWrapperPattern::Fancy(p) => Self::Fancy(p.to_string()),
        }
    }
}

/// A pattern, labeled with the backend it targets.
///
/// Plain strings convert to [`RegexWrapperPattern::Adaptive`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegexWrapperPattern {
    /// Written for `regex`.
    Basic(String),

    /// Written for `fancy_regex`.
    Fancy(String),

    /// Unknown target; `regex` when it accepts the pattern, else `fancy_regex`.
    Adaptive(String),
}

impl From<&str> for RegexWrapperPattern {
    fn from(pattern: &str) -> Self {
        Self::Adaptive(pattern.to_string())
    }
}

impl From<String> for RegexWrapperPattern {
    fn from(pattern: String) -> Self {
        Self::Adaptive(pattern)
    }
}

impl RegexWrapperPattern {
    /// The pattern source.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) | Self::Fancy(pattern) | Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the pattern.
    ///
    /// ## Returns
    /// [`TokenpressError::InvalidPattern`] naming the backend which rejected it;
    /// for `Adaptive`, the `fancy_regex` error.
    pub fn compile(&self) -> TPResult<RegexWrapper> {
        match self {
            Self::Basic(pattern) => compile_basic(pattern),
            Self::Fancy(pattern) => compile_fancy(pattern),
            Self::Adaptive(pattern) => compile_basic(pattern).or_else(|_| compile_fancy(pattern)),
        }
    }
}

/// A compiled pattern on either backend.
///
/// Both backends are `Send + Sync`; one instance serves every thread.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// `regex::Regex`.
    Basic(regex::Regex),

    /// `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl RegexWrapper {
    /// Whether this runs on `fancy_regex`.
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// The pattern source.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Iterate over the byte ranges of successive non-overlapping matches.
    pub fn find_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> MatchRanges<'r, 'h> {
        match self {
            Self::Basic(regex) => MatchRanges::Basic(regex.find_iter(haystack)),
            Self::Fancy(regex) => MatchRanges::Fancy(Some(regex.find_iter(haystack))),
        }
    }
}

/// Iterator over match ranges from a [`RegexWrapper`].
///
/// A `fancy_regex` runtime error (such as an exceeded backtrack limit)
/// ends the iteration; the unmatched tail is left to the caller.
pub enum MatchRanges<'r, 'h> {
    /// Over `regex::Matches`.
    Basic(regex::Matches<'r, 'h>),

    /// Over `fancy_regex::Matches`; `None` once an error was hit.
    Fancy(Option<fancy_regex::Matches<'r, 'h>>),
}

impl Iterator for MatchRanges<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Basic(matches) => matches.next().map(|m| m.range()),
            Self::Fancy(slot) => match slot.as_mut()?.next()? {
                Ok(m) => Some(m.range()),
                Err(err) => {
                    log::warn!("regex matching stopped early: {err}");
                    *slot = None;
                    None
                }
            },
        }
    }
}
