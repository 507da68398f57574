//! # Span Encoder Selector

use crate::{
    encoders::token_span_encoder::{
        SpanEncoder,
        span_encoders::{PriorityMergeSpanEncoder, TailSweepSpanEncoder},
    },
    types::TokenType,
};

/// Policy enum for selecting a [`SpanEncoder`] for
/// [`TokenSpanEncoder`](`crate::encoders::token_span_encoder::TokenSpanEncoder`).
///
/// Every selection produces identical tokens; they differ only in speed.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display
)]
#[non_exhaustive]
pub enum SpanEncoderSelector {
    /// The canonical best Default encoder.
    ///
    /// Users should, in general, prefer to use this encoder.
    ///
    /// This stays the evergreen label for "the good one", so that a saved
    /// configuration conveys "use the default" rather than a fixed choice.
    ///
    /// This is currently an alias for: [`PriorityMerge`](`Self::PriorityMerge`)
    #[default]
    Default,

    /// The canonical reference encoder.
    ///
    /// The code and behavior are as simple as possible, but it is not optimized for performance.
    ///
    /// This is currently an alias for: [`TailSweep`](`Self::TailSweep`)
    Reference,

    /// Use the [`PriorityMergeSpanEncoder`] encoder.
    PriorityMerge,

    /// Use the [`TailSweepSpanEncoder`] encoder.
    TailSweep,
}

impl SpanEncoderSelector {
    /// Build a fresh instance of the selected [`SpanEncoder`].
    pub fn build_span_encoder<T: TokenType>(&self) -> Box<dyn SpanEncoder<T>> {
        use SpanEncoderSelector::*;
        match self {
            Default | PriorityMerge => Box::new(PriorityMergeSpanEncoder::<T>::default()),
            Reference | TailSweep => Box::new(TailSweepSpanEncoder::<T>::default()),
        }
    }
}
