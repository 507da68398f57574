//! # [`SpanEncoder`] Implementations

mod priority_merge_encoder;
mod span_encoder;
mod span_encoder_selector;
mod tail_sweep_encoder;

#[doc(inline)]
pub use priority_merge_encoder::*;
#[doc(inline)]
pub use span_encoder::*;
#[doc(inline)]
pub use span_encoder_selector::*;
#[doc(inline)]
pub use tail_sweep_encoder::*;
