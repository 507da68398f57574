//! # Combined Tokenizer
//!
//! [`Tokenizer`] binds one [`ModelDefinition`](crate::models::ModelDefinition)
//! to an encoder and a decoder.

mod tokenizer_impl;
mod tokenizer_options;

#[doc(inline)]
pub use tokenizer_impl::*;
#[doc(inline)]
pub use tokenizer_options::*;
