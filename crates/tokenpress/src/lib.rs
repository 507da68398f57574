//! # `tokenpress` BPE Tokenizer
//!
//! A byte-pair-encoding tokenizer which reproduces the tokenization of
//! fixed, published vocabularies:
//! * `cl100k_base`,
//! * `o200k_base`,
//! * `voyage3_base`.
//!
//! Given text, it encodes to the reference token ids, decodes them back to the
//! exact bytes, and counts tokens without building the token sequence.
//!
//! See:
//! * [`Tokenizer`] - the facade; create-once, use-many.
//! * [`models`] - model identifiers, the [`VocabLoader`] seam, and the [`ModelRegistry`] cache.
//! * [`vocab`] - vocabulary structures, and the `tiktoken` rank file codec in [`vocab::io`].
//! * [`spanning`] - pre-tokenization and special token matching.
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//!
//! The crate does no file or network I/O; a [`VocabLoader`] supplies each
//! model's rank list.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust,no_run
//! use tokenpress::{Tokenizer, models::{ModelId, TiktokenReaderLoader}};
//!
//! let data = std::fs::read("o200k_base.tiktoken")?;
//! let loader = TiktokenReaderLoader::new().with_model(ModelId::O200kBase, data);
//!
//! let tokenizer = Tokenizer::create("o200k_base", &loader)?;
//!
//! let tokens = tokenizer.encode("hello world<|endoftext|>");
//! assert_eq!(tokenizer.count("hello world<|endoftext|>"), tokens.len());
//! assert_eq!(
//!     tokenizer.decode(&tokens)?.as_deref(),
//!     Some("hello world<|endoftext|>")
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod compat;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod models;
pub mod regex;
pub mod spanning;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{TPResult, TokenpressError};
#[doc(inline)]
pub use models::{ModelDefinition, ModelId, ModelRegistry, VocabLoader};
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::Vocabulary;
