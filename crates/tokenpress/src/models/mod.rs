//! # Models
//!
//! The built-in vocabularies: identifiers, word patterns and special tokens;
//! plus the [`VocabLoader`] seam and the [`ModelRegistry`] cache.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tokenpress::models::{ModelId, ModelRegistry, TiktokenReaderLoader};
//!
//! let loader = TiktokenReaderLoader::new()
//!     .with_model(ModelId::Cl100kBase, std::fs::read("cl100k_base.tiktoken").unwrap());
//! let registry = ModelRegistry::new(loader);
//!
//! let tokenizer = registry.tokenizer("cl100k_base").unwrap();
//! let tokens = tokenizer.encode("hello world");
//! assert_eq!(tokenizer.decode(&tokens).unwrap().as_deref(), Some("hello world"));
//! ```

mod loader;
mod model_definition;
mod model_id;
pub mod patterns;
mod registry;
pub mod specials;

#[doc(inline)]
pub use loader::*;
#[doc(inline)]
pub use model_definition::*;
#[doc(inline)]
pub use model_id::*;
#[doc(inline)]
pub use registry::*;
