//! # Vocabulary IO
//!
//! Codec for the standard `tiktoken` rank file format. The crate performs no
//! file or network access of its own; callers hand in a reader.
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use std::{fs::File, io::BufReader};
//!
//! use tokenpress::{
//!     TPResult,
//!     models::{ModelDefinition, ModelId},
//!     vocab::io::read_tiktoken_rank_list,
//! };
//!
//! fn example() -> TPResult<ModelDefinition> {
//!     let reader = BufReader::new(File::open("cl100k_base.tiktoken")?);
//!     let rank_list = read_tiktoken_rank_list(reader)?;
//!     ModelDefinition::build(ModelId::Cl100kBase, rank_list)
//! }
//! ```

mod tiktoken_io;

#[doc(inline)]
pub use tiktoken_io::*;
