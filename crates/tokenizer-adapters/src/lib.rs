//! Tokenizer adapters for token covering.
//!
//! Coarse tokens come from [`whitespace_tokenize`] or [`BasicTokenizer`];
//! fine tokens, and the per-word decomposition hint, come from a
//! [`SubwordTokenizer`] wrapping a HuggingFace `tokenizer.json`, either as raw
//! vocabulary entries or decoded one id at a time.
//!
//! # Example
//! ```ignore
//! use tokenizer_adapters::{BasicTokenizer, SubwordTokenizer};
//!
//! let subword = SubwordTokenizer::from_file("models/bert-base-uncased/tokenizer.json")?;
//! let words = BasicTokenizer::cased().tokenize("A crazycomplexword")?;
//! let pieces = subword.tokenize("A crazycomplexword")?;
//! ```

#![deny(clippy::all)]

mod error;
mod preprocess;
mod subword;
mod word;

pub use error::{AdapterError, Result};
pub use preprocess::{identity, strip_accents_and_special_characters};
pub use subword::SubwordTokenizer;
pub use word::{BasicTokenizer, whitespace_tokenize};
