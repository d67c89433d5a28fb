//! Cover fine-grained tokens with coarse-grained tokens.
//!
//! Given a word-level and a subword-level tokenization of the same text,
//! [`cover_tokens`] groups the subwords into one contiguous run per word, and
//! [`aggregate`] sums per-subword attribution values into per-word values.
//!
//! # Example
//! ```
//! use token_cover::{aggregate, cover_tokens};
//!
//! let words = ["Crazy", "word"];
//! let pieces = ["crazy", "wo", "##rd"];
//!
//! let covering = cover_tokens(&words, &pieces, None).unwrap();
//! assert_eq!(covering.run_lengths(), vec![1, 2]);
//!
//! let per_word = aggregate(&covering, &[0.5, 1.0, 2.0]).unwrap();
//! assert_eq!(per_word, vec![0.5, 3.0]);
//! ```
//!
//! Alignment failure is an ordinary outcome ([`AlignmentFailure`]): tokenizers
//! of unrelated origin often disagree, and callers are expected to fall back
//! to subword output (see [`explain_word_level`]).

#![deny(clippy::all)]

mod aggregate;
mod aligner;
mod covering;
mod error;
mod explain;
mod normalize;
mod token;

pub use aggregate::aggregate;
pub use aligner::{Decompose, TokenAligner, cover_tokens};
pub use covering::{Covering, Segment};
pub use error::{AggregateError, AlignmentFailure};
pub use explain::{
    BERT_SPECIAL_TOKENS, Granularity, TokenAttributions, explain_word_level, strip_special_tokens,
};
pub use normalize::{
    DEFAULT_CONTINUATION_PREFIX, Normalizer, NormalizerConfig, SpecialChars, normalize,
};
pub use token::{Token, tokens};
