//! Text pre-processing applied before both tokenizers run.
//!
//! Tokenizers disagree about accents, emoji and other symbols. Feeding both
//! the same reduced text avoids most of those disagreements.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strip accents (NFD, drop combining marks) and anything that is not
/// alphanumeric, whitespace or ASCII punctuation.
pub fn strip_accents_and_special_characters(text: &str) -> String {
    text.nfd()
        .filter(|&c| !is_combining_mark(c))
        .filter(|&c| c.is_alphanumeric() || c.is_whitespace() || c.is_ascii_punctuation())
        .collect()
}

/// Leave text as it is.
pub fn identity(text: &str) -> String {
    text.to_string()
}
