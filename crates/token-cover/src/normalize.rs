//! Comparison keys for token text.
//!
//! Normalized text is only ever compared, never returned to callers. Every
//! step here works one character at a time, so normalizing a concatenation
//! gives the same result as concatenating the normalized parts. The aligner
//! depends on that.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Wordpiece marker for a subword that continues the previous one.
pub const DEFAULT_CONTINUATION_PREFIX: &str = "##";

/// Which non-letter characters to drop before comparing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialChars {
    /// Keep everything.
    #[default]
    Retain,
    /// Drop anything that is neither alphanumeric nor whitespace.
    NonAlphanumeric,
    /// Drop exactly these characters.
    Set(Vec<char>),
}

impl SpecialChars {
    pub fn contains(&self, c: char) -> bool {
        match self {
            SpecialChars::Retain => false,
            SpecialChars::NonAlphanumeric => !c.is_alphanumeric() && !c.is_whitespace(),
            SpecialChars::Set(chars) => chars.contains(&c),
        }
    }
}

/// Normalization policy.
///
/// Deserializes with defaults for missing fields, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Fold case (per character; final sigma folds to sigma).
    pub lowercase: bool,
    /// Decompose (NFD) and drop combining marks.
    pub strip_accents: bool,
    /// Drop whitespace, for tokenizers that attach spaces to tokens.
    pub strip_whitespace: bool,
    pub special_chars: SpecialChars,
    /// Prefix removed from the start of fine tokens only.
    pub continuation_prefix: Option<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_accents: true,
            strip_whitespace: true,
            special_chars: SpecialChars::Retain,
            continuation_prefix: Some(DEFAULT_CONTINUATION_PREFIX.to_string()),
        }
    }
}

/// Reduces token text to a comparison-stable form.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize coarse token text (or any free text).
    ///
    /// Without accent stripping no decomposition happens, so precomposed and
    /// decomposed forms of the same letter compare unequal.
    pub fn normalize(&self, text: &str) -> String {
        let folded = if self.config.lowercase {
            Cow::Owned(fold_case(text))
        } else {
            Cow::Borrowed(text)
        };

        let mut out = String::with_capacity(folded.len());
        if self.config.strip_accents {
            for c in folded.nfd().filter(|c| !is_combining_mark(*c)) {
                self.push_retained(c, &mut out);
            }
        } else {
            for c in folded.chars() {
                self.push_retained(c, &mut out);
            }
        }
        out
    }

    /// Normalize fine token text: drop the continuation prefix, then normalize.
    pub fn normalize_fine(&self, text: &str) -> String {
        self.normalize(self.strip_continuation(text))
    }

    /// Remove the continuation prefix if `text` carries one.
    ///
    /// A token that is nothing but the prefix is returned unchanged.
    pub fn strip_continuation<'t>(&self, text: &'t str) -> &'t str {
        match self.config.continuation_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() && text.len() > prefix.len() => {
                text.strip_prefix(prefix).unwrap_or(text)
            }
            _ => text,
        }
    }

    fn push_retained(&self, c: char, out: &mut String) {
        if self.config.strip_whitespace && c.is_whitespace() {
            return;
        }
        if self.config.special_chars.contains(c) {
            return;
        }
        out.push(c);
    }
}

/// Normalize with the default policy.
pub fn normalize(text: &str) -> String {
    Normalizer::default().normalize(text)
}

fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}
