//! Coarse-grained (word-level) tokenizers.

use crate::error::{AdapterError, Result};
use tokenizers::normalizers::bert::BertNormalizer;
use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::{Normalizer, OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

/// Split on Unicode whitespace.
pub fn whitespace_tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// BERT-style basic tokenizer: whitespace and punctuation splitting, with
/// optional lowercasing and accent stripping.
///
/// Runs the same normalizer and pre-tokenizer as a BERT `tokenizer.json`, so
/// control and format characters are removed, and every punctuation character
/// and every CJK ideograph becomes a token of its own.
#[derive(Debug, Clone)]
pub struct BasicTokenizer {
    normalizer: BertNormalizer,
    pre_tokenizer: BertPreTokenizer,
}

impl Default for BasicTokenizer {
    fn default() -> Self {
        Self::uncased()
    }
}

impl BasicTokenizer {
    pub fn new(lowercase: bool, strip_accents: bool) -> Self {
        Self {
            normalizer: BertNormalizer::new(true, true, Some(strip_accents), lowercase),
            pre_tokenizer: BertPreTokenizer,
        }
    }

    /// Lowercases and strips accents, like an uncased BERT vocabulary.
    pub fn uncased() -> Self {
        Self::new(true, true)
    }

    /// Keeps words as they appear in the text.
    pub fn cased() -> Self {
        Self::new(false, false)
    }

    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut pretokenized = PreTokenizedString::from(text);
        pretokenized
            .normalize(|normalized| self.normalizer.normalize(normalized))
            .map_err(|e| AdapterError::Tokenize(e.to_string()))?;
        self.pre_tokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| AdapterError::Tokenize(e.to_string()))?;

        Ok(pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Char)
            .into_iter()
            .map(|(word, _, _)| word.to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_split_drops_empty_tokens() {
        assert_eq!(
            whitespace_tokenize("  this is\ta\n test "),
            vec!["this", "is", "a", "test"]
        );
    }

    #[test]
    fn basic_splits_punctuation() {
        let tokens = BasicTokenizer::uncased().tokenize("Hello, 'world'!!").unwrap();
        assert_eq!(tokens, vec!["hello", ",", "'", "world", "'", "!", "!"]);
    }

    #[test]
    fn basic_uncased_strips_accents() {
        let tokens = BasicTokenizer::uncased().tokenize("Naïve café").unwrap();
        assert_eq!(tokens, vec!["naive", "cafe"]);
    }

    #[test]
    fn basic_cased_keeps_text() {
        let tokens = BasicTokenizer::cased().tokenize("Naïve café.").unwrap();
        assert_eq!(tokens, vec!["Naïve", "café", "."]);
    }

    #[test]
    fn basic_isolates_cjk_and_drops_controls() {
        let tokens = BasicTokenizer::uncased().tokenize("ab\u{0007}c 中文").unwrap();
        assert_eq!(tokens, vec!["abc", "中", "文"]);
    }

    #[test]
    fn basic_drops_format_characters() {
        let tokens = BasicTokenizer::uncased()
            .tokenize("te\u{200D}st zero\u{200B}width \u{FEFF}bom soft\u{00AD}hyphen")
            .unwrap();
        assert_eq!(tokens, vec!["test", "zerowidth", "bom", "softhyphen"]);
    }

    #[test]
    fn basic_splits_all_unicode_punctuation() {
        let tokens = BasicTokenizer::cased().tokenize("a\u{1361}b a\u{0F04}b").unwrap();
        assert_eq!(tokens, vec!["a", "\u{1361}", "b", "a", "\u{0F04}", "b"]);

        let tokens = BasicTokenizer::cased().tokenize("¿Qué?—sí。").unwrap();
        assert_eq!(tokens, vec!["¿", "Qué", "?", "—", "sí", "。"]);
    }
}
