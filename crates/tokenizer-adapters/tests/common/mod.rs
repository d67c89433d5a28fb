use once_cell::sync::Lazy;
use std::path::PathBuf;
use tokenizer_adapters::{
    BasicTokenizer, SubwordTokenizer, identity, strip_accents_and_special_characters,
    whitespace_tokenize,
};

// Shared wordpiece tokenizer loaded once for all tests.
// The fixture is a small uncased BERT-style vocabulary covering the test sentences.
pub static WORDPIECE: Lazy<SubwordTokenizer> = Lazy::new(|| {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/wordpiece-tokenizer.json");
    SubwordTokenizer::from_file(&path).expect("Failed to load wordpiece fixture")
});

// Byte-level BPE tokenizer whose raw tokens carry `Ġ` word-boundary markers.
// Its vocabulary only knows the words "this is a test".
pub static BYTE_LEVEL_BPE: Lazy<SubwordTokenizer> = Lazy::new(|| {
    let path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/byte-level-bpe-tokenizer.json");
    SubwordTokenizer::from_file(&path).expect("Failed to load byte-level BPE fixture")
});

/// A named combination of word tokenizer, subword tokenizer and the
/// pre-processing applied before both.
pub struct TokenizerPair {
    pub name: &'static str,
    pub words: fn(&str) -> Vec<String>,
    pub pieces: fn(&str) -> Vec<String>,
    pub preprocess: fn(&str) -> String,
}

fn basic_words(text: &str) -> Vec<String> {
    BasicTokenizer::uncased()
        .tokenize(text)
        .expect("Failed to tokenize words")
}

fn wordpieces(text: &str) -> Vec<String> {
    WORDPIECE.tokenize(text).expect("Failed to tokenize")
}

pub fn tokenizer_pairs() -> Vec<TokenizerPair> {
    vec![
        TokenizerPair {
            name: "basic+wordpiece",
            words: basic_words,
            pieces: wordpieces,
            preprocess: identity,
        },
        TokenizerPair {
            name: "whitespace+wordpiece",
            words: whitespace_tokenize,
            pieces: wordpieces,
            preprocess: strip_accents_and_special_characters,
        },
    ]
}
