//! Glue between the tokenizer adapters and the covering engine.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use token_cover::{
    BERT_SPECIAL_TOKENS, Decompose, TokenAligner, TokenAttributions, strip_special_tokens,
};
use tokenizer_adapters::{
    BasicTokenizer, SubwordTokenizer, strip_accents_and_special_characters, whitespace_tokenize,
};
use tracing::debug;

/// Which tokenizer produces the coarse (word) tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WordTokenizer {
    /// Split on whitespace only
    Whitespace,
    /// BERT-style basic tokenizer, keeping case and accents
    Basic,
}

/// How subword tokens are spelled before covering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FineTokens {
    /// Vocabulary entries as stored (wordpiece)
    Raw,
    /// Each id decoded on its own (byte-level BPE, SentencePiece)
    Decoded,
}

/// Attributions for one text, as produced by a model explanation.
///
/// Fine tokens are taken from `fine_tokens` if present, otherwise looked up
/// from `input_ids`, otherwise produced by the subword tokenizer.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainRequest {
    pub text: String,
    #[serde(default)]
    pub fine_tokens: Option<Vec<String>>,
    #[serde(default)]
    pub input_ids: Option<Vec<u32>>,
    pub attributions: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentReport {
    pub word: String,
    pub start: usize,
    pub pieces: Vec<String>,
}

/// Outcome of covering a text's subword tokens with its words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverReport {
    pub words: Vec<String>,
    pub pieces: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<SegmentReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

pub struct Explainer {
    aligner: TokenAligner,
    subword: SubwordTokenizer,
    words: WordTokenizer,
    fine: FineTokens,
    preprocess: bool,
}

impl Explainer {
    pub fn new(
        aligner: TokenAligner,
        subword: SubwordTokenizer,
        words: WordTokenizer,
        fine: FineTokens,
        preprocess: bool,
    ) -> Self {
        Self {
            aligner,
            subword,
            words,
            fine,
            preprocess,
        }
    }

    fn prepare(&self, text: &str) -> String {
        if self.preprocess {
            strip_accents_and_special_characters(text)
        } else {
            text.to_string()
        }
    }

    // Words are reported as they appear; the aligner's normalizer handles case and accents.
    fn word_tokens(&self, text: &str) -> Result<Vec<String>> {
        match self.words {
            WordTokenizer::Whitespace => Ok(whitespace_tokenize(text)),
            WordTokenizer::Basic => BasicTokenizer::cased()
                .tokenize(text)
                .context("Failed to split text into words"),
        }
    }

    fn fine_tokens(&self, text: &str) -> Result<Vec<String>> {
        let tokens = match self.fine {
            FineTokens::Raw => self.subword.tokenize(text),
            FineTokens::Decoded => self.subword.tokenize_decoded(text),
        };
        tokens.context("Failed to tokenize text")
    }

    fn ids_to_fine_tokens(&self, ids: &[u32]) -> Result<Vec<String>> {
        let tokens = match self.fine {
            FineTokens::Raw => self.subword.ids_to_tokens(ids),
            FineTokens::Decoded => self.subword.decode_ids(ids),
        };
        tokens.context("Failed to map input ids to tokens")
    }

    /// Tokenize `text` both ways and report the covering, or why there is none.
    pub fn cover(&self, text: &str) -> Result<CoverReport> {
        let text = self.prepare(text);
        let words = self.word_tokens(&text)?;
        let pieces = self.fine_tokens(&text)?;
        let decompose: Decompose<'_> = &|word| self.subword.decompose(word);

        let (segments, failure) = match self.aligner.align(&words, &pieces, Some(decompose)) {
            Ok(covering) => {
                let segments = covering
                    .iter()
                    .map(|segment| SegmentReport {
                        word: segment.coarse.text.to_string(),
                        start: segment.fine_range().start,
                        pieces: segment.fine_texts().map(str::to_string).collect(),
                    })
                    .collect();
                (Some(segments), None)
            }
            Err(failure) => (None, Some(failure.to_string())),
        };

        Ok(CoverReport {
            words,
            pieces,
            segments,
            failure,
        })
    }

    /// Regroup a request's subword attributions to words, falling back to
    /// subwords when the text cannot be covered.
    pub fn explain(&self, request: &ExplainRequest) -> Result<TokenAttributions> {
        let text = self.prepare(&request.text);

        let fine_tokens = match (&request.fine_tokens, &request.input_ids) {
            (Some(tokens), _) => tokens.clone(),
            (None, Some(ids)) => self.ids_to_fine_tokens(ids)?,
            (None, None) => self.fine_tokens(&text)?,
        };

        let (fine_tokens, attributions) =
            strip_special_tokens(&fine_tokens, &request.attributions, &BERT_SPECIAL_TOKENS)
                .context("Attributions do not line up with tokens")?;
        debug!(fine = fine_tokens.len(), "Fine tokens after removing control tokens");

        let words = self.word_tokens(&text)?;
        let decompose: Decompose<'_> = &|word| self.subword.decompose(word);

        self.aligner
            .explain_word_level(&words, &fine_tokens, &attributions, Some(decompose))
            .context("Attributions do not line up with tokens")
    }
}
