use crate::error::{AdapterError, Result};
use std::path::Path;
use tokenizers::Tokenizer;
use tracing::debug;

/// Fine-grained tokens from a HuggingFace tokenizer (wordpiece, BPE, ...).
///
/// [`tokenize`](Self::tokenize) returns vocabulary entries as stored, which
/// suits wordpiece. Byte-level BPE and SentencePiece vocabularies mark word
/// boundaries with symbols like `Ġ` or `▁`; use
/// [`tokenize_decoded`](Self::tokenize_decoded) for those.
pub struct SubwordTokenizer {
    tokenizer: Tokenizer,
}

impl SubwordTokenizer {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Load from a `tokenizer.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let tokenizer = Tokenizer::from_file(path)
            .map_err(|e| AdapterError::Load(format!("{}: {}", path.display(), e)))?;
        Ok(Self::new(tokenizer))
    }

    /// Load from `tokenizer.json` contents.
    pub fn from_bytes(tokenizer_json: impl AsRef<[u8]>) -> Result<Self> {
        let tokenizer =
            Tokenizer::from_bytes(tokenizer_json).map_err(|e| AdapterError::Load(e.to_string()))?;
        Ok(Self::new(tokenizer))
    }

    pub fn inner(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenize text into token strings, without `[CLS]`/`[SEP]`-style
    /// special tokens.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let encoding = self
            .tokenizer
            .encode(text, false)
            .map_err(|e| AdapterError::Tokenize(e.to_string()))?;
        Ok(encoding.get_tokens().to_vec())
    }

    /// Tokenize text and decode every id on its own, so each token reads as
    /// the text it stands for (`" is"` rather than `"Ġis"`).
    pub fn tokenize_decoded(&self, text: &str) -> Result<Vec<String>> {
        let encoding = self
            .tokenizer
            .encode(text, false)
            .map_err(|e| AdapterError::Tokenize(e.to_string()))?;
        self.decode_ids(encoding.get_ids())
    }

    /// Decode each id separately into the text it stands for.
    pub fn decode_ids(&self, ids: &[u32]) -> Result<Vec<String>> {
        ids.iter()
            .map(|&id| {
                self.tokenizer
                    .decode(&[id], false)
                    .map_err(|e| AdapterError::Tokenize(e.to_string()))
            })
            .collect()
    }

    /// Tokenize a single word in isolation.
    ///
    /// Used as the expected-decomposition hint when covering. A word the
    /// tokenizer rejects yields no tokens, which makes the aligner ignore the
    /// hint for it.
    pub fn decompose(&self, word: &str) -> Vec<String> {
        self.tokenize(word).unwrap_or_else(|e| {
            debug!(word, error = %e, "Could not decompose word");
            Vec::new()
        })
    }

    /// Map token ids (e.g. model `input_ids`) back to token strings.
    pub fn ids_to_tokens(&self, ids: &[u32]) -> Result<Vec<String>> {
        ids.iter()
            .map(|&id| {
                self.tokenizer
                    .id_to_token(id)
                    .ok_or(AdapterError::UnknownId(id))
            })
            .collect()
    }
}
