//! Word-level attribution output for a model explanation.
//!
//! Attribution producers work on subword tokens. When the subwords can be
//! covered by words, the explanation is regrouped to words; otherwise the
//! subword tokens are reported as they are.

use crate::aggregate::aggregate;
use crate::aligner::{Decompose, TokenAligner};
use crate::error::AggregateError;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Control tokens a BERT-style tokenizer adds around the real text.
pub const BERT_SPECIAL_TOKENS: [&str; 3] = ["[CLS]", "[SEP]", "[PAD]"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Word,
    Subword,
}

/// Tokens with one attribution value each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAttributions {
    pub granularity: Granularity,
    pub tokens: Vec<String>,
    pub attributions: Vec<f64>,
}

impl TokenAttributions {
    pub fn total(&self) -> f64 {
        self.attributions.iter().sum()
    }
}

/// Drop control tokens and their attribution values, keeping order.
pub fn strip_special_tokens<S: AsRef<str>>(
    tokens: &[S],
    attributions: &[f64],
    specials: &[&str],
) -> Result<(Vec<String>, Vec<f64>), AggregateError> {
    if tokens.len() != attributions.len() {
        return Err(AggregateError::LengthMismatch {
            expected: tokens.len(),
            actual: attributions.len(),
        });
    }

    Ok(tokens
        .iter()
        .zip(attributions)
        .filter(|(token, _)| !specials.contains(&token.as_ref()))
        .map(|(token, &value)| (token.as_ref().to_string(), value))
        .unzip())
}

impl TokenAligner {
    /// Regroup subword attributions to words, or fall back to subwords when
    /// the two tokenizations cannot be covered.
    ///
    /// Only a length mismatch between `fine_tokens` and `fine_attributions`
    /// is an error.
    pub fn explain_word_level<W, F>(
        &self,
        word_tokens: &[W],
        fine_tokens: &[F],
        fine_attributions: &[f64],
        decompose: Option<Decompose<'_>>,
    ) -> Result<TokenAttributions, AggregateError>
    where
        W: AsRef<str>,
        F: AsRef<str>,
    {
        if fine_tokens.len() != fine_attributions.len() {
            return Err(AggregateError::LengthMismatch {
                expected: fine_tokens.len(),
                actual: fine_attributions.len(),
            });
        }

        match self.align(word_tokens, fine_tokens, decompose) {
            Ok(covering) => Ok(TokenAttributions {
                granularity: Granularity::Word,
                attributions: aggregate(&covering, fine_attributions)?,
                tokens: covering
                    .coarse_tokens()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }),
            Err(failure) => {
                info!(
                    %failure,
                    "Failed to cover word tokens with fine tokens, reporting fine tokens"
                );
                Ok(TokenAttributions {
                    granularity: Granularity::Subword,
                    tokens: fine_tokens.iter().map(|t| t.as_ref().to_string()).collect(),
                    attributions: fine_attributions.to_vec(),
                })
            }
        }
    }
}

/// [`TokenAligner::explain_word_level`] with the default normalization policy.
pub fn explain_word_level<W, F>(
    word_tokens: &[W],
    fine_tokens: &[F],
    fine_attributions: &[f64],
    decompose: Option<Decompose<'_>>,
) -> Result<TokenAttributions, AggregateError>
where
    W: AsRef<str>,
    F: AsRef<str>,
{
    TokenAligner::default().explain_word_level(
        word_tokens,
        fine_tokens,
        fine_attributions,
        decompose,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regroups_when_coverable() {
        let words = ["Crazy", "word!"];
        let pieces = ["crazy", "word", "!"];

        let explained = explain_word_level(&words, &pieces, &[1.0, 2.0, 0.5], None).unwrap();
        assert_eq!(explained.granularity, Granularity::Word);
        assert_eq!(explained.tokens, vec!["Crazy", "word!"]);
        assert_eq!(explained.attributions, vec![1.0, 2.5]);
    }

    #[test]
    fn falls_back_to_fine_tokens() {
        let words = ["thi", "s a t"];
        let pieces = ["this", "is", "a"];

        let explained = explain_word_level(&words, &pieces, &[1.0, 2.0, 3.0], None).unwrap();
        assert_eq!(explained.granularity, Granularity::Subword);
        assert_eq!(explained.tokens, vec!["this", "is", "a"]);
        assert_eq!(explained.total(), 6.0);
    }

    #[test]
    fn length_mismatch_is_an_error_even_when_uncoverable() {
        let words = ["nope"];
        let pieces = ["this", "is"];

        let err = explain_word_level(&words, &pieces, &[1.0], None).unwrap_err();
        assert_eq!(
            err,
            AggregateError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn strips_control_tokens_with_their_values() {
        let tokens = ["[CLS]", "hello", "world", "[SEP]", "[PAD]"];
        let values = [9.0, 1.0, 2.0, 9.0, 0.0];

        let (kept, kept_values) =
            strip_special_tokens(&tokens, &values, &BERT_SPECIAL_TOKENS).unwrap();
        assert_eq!(kept, vec!["hello", "world"]);
        assert_eq!(kept_values, vec![1.0, 2.0]);
    }

    #[test]
    fn granularity_serializes_snake_case() {
        let json = serde_json::to_string(&Granularity::Subword).unwrap();
        assert_eq!(json, "\"subword\"");
    }
}
