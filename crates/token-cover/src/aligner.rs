//! Covering fine tokens with coarse tokens.
//!
//! Matching runs strictly left to right and never backtracks across a coarse
//! token boundary: each coarse token takes the smallest run of fine tokens
//! whose normalized concatenation equals its own normalized text, and that
//! choice is final. A pathological input where a later coarse token only fits
//! if an earlier one had taken a longer run is reported as a failure.
//!
//! Fine tokens that normalize to nothing (say `"-"` when non-alphanumeric
//! characters are dropped) cannot end a smallest run, so they attach to the
//! *following* coarse token. Trailing ones after the last coarse token are
//! left over, and the covering fails with [`AlignmentFailure::Leftover`].

use crate::covering::{Covering, Segment};
use crate::error::AlignmentFailure;
use crate::normalize::{Normalizer, NormalizerConfig};
use crate::token::Token;
use tracing::{debug, trace};

/// Re-tokenizes a single coarse token the way the fine tokenizer would.
///
/// Only the number of tokens returned is used, as a hint for how many fine
/// tokens to try first.
pub type Decompose<'f> = &'f dyn Fn(&str) -> Vec<String>;

#[derive(Debug, Clone, Default)]
pub struct TokenAligner {
    normalizer: Normalizer,
}

impl TokenAligner {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    pub fn with_config(config: NormalizerConfig) -> Self {
        Self::new(Normalizer::new(config))
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Partition `fine` into one contiguous run per token of `coarse`.
    ///
    /// With `decompose`, each coarse token first tries exactly as many fine
    /// tokens as the decomposition yields; if that run doesn't match, the
    /// window grows one token at a time from the cursor instead.
    ///
    /// Fails without a partial result if some coarse token cannot be matched
    /// or fine tokens remain after the last coarse token.
    pub fn align<'a, C, F>(
        &self,
        coarse: &'a [C],
        fine: &'a [F],
        decompose: Option<Decompose<'_>>,
    ) -> Result<Covering<'a>, AlignmentFailure>
    where
        C: AsRef<str>,
        F: AsRef<str>,
    {
        let fine_keys: Vec<String> = fine
            .iter()
            .map(|token| self.normalizer.normalize_fine(token.as_ref()))
            .collect();

        let mut segments = Vec::with_capacity(coarse.len());
        let mut cursor = 0;

        for (index, token) in coarse.iter().enumerate() {
            let text = token.as_ref();
            let target = self.normalizer.normalize(text);
            let remaining = &fine_keys[cursor..];

            let width = decompose
                .and_then(|decompose| expected_width(decompose, text, &target, remaining))
                .or_else(|| smallest_window(&target, remaining));

            let Some(width) = width else {
                debug!(
                    coarse_index = index,
                    coarse = text,
                    fine_offset = cursor,
                    "No run of fine tokens covers coarse token"
                );
                return Err(AlignmentFailure::Unmatched {
                    coarse_index: index,
                    coarse_text: text.to_string(),
                    fine_offset: cursor,
                });
            };

            let run: Vec<Token<'a>> = (cursor..cursor + width)
                .map(|position| Token::new(fine[position].as_ref(), position))
                .collect();
            trace!(coarse = text, start = cursor, width, "Covered coarse token");

            segments.push(Segment {
                coarse: Token::new(text, index),
                fine: run,
            });
            cursor += width;
        }

        if cursor != fine.len() {
            debug!(
                consumed = cursor,
                total = fine.len(),
                "Fine tokens left over after last coarse token"
            );
            return Err(AlignmentFailure::Leftover {
                consumed: cursor,
                total: fine.len(),
            });
        }

        Ok(Covering::new(segments, fine.len()))
    }
}

/// Align with the default normalization policy.
pub fn cover_tokens<'a, C, F>(
    coarse: &'a [C],
    fine: &'a [F],
    decompose: Option<Decompose<'_>>,
) -> Result<Covering<'a>, AlignmentFailure>
where
    C: AsRef<str>,
    F: AsRef<str>,
{
    TokenAligner::default().align(coarse, fine, decompose)
}

fn expected_width(
    decompose: Decompose<'_>,
    text: &str,
    target: &str,
    keys: &[String],
) -> Option<usize> {
    let expected = decompose(text).len();
    if expected == 0 || expected > keys.len() {
        return None;
    }
    window_matches(target, &keys[..expected]).then_some(expected)
}

fn window_matches(target: &str, keys: &[String]) -> bool {
    let mut rest = target;
    for key in keys {
        match rest.strip_prefix(key.as_str()) {
            Some(after) => rest = after,
            None => return false,
        }
    }
    rest.is_empty()
}

/// Smallest `w >= 1` such that `keys[..w]` concatenates to `target`.
///
/// Stops as soon as the concatenation stops being a prefix of `target`, since
/// appending more text can never make it equal again.
fn smallest_window(target: &str, keys: &[String]) -> Option<usize> {
    let mut rest = target;
    for (i, key) in keys.iter().enumerate() {
        rest = rest.strip_prefix(key.as_str())?;
        if rest.is_empty() {
            return Some(i + 1);
        }
    }
    None
}
