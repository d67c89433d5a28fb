use thiserror::Error;

/// Why two tokenizations of the same text could not be covered.
///
/// This is an expected outcome, not a bug: tokenizers of unrelated origin
/// frequently disagree. Callers usually fall back to fine-grained output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentFailure {
    #[error("coarse token {coarse_index} ({coarse_text:?}) unmatched at fine token {fine_offset}")]
    Unmatched {
        coarse_index: usize,
        coarse_text: String,
        fine_offset: usize,
    },

    #[error("fine tokens left uncovered: consumed {consumed} of {total}")]
    Leftover { consumed: usize, total: usize },
}

/// Caller contract violations when regrouping attributions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error("expected {expected} attribution values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
