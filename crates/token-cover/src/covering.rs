use crate::token::Token;
use serde::Serialize;
use std::ops::Range;

/// One coarse token and the run of fine tokens that spells it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub coarse: Token<'a>,
    pub fine: Vec<Token<'a>>,
}

impl<'a> Segment<'a> {
    /// Number of fine tokens in the run.
    pub fn len(&self) -> usize {
        self.fine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fine.is_empty()
    }

    /// Positions of the run within the fine-token sequence.
    pub fn fine_range(&self) -> Range<usize> {
        self.fine
            .first()
            .map_or(0..0, |first| first.position..first.position + self.fine.len())
    }

    pub fn fine_texts(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fine.iter().map(|token| token.text)
    }
}

/// A total, order-preserving, gap-free partition of the fine tokens into runs,
/// one run per coarse token.
///
/// Only the aligner builds coverings, so the invariants always hold:
/// runs are non-empty, contiguous and together span every fine token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Covering<'a> {
    segments: Vec<Segment<'a>>,
    fine_len: usize,
}

impl<'a> Covering<'a> {
    pub(crate) fn new(segments: Vec<Segment<'a>>, fine_len: usize) -> Self {
        Self { segments, fine_len }
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment<'a>> {
        self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment<'a>> {
        self.segments.iter()
    }

    /// Number of coarse tokens.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of fine tokens covered.
    pub fn fine_len(&self) -> usize {
        self.fine_len
    }

    pub fn coarse_tokens(&self) -> Vec<&'a str> {
        self.segments.iter().map(|s| s.coarse.text).collect()
    }

    /// The runs flattened back into the fine-token sequence.
    pub fn fine_tokens(&self) -> Vec<&'a str> {
        self.segments.iter().flat_map(|s| s.fine_texts()).collect()
    }

    pub fn run_lengths(&self) -> Vec<usize> {
        self.segments.iter().map(Segment::len).collect()
    }
}

impl<'c, 'a> IntoIterator for &'c Covering<'a> {
    type Item = &'c Segment<'a>;
    type IntoIter = std::slice::Iter<'c, Segment<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
