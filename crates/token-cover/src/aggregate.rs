use crate::covering::Covering;
use crate::error::AggregateError;
use std::iter::Sum;

/// Sum per-fine-token attributions into one value per coarse token.
///
/// `fine_attributions` must line up with the fine tokens the covering was
/// built from. The output has one entry per coarse token, in covering order,
/// and the same total as the input (up to floating-point summation order).
pub fn aggregate<T>(
    covering: &Covering<'_>,
    fine_attributions: &[T],
) -> Result<Vec<T>, AggregateError>
where
    T: Copy + Sum<T>,
{
    if fine_attributions.len() != covering.fine_len() {
        return Err(AggregateError::LengthMismatch {
            expected: covering.fine_len(),
            actual: fine_attributions.len(),
        });
    }

    let mut offset = 0;
    let totals = covering
        .iter()
        .map(|segment| {
            let end = offset + segment.len();
            let total = fine_attributions[offset..end].iter().copied().sum();
            offset = end;
            total
        })
        .collect();

    Ok(totals)
}
