use crate::types::DiffCount;
use crate::utils::try_compare;
use crate::Error;
use std::cmp::Ordering;

/// Counts the elements present in exactly one of two pull sources of
/// ascending elements.
///
/// Same two-pointer merge as [`count_id_slice_diff`](crate::count_id_slice_diff),
/// but over single-pass, forward-only sources that produce each element on
/// demand and may fail mid-pull. Once one source is exhausted, the other is
/// drained to completion, counting one per remaining element, without
/// needing to know its length in advance.
///
/// Each element is held only for its comparison/advance step and dropped
/// before the next pull, on every exit path. The first failed pull or failed
/// comparison aborts the merge and propagates; no partial count is returned.
///
/// ### Preconditions:
/// - Both sources must yield their elements in ascending order. This is not
///   verified; unsorted input silently produces a count with no useful
///   meaning.
pub fn count_pull_diff<T, A, B>(source_a: A, source_b: B) -> Result<DiffCount, Error>
where
    T: PartialOrd,
    A: IntoIterator<Item = Result<T, Error>>,
    B: IntoIterator<Item = Result<T, Error>>,
{
    let mut source_a = source_a.into_iter();
    let mut source_b = source_b.into_iter();
    let mut diff_count: DiffCount = 0;

    let mut pending_a = source_a.next().transpose()?;
    let mut pending_b = source_b.next().transpose()?;

    loop {
        match (pending_a.take(), pending_b.take()) {
            (Some(a), Some(b)) => match try_compare(&a, &b)? {
                Ordering::Less => {
                    diff_count += 1;
                    pending_a = source_a.next().transpose()?;
                    pending_b = Some(b);
                }
                Ordering::Greater => {
                    diff_count += 1;
                    pending_a = Some(a);
                    pending_b = source_b.next().transpose()?;
                }
                Ordering::Equal => {
                    pending_a = source_a.next().transpose()?;
                    pending_b = source_b.next().transpose()?;
                }
            },
            // One side is exhausted; everything left on the other side is
            // unmatched by construction.
            (Some(_), None) => {
                diff_count += 1;
                pending_a = source_a.next().transpose()?;
            }
            (None, Some(_)) => {
                diff_count += 1;
                pending_b = source_b.next().transpose()?;
            }
            (None, None) => return Ok(diff_count),
        }
    }
}

/// Convenience wrapper over [`count_pull_diff`] for plain in-memory
/// iterators. Only a comparison failure remains reachable through this
/// entry point.
pub fn count_iter_diff<T, A, B>(iter_a: A, iter_b: B) -> Result<DiffCount, Error>
where
    T: PartialOrd,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    count_pull_diff(
        iter_a.into_iter().map(Ok),
        iter_b.into_iter().map(Ok),
    )
}
