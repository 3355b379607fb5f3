use crate::types::{DiffCount, ItemId};
use std::cmp::Ordering;

/// Counts the elements present in exactly one of two ascending id slices.
///
/// This is the specialized counting path: a two-pointer merge over two
/// random-accessible runs of native ids, running in O(n + m) time with no
/// allocation. When one slice runs out, the remaining length of the other is
/// added in a single step, since none of its trailing elements has a
/// counterpart left to match.
///
/// ### Preconditions:
/// - Both slices must already be sorted ascending. This is not verified;
///   unsorted input silently produces a count with no useful meaning.
///
/// ### Notes:
/// - Duplicate values are matched positionally during the scan, not
///   collapsed into a set: `[2, 2]` vs `[2]` counts one unmatched element.
///   The result coincides with the true set symmetric difference only when
///   neither input contains duplicates.
///
/// ### Example:
/// ```rust
/// use collection_similarity::count_id_slice_diff;
///
/// // Matched: {2, 4}. Unmatched: {1, 3, 6}.
/// assert_eq!(count_id_slice_diff(&[1, 2, 3, 4], &[2, 4, 6]), 3);
/// ```
pub fn count_id_slice_diff(a: &[ItemId], b: &[ItemId]) -> DiffCount {
    let mut diff_count: DiffCount = 0;
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                // A's element has no counterpart at or before B's cursor
                diff_count += 1;
                i += 1;
            }
            Ordering::Greater => {
                diff_count += 1;
                j += 1;
            }
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    diff_count + (a.len() - i) as DiffCount + (b.len() - j) as DiffCount
}
