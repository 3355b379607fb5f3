//! Scoring primitive for comparing two ascending-sorted collections of item
//! IDs: count the elements present in exactly one collection (a two-pointer
//! merge-diff), and derive a bounded similarity score `1 / (1 + diff_count)`
//! from it.
//!
//! Both counting paths assume their inputs are already sorted ascending and
//! never verify it. Calling them with unsorted input is a contract
//! violation: it silently returns a count with no useful meaning rather
//! than an error.
//!
//! Duplicate values are matched positionally during the merge, not
//! deduplicated: the result coincides with the true set symmetric
//! difference only when neither input contains duplicate values.

use log::debug;

pub mod models;
pub use models::{Error, SortedSequence};
pub mod types;
pub use types::{DiffCount, ItemId, ItemIdList, SimilarityScore};
mod utils;
pub use utils::{
    count_id_slice_diff, count_iter_diff, count_pull_diff, parse_id_list, read_id_list_from_file,
    similarity_from_diff_count, try_compare,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Counts the elements present in exactly one of two sorted sequences.
///
/// Dispatches on the representation of the inputs: two [`SortedSequence::Ids`]
/// slices take the index-based fast path; any other combination walks both
/// sides as pull sources. Both produce identical counts for equivalent
/// inputs.
///
/// # Errors
///
/// Fails with [`Error::ResourceExhaustion`] if a pull source fails
/// mid-stream. Item ids always order against each other, so
/// [`Error::ComparisonError`] is unreachable here; it remains a live
/// failure mode of [`count_pull_diff`] for partially-ordered element types.
pub fn count_symmetric_difference(
    seq_a: SortedSequence,
    seq_b: SortedSequence,
) -> Result<DiffCount, Error> {
    match (seq_a, seq_b) {
        (SortedSequence::Ids(a), SortedSequence::Ids(b)) => {
            debug!("both inputs are id slices; using the index-based counter");
            Ok(count_id_slice_diff(a, b))
        }
        (seq_a, seq_b) => {
            debug!("at least one input is a pull source; using the pull-based counter");
            count_pull_diff(seq_a.into_pull(), seq_b.into_pull())
        }
    }
}

/// Scores the similarity of two sorted sequences as `1 / (1 + diff_count)`.
///
/// Returns `1.0` exactly when the sequences match element-for-element, and
/// approaches `0.0` as they diverge. Same failure modes as
/// [`count_symmetric_difference`], which it is computed from.
pub fn similarity(seq_a: SortedSequence, seq_b: SortedSequence) -> Result<SimilarityScore, Error> {
    let diff_count = count_symmetric_difference(seq_a, seq_b)?;

    Ok(similarity_from_diff_count(diff_count))
}
