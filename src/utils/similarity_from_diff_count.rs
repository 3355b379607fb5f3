use crate::types::{DiffCount, SimilarityScore};

/// Maps a diff count onto a bounded similarity score.
///
/// Computes `1 / (1 + diff_count)`: exactly `1.0` when the count is zero,
/// strictly decreasing as the count grows, approaching but never reaching
/// zero. The denominator is always at least one, so this introduces no
/// failure mode of its own.
pub fn similarity_from_diff_count(diff_count: DiffCount) -> SimilarityScore {
    1.0 / (1.0 + diff_count as f64)
}
