use collection_similarity::{
    similarity, similarity_from_diff_count, ItemId, SortedSequence,
};
use test_utils::load_id_lists_from_file;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_lists_score_exactly_one() {
        let ids: [ItemId; 4] = [10, 20, 30, 40];
        let score = similarity(SortedSequence::Ids(&ids), SortedSequence::Ids(&ids)).unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_partial_overlap_scores_a_quarter() {
        // diff_count 3 -> 1 / (1 + 3)
        let score = similarity(
            SortedSequence::Ids(&[1, 2, 3, 4]),
            SortedSequence::Ids(&[2, 4, 6]),
        )
        .unwrap();
        assert_eq!(score, 0.25);
    }

    #[test]
    fn test_empty_lists_score_exactly_one() {
        let score = similarity(SortedSequence::Ids(&[]), SortedSequence::Ids(&[])).unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_fully_disjoint_lists_score_a_fifth() {
        // diff_count 4 -> 1 / (1 + 4)
        let score = similarity(
            SortedSequence::Ids(&[5]),
            SortedSequence::Ids(&[1, 2, 3]),
        )
        .unwrap();
        assert_eq!(score, 0.2);
    }

    #[test]
    fn test_score_strictly_decreases_as_one_side_diverges() {
        let base: [ItemId; 3] = [1, 2, 3];

        // Append ever more disjoint ids to one side; each step must lower
        // the score.
        let mut previous_score =
            similarity(SortedSequence::Ids(&base), SortedSequence::Ids(&base)).unwrap();
        for extra in 1..=10 {
            let mut grown = base.to_vec();
            grown.extend((0..extra).map(|n| 100 + n as ItemId));

            let score =
                similarity(SortedSequence::Ids(&base), SortedSequence::Ids(&grown)).unwrap();
            assert!(
                score < previous_score,
                "score {} did not decrease below {} after adding {} disjoint ids",
                score,
                previous_score,
                extra
            );
            previous_score = score;
        }
    }

    #[test]
    fn test_score_stays_within_unit_interval() {
        for diff_count in [0, 1, 2, 10, 1_000, u64::MAX] {
            let score = similarity_from_diff_count(diff_count);
            assert!(score > 0.0 && score <= 1.0, "score {} out of bounds", score);
        }
    }

    #[test]
    fn test_score_equals_one_only_for_zero_diff_count() {
        assert_eq!(similarity_from_diff_count(0), 1.0);
        assert!(similarity_from_diff_count(1) < 1.0);
    }

    #[test]
    fn test_scores_between_fixture_lists() {
        let id_lists = load_id_lists_from_file("tests/test_id_lists.csv")
            .expect("Failed to load id lists from CSV");

        let night_owl = &id_lists["night_owl"];
        let early_bird = &id_lists["early_bird"];

        // night_owl [3,17,29,54,90] vs early_bird [3,29,54]: 17 and 90 are
        // unmatched -> diff_count 2.
        let score = similarity(
            SortedSequence::Ids(night_owl),
            SortedSequence::Ids(early_bird),
        )
        .unwrap();
        assert_eq!(score, 1.0 / 3.0);

        // A list is always a perfect match for itself.
        let completionist = &id_lists["completionist"];
        let score = similarity(
            SortedSequence::Ids(completionist),
            SortedSequence::Ids(completionist),
        )
        .unwrap();
        assert_eq!(score, 1.0);

        // loner [1000] shares nothing with early_bird [3,29,54].
        let loner = &id_lists["loner"];
        let score = similarity(SortedSequence::Ids(loner), SortedSequence::Ids(early_bird))
            .unwrap();
        assert_eq!(score, 0.25);
    }
}
