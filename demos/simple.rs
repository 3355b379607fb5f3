use collection_similarity::{count_symmetric_difference, similarity, SortedSequence};

fn main() {
    env_logger::init();

    // Item ids each user has collected, pre-sorted ascending.
    let user_a = [1, 2, 3, 4];
    let user_b = [2, 4, 6];

    let diff_count =
        count_symmetric_difference(SortedSequence::Ids(&user_a), SortedSequence::Ids(&user_b))
            .unwrap();
    let score = similarity(SortedSequence::Ids(&user_a), SortedSequence::Ids(&user_b)).unwrap();

    println!("Comparing {:?} against {:?}", user_a, user_b);
    println!("diff_count: {}", diff_count);
    println!("similarity: {:.2}", score);
}
