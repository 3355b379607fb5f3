use collection_similarity::{count_id_slice_diff, count_pull_diff, ItemId, ItemIdList};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_count_diff(c: &mut Criterion) {
    // Interleaved lists with a partial overlap, the shape a recommender
    // compares in practice.
    let list_a: ItemIdList = (0..10_000).map(|n| n * 2).collect();
    let list_b: ItemIdList = (0..10_000).map(|n| n * 3).collect();

    c.bench_function("count_id_slice_diff", |b| {
        b.iter(|| count_id_slice_diff(black_box(&list_a), black_box(&list_b)))
    });

    c.bench_function("count_pull_diff", |b| {
        b.iter(|| {
            count_pull_diff(
                black_box(&list_a).iter().map(|&id: &ItemId| Ok(id)),
                black_box(&list_b).iter().map(|&id: &ItemId| Ok(id)),
            )
        })
    });
}

criterion_group!(benches, benchmark_count_diff);
criterion_main!(benches);
