//! Algorithm comparison benchmark
//!
//! ```sh
//! cargo bench --bench sort_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use classic_sort::record::records_from;
use classic_sort::{Record, SortAlgorithm, SortOrder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_records(len: usize) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    records_from((0..len).map(|_| rng.gen_range(-100_000..100_000)))
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_random");

    for len in [16usize, 64, 256] {
        let input = random_records(len);

        for algorithm in SortAlgorithm::ALL {
            // Slow sort stops being measurable well before 256 records
            if algorithm == SortAlgorithm::Slow && len > 64 {
                continue;
            }

            group.bench_with_input(
                BenchmarkId::new(algorithm.to_string(), len),
                &input,
                |b, input| {
                    b.iter(|| {
                        let mut records = input.clone();
                        algorithm.sorter().sort(&mut records, SortOrder::Ascending);
                        black_box(records)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_quick_sort_sorted_input(c: &mut Criterion) {
    let sorted = records_from(0..2_000);

    c.bench_function("quick_sort_presorted_2000", |b| {
        b.iter(|| {
            let mut records = sorted.clone();
            SortAlgorithm::Quick
                .sorter()
                .sort(&mut records, SortOrder::Ascending);
            black_box(records)
        })
    });
}

criterion_group!(benches, bench_algorithms, bench_quick_sort_sorted_input);
criterion_main!(benches);
