//! Benchmarks for the positional merge sort.
//!
//! Measures the handle-based merge sort on descending, random, and
//! already-sorted inputs across list sizes.

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use positional::{PositionalList, merge_sort};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

const SIZES: [usize; 3] = [64, 512, 4096];

fn descending(n: usize) -> Vec<u64> {
    (0..n as u64).rev().collect()
}

fn shuffled(n: usize) -> Vec<u64> {
    let mut values: Vec<u64> = (0..n as u64).collect();
    let mut rng = StdRng::seed_from_u64(7);
    values.shuffle(&mut rng);
    values
}

fn ascending(n: usize) -> Vec<u64> {
    (0..n as u64).collect()
}

fn bench_merge_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sort");

    for (name, make_input) in [
        ("descending", descending as fn(usize) -> Vec<u64>),
        ("shuffled", shuffled),
        ("ascending", ascending),
    ] {
        for n in SIZES {
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, &n| {
                let input = make_input(n);
                b.iter_batched(
                    || input.iter().copied().collect::<PositionalList<u64>>(),
                    |mut list| {
                        merge_sort(&mut list);
                        list
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_list_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional_list");

    group.bench_function("add_last/4096", |b| {
        b.iter_batched(
            || PositionalList::with_capacity(4096),
            |mut list| {
                for i in 0..4096u64 {
                    list.add_last(i);
                }
                list
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("remove_by_handle/4096", |b| {
        b.iter_batched(
            || {
                let mut list = PositionalList::with_capacity(4096);
                let handles: Vec<_> = (0..4096u64).map(|i| list.add_last(i)).collect();
                (list, handles)
            },
            |(mut list, handles)| {
                for p in handles {
                    list.remove(p).unwrap();
                }
                list
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_merge_sort, bench_list_ops);
criterion_main!(benches);
