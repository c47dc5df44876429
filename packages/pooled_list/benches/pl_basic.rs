//! Basic benchmarks for the `pooled_list` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use pooled_list::PooledList;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("pl_basic");

    group.bench_function("build_empty", |b| {
        b.iter(|| drop(black_box(PooledList::<TestItem>::new())));
    });

    group.bench_function("push_back_growing", |b| {
        b.iter(|| {
            let mut list = PooledList::new();

            for _ in 0..100 {
                list.push_back(black_box(TEST_VALUE));
            }

            black_box(list)
        });
    });

    group.bench_function("push_back_pre_sized", |b| {
        b.iter(|| {
            let mut list = PooledList::with_capacity(100);

            for _ in 0..100 {
                list.push_back(black_box(TEST_VALUE));
            }

            black_box(list)
        });
    });

    // The entire point of the pool: steady-state cycles never allocate.
    group.bench_function("push_pop_cycle_warm_pool", |b| {
        let mut list = PooledList::with_capacity(16);

        for _ in 0..16 {
            list.push_back(TEST_VALUE);
        }

        b.iter(|| {
            list.push_back(black_box(TEST_VALUE));
            _ = black_box(list.remove_last());
        });
    });

    group.bench_function("rotate_cycle_warm_pool", |b| {
        let mut list = PooledList::with_capacity(16);

        for _ in 0..16 {
            list.push_back(TEST_VALUE);
        }

        b.iter(|| {
            _ = black_box(list.remove_first());
            list.push_back(black_box(TEST_VALUE));
        });
    });

    group.bench_function("get_middle", |b| {
        let list: PooledList<TestItem> = (0..1000).collect();

        b.iter(|| black_box(list.get(black_box(500))));
    });

    group.finish();
}
