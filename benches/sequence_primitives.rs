//! Criterion benchmarks for the sequence capability seam itself, to keep an
//! eye on the abstraction overhead of the trait relative to direct
//! standard-library calls.

use container_benchmark::element::SmallElement;
use container_benchmark::sequence::Sequence;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::collections::{LinkedList, VecDeque};
use std::hint::black_box;

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("seam/push_back_1k");

    fn run<S: Sequence<SmallElement>>() -> S {
        let mut seq = S::default();
        for _ in 0..1024 {
            seq.push_back(SmallElement::default());
        }
        seq
    }

    group.bench_function("vec", |b| b.iter(|| black_box(run::<Vec<SmallElement>>())));
    group.bench_function("deque", |b| {
        b.iter(|| black_box(run::<VecDeque<SmallElement>>()))
    });
    group.bench_function("list", |b| {
        b.iter(|| black_box(run::<LinkedList<SmallElement>>()))
    });

    group.finish();
}

fn bench_positional_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("seam/remove_at_mid");

    fn setup<S: Sequence<SmallElement>>() -> S {
        let mut seq = S::default();
        for _ in 0..1024 {
            seq.push_back(SmallElement::default());
        }
        seq
    }

    group.bench_function("vec", |b| {
        b.iter_batched(
            setup::<Vec<SmallElement>>,
            |mut seq| black_box(seq.remove_at(512)),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("deque", |b| {
        b.iter_batched(
            setup::<VecDeque<SmallElement>>,
            |mut seq| black_box(seq.remove_at(512)),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("list", |b| {
        b.iter_batched(
            setup::<LinkedList<SmallElement>>,
            |mut seq| black_box(seq.remove_at(512)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_push_back, bench_positional_remove);
criterion_main!(benches);
