//! Criterion micro-benchmarks for arena allocation, reallocation, and
//! handle lookup.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use midden_arena::Arena;
use midden_bench::arena_with_records;

fn bench_alloc(c: &mut Criterion) {
    c.bench_function("alloc_64b_x1000", |b| {
        b.iter_batched_ref(
            || Arena::new(64 * 1024).expect("bench arena"),
            |arena| {
                for _ in 0..1000 {
                    black_box(arena.alloc(black_box(64)).unwrap());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_tail_realloc(c: &mut Criterion) {
    c.bench_function("tail_realloc_in_place", |b| {
        b.iter_batched_ref(
            || arena_with_records(4096, 1, 64),
            |(arena, handles)| {
                // Grow then shrink the tail: both stay in place, so the
                // handle and the fixture survive every iteration.
                let h = handles[0];
                black_box(arena.realloc(Some(h), 128).unwrap());
                black_box(arena.realloc(Some(h), 64).unwrap());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_relocating_realloc(c: &mut Criterion) {
    c.bench_function("relocating_realloc_64b_to_128b", |b| {
        b.iter_batched(
            // Two records so the first is never the tail; each relocation
            // burns arena capacity, so the fixture is rebuilt per run.
            || arena_with_records(64 * 1024, 2, 64),
            |(mut arena, handles)| {
                black_box(arena.realloc(Some(handles[0]), 128).unwrap());
                arena
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_handle_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_lookup");
    for count in [10usize, 100, 1000] {
        // Worst case for the linear scan: the last record issued.
        let (arena, handles) = arena_with_records(64 * 1024, count, 8);
        let last = handles[count - 1];
        group.bench_function(format!("{count}_records"), |b| {
            b.iter(|| black_box(arena.bytes(black_box(last)).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_alloc,
    bench_tail_realloc,
    bench_relocating_realloc,
    bench_handle_lookup
);
criterion_main!(benches);
