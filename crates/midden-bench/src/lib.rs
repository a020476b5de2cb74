//! Fixture helpers shared by the arena benchmarks.

use midden_arena::{Arena, RegionHandle};

/// Build an arena of `capacity` bytes pre-filled with `count` allocations
/// of `size` bytes each. Panics if the fixture does not fit; benchmark
/// fixtures are sized by hand.
pub fn arena_with_records(capacity: usize, count: usize, size: usize) -> (Arena, Vec<RegionHandle>) {
    assert!(count * size <= capacity, "fixture exceeds arena capacity");
    let mut arena = Arena::new(capacity).expect("fixture arena");
    let handles = (0..count)
        .map(|_| arena.alloc(size).expect("fixture alloc"))
        .collect();
    (arena, handles)
}
