//! Allocation records and the in-place-vs-relocate resize decision.
//!
//! The arena tracks every live allocation in a side table of
//! [`AllocationRecord`]s. Records are append-only: a record is created by
//! `alloc`, then mutated in place by every later `realloc` of that same
//! logical allocation. It is never removed, even once the bytes it used to
//! describe have become dead space.

/// Side-table entry for one logical allocation.
///
/// `offset` is the allocation's current position in the arena buffer and is
/// the value callers hold (wrapped in a `RegionHandle`); `size` is its
/// current byte length. Both fields are rewritten when a relocating resize
/// moves the allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AllocationRecord {
    /// Current byte offset within the arena buffer.
    pub(crate) offset: usize,
    /// Current length in bytes.
    pub(crate) size: usize,
}

impl AllocationRecord {
    /// Whether this record describes the tail allocation — the one whose
    /// end coincides with the bump cursor. Only the tail is eligible for
    /// an in-place resize.
    pub(crate) fn is_tail(&self, cursor: usize) -> bool {
        self.offset + self.size == cursor
    }
}

/// How a resize request will be satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ResizePlan {
    /// Adjust the cursor and the record in place; the handle is unchanged.
    /// `new_cursor` is the cursor after the adjustment (`offset + new_size`).
    InPlace {
        /// Cursor value after the in-place adjustment.
        new_cursor: usize,
    },
    /// Bump-allocate a fresh region at the cursor and copy the data over.
    Relocate,
}

/// Decide how to resize `record` to `new_size`.
///
/// Pure function of the record, the current cursor, the buffer capacity and
/// the requested size — no arena state is read or written. The tail
/// allocation resizes in place whenever the adjusted cursor still fits;
/// shrinking the tail therefore always stays in place. Everything else
/// relocates (and may still fail the capacity check downstream).
pub(crate) fn plan_resize(
    record: &AllocationRecord,
    cursor: usize,
    capacity: usize,
    new_size: usize,
) -> ResizePlan {
    if record.is_tail(cursor) {
        // cursor + (new_size - size) == offset + new_size, without the
        // signed intermediate the C original needed. An overflowing sum
        // can never fit in place and falls through to relocation, where
        // the capacity check rejects it.
        match record.offset.checked_add(new_size) {
            Some(new_cursor) if new_cursor <= capacity => {
                return ResizePlan::InPlace { new_cursor };
            }
            _ => {}
        }
    }
    ResizePlan::Relocate
}
