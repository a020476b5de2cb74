//! The fixed-capacity arena allocator.
//!
//! [`Arena`] owns one contiguous byte buffer, sized once at creation, and a
//! growable side table of allocation records. Allocation is a pure bump:
//! return the cursor, advance it. Reallocation either adjusts the tail
//! allocation in place or bump-allocates a fresh region and copies, leaving
//! the old bytes behind as dead space that is never reclaimed until the
//! arena is dropped.

use crate::error::ArenaError;
use crate::handle::RegionHandle;
use crate::record::{plan_resize, AllocationRecord, ResizePlan};

/// Record-table capacity reserved at creation, so the first few
/// allocations never touch the growth path.
const INITIAL_RECORD_CAPACITY: usize = 10;

/// Record-table capacity to grow to from empty; otherwise capacity doubles.
const RECORD_GROWTH_BASE: usize = 8;

/// Fixed-capacity bump arena with in-place-or-copy reallocation.
///
/// The buffer never grows and individual allocations are never freed; the
/// whole arena is released as a unit when it is dropped. Every mutating
/// operation takes `&mut self`, so concurrent use is serialized by the
/// borrow checker rather than by any internal locking.
///
/// # Handles
///
/// [`alloc`](Arena::alloc) and [`realloc`](Arena::realloc) return a
/// [`RegionHandle`] naming the allocation's current offset. A relocating
/// resize supersedes the old handle: the call returns a new one and any
/// copy of the old handle now fails lookup with
/// [`ArenaError::UnknownHandle`].
///
/// # Destruction
///
/// Dropping the arena releases the buffer and the record table together.
/// Handles are inert offsets — no read or write is possible without a
/// borrow of the arena — so use-after-destroy is a compile error here
/// rather than the undefined behavior the raw-pointer model documents.
pub struct Arena {
    /// Backing storage. Length fixed at creation, zero-initialised.
    buffer: Vec<u8>,
    /// Bump frontier: offset of the next free byte.
    cursor: usize,
    /// One record per logical allocation, append-only, scanned linearly.
    records: Vec<AllocationRecord>,
}

impl Arena {
    /// Create an arena with a buffer of exactly `capacity` bytes.
    ///
    /// The record table is pre-sized for a handful of entries so early
    /// allocations avoid the growth path. Fails with
    /// [`ArenaError::CreationFailed`] if either the buffer or the table
    /// cannot be obtained; on failure nothing is partially constructed.
    pub fn new(capacity: usize) -> Result<Self, ArenaError> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| ArenaError::CreationFailed { capacity })?;
        buffer.resize(capacity, 0);

        let mut records = Vec::new();
        records
            .try_reserve_exact(INITIAL_RECORD_CAPACITY)
            .map_err(|_| ArenaError::CreationFailed { capacity })?;

        Ok(Self {
            buffer,
            cursor: 0,
            records,
        })
    }

    /// Bump-allocate `size` bytes.
    ///
    /// Returns a handle to the region starting at the prior cursor. Fails
    /// with [`ArenaError::CapacityExceeded`] if the request does not fit,
    /// or [`ArenaError::MetadataExhausted`] if the record table cannot grow
    /// to hold the new entry. Either failure leaves the arena unchanged:
    /// the capacity check and the metadata check both precede any mutation.
    pub fn alloc(&mut self, size: usize) -> Result<RegionHandle, ArenaError> {
        let new_cursor = self.checked_frontier(size)?;
        self.ensure_record_capacity()?;

        let offset = self.cursor;
        self.cursor = new_cursor;
        self.records.push(AllocationRecord { offset, size });
        Ok(RegionHandle::new(offset))
    }

    /// Resize an existing allocation to `new_size` bytes.
    ///
    /// - `handle == None` behaves exactly like [`alloc`](Arena::alloc).
    /// - `new_size == 0` fails with [`ArenaError::ZeroSizeResize`]; the
    ///   arena has no per-allocation free, and the original allocation is
    ///   left fully intact and usable.
    /// - A handle with no live record — foreign, or stale after an earlier
    ///   relocating resize — fails with [`ArenaError::UnknownHandle`].
    /// - If the allocation is the tail (its end coincides with the cursor)
    ///   and the adjusted cursor fits, the resize happens in place: same
    ///   handle back, no copy. Shrinking the tail always succeeds.
    /// - Otherwise a fresh region is bump-allocated at the cursor
    ///   ([`ArenaError::CapacityExceeded`] if it does not fit, arena
    ///   unchanged), `min(old, new)` bytes are copied across, and the
    ///   existing record is rewritten to the new location. The old region
    ///   becomes dead space: unreachable through any handle, not zeroed,
    ///   and never reclaimed until the arena is dropped.
    pub fn realloc(
        &mut self,
        handle: Option<RegionHandle>,
        new_size: usize,
    ) -> Result<RegionHandle, ArenaError> {
        let Some(handle) = handle else {
            return self.alloc(new_size);
        };
        if new_size == 0 {
            return Err(ArenaError::ZeroSizeResize {
                offset: handle.offset,
            });
        }

        let index = self.find_record(handle.offset)?;
        let record = self.records[index];

        match plan_resize(&record, self.cursor, self.buffer.len(), new_size) {
            ResizePlan::InPlace { new_cursor } => {
                self.cursor = new_cursor;
                self.records[index].size = new_size;
                Ok(handle)
            }
            ResizePlan::Relocate => {
                let new_cursor = self.checked_frontier(new_size)?;
                let new_offset = self.cursor;

                let copy_len = record.size.min(new_size);
                self.buffer
                    .copy_within(record.offset..record.offset + copy_len, new_offset);

                self.cursor = new_cursor;
                self.records[index] = AllocationRecord {
                    offset: new_offset,
                    size: new_size,
                };
                Ok(RegionHandle::new(new_offset))
            }
        }
    }

    /// Read access to a live allocation's bytes.
    pub fn bytes(&self, handle: RegionHandle) -> Result<&[u8], ArenaError> {
        let index = self.find_record(handle.offset)?;
        let record = self.records[index];
        Ok(&self.buffer[record.offset..record.offset + record.size])
    }

    /// Write access to a live allocation's bytes.
    pub fn bytes_mut(&mut self, handle: RegionHandle) -> Result<&mut [u8], ArenaError> {
        let index = self.find_record(handle.offset)?;
        let record = self.records[index];
        Ok(&mut self.buffer[record.offset..record.offset + record.size])
    }

    /// Current size in bytes of a live allocation.
    pub fn size_of(&self, handle: RegionHandle) -> Result<usize, ArenaError> {
        let index = self.find_record(handle.offset)?;
        Ok(self.records[index].size)
    }

    /// Total buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes consumed so far (the bump cursor).
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Bytes remaining between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Number of logical allocations ever made. Non-decreasing: records
    /// are mutated by resizes but never removed.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Bytes currently reachable through handles (sum of record sizes).
    pub fn live_bytes(&self) -> usize {
        self.records.iter().map(|r| r.size).sum()
    }

    /// Bytes consumed but no longer reachable — regions abandoned by
    /// relocating resizes. Never reclaimed until the arena is dropped.
    pub fn dead_bytes(&self) -> usize {
        self.cursor - self.live_bytes()
    }

    /// Memory footprint of the arena itself: buffer plus record table.
    pub fn memory_bytes(&self) -> usize {
        self.buffer.len() + self.records.capacity() * std::mem::size_of::<AllocationRecord>()
    }

    /// Cursor after an allocation of `size` at the current frontier, or
    /// `CapacityExceeded` if it would pass the end of the buffer. An
    /// overflowing `cursor + size` can never fit and reports the same way.
    fn checked_frontier(&self, size: usize) -> Result<usize, ArenaError> {
        match self.cursor.checked_add(size) {
            Some(new_cursor) if new_cursor <= self.buffer.len() => Ok(new_cursor),
            _ => Err(ArenaError::CapacityExceeded {
                requested: size,
                remaining: self.remaining(),
            }),
        }
    }

    /// Make room in the record table for one more entry, doubling its
    /// capacity when full. Called before any cursor mutation so a growth
    /// failure leaves the arena's data state untouched.
    fn ensure_record_capacity(&mut self) -> Result<(), ArenaError> {
        if self.records.len() < self.records.capacity() {
            return Ok(());
        }
        let new_capacity = if self.records.capacity() == 0 {
            RECORD_GROWTH_BASE
        } else {
            self.records.capacity() * 2
        };
        let additional = new_capacity - self.records.len();
        self.records
            .try_reserve_exact(additional)
            .map_err(|_| ArenaError::MetadataExhausted {
                records: self.records.len(),
            })
    }

    /// Locate the record whose current offset matches, by linear scan.
    ///
    /// Offset identity is the lookup key: a stale handle — one superseded
    /// by a relocating resize — no longer matches any record and fails
    /// here, before any mutation.
    fn find_record(&self, offset: usize) -> Result<usize, ArenaError> {
        self.records
            .iter()
            .position(|r| r.offset == offset)
            .ok_or(ArenaError::UnknownHandle { offset })
    }
}
