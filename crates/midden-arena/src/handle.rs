//! Opaque handles to arena allocations.
//!
//! A [`RegionHandle`] stands in for the raw pointer a C arena would return:
//! it encodes the allocation's current byte offset within the arena buffer.
//! Handle identity is how [`realloc`](crate::Arena::realloc) and the
//! accessors find the backing record, so a handle kept across a relocating
//! resize goes stale exactly like a moved-from pointer would — the lookup
//! fails with [`UnknownHandle`](crate::ArenaError::UnknownHandle) instead of
//! reading dead bytes.

use std::fmt;

/// Arena-relative location of a live allocation.
///
/// Handles are plain offsets with no referent of their own; reading or
/// writing the allocation requires the arena itself, so a handle cannot
/// outlive the data it names in any observable way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct RegionHandle {
    /// Current byte offset of the allocation within the arena buffer.
    pub(crate) offset: usize,
}

impl RegionHandle {
    /// Create a handle at the given offset.
    pub(crate) fn new(offset: usize) -> Self {
        Self { offset }
    }

    /// The allocation's byte offset within the arena buffer.
    ///
    /// Valid only until the allocation is next resized through the
    /// relocating path, at which point the handle returned by that
    /// `realloc` call supersedes this one.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for RegionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionHandle(off={})", self.offset)
    }
}
