//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
///
/// Every failing operation leaves the arena completely unchanged — checks
/// are ordered so that all of them pass before any field is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The backing buffer or the record table could not be obtained at
    /// creation time. No partial arena exists after this error.
    CreationFailed {
        /// Requested buffer capacity in bytes.
        capacity: usize,
    },
    /// The requested (re)allocation does not fit in the remaining capacity.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes remaining between the cursor and the end of the buffer.
        remaining: usize,
    },
    /// The record table could not grow to hold one more entry. Distinct
    /// from [`ArenaError::CapacityExceeded`]: this reflects system memory
    /// pressure, not arena capacity. The cursor and buffer are untouched.
    MetadataExhausted {
        /// Number of records at the time of the failed growth.
        records: usize,
    },
    /// A handle with no live record in this arena — either foreign, or
    /// stale because a relocating resize has since moved the allocation.
    UnknownHandle {
        /// The offset encoded in the handle.
        offset: usize,
    },
    /// A resize to zero bytes. The arena has no per-allocation free, so
    /// this is rejected and the original allocation is left fully intact.
    ZeroSizeResize {
        /// The offset of the allocation that was left untouched.
        offset: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreationFailed { capacity } => {
                write!(f, "arena creation failed: could not obtain {capacity} bytes")
            }
            Self::CapacityExceeded {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, {remaining} remaining"
                )
            }
            Self::MetadataExhausted { records } => {
                write!(f, "record table could not grow past {records} entries")
            }
            Self::UnknownHandle { offset } => {
                write!(f, "no live allocation at offset {offset}")
            }
            Self::ZeroSizeResize { offset } => {
                write!(
                    f,
                    "zero-size resize of allocation at offset {offset}: the arena has no free"
                )
            }
        }
    }
}

impl Error for ArenaError {}
