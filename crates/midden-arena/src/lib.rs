//! Fixed-capacity bump arena with in-place-or-copy reallocation.
//!
//! An [`Arena`] owns a contiguous byte buffer whose size is fixed at
//! creation and a growable side table of allocation records. There is no
//! per-allocation free: memory is handed out by bumping a cursor, resized
//! either in place (tail allocations only) or by copying to a fresh region,
//! and reclaimed all at once when the arena is dropped.
//!
//! # Architecture
//!
//! ```text
//! Arena
//! ├── buffer: Vec<u8>              fixed capacity, zero-initialised
//! ├── cursor: usize                bump frontier
//! └── records: Vec<AllocationRecord>
//!         one {offset, size} entry per logical allocation,
//!         append-only, mutated in place by realloc, never removed
//! ```
//!
//! Callers hold [`RegionHandle`]s — opaque arena-relative offsets — rather
//! than raw pointers. A relocating resize supersedes the caller's handle;
//! the stale one then fails lookup with [`ArenaError::UnknownHandle`]
//! instead of aliasing dead bytes. The region abandoned by a relocation
//! stays inside the buffer as unreclaimed dead space: a deliberate
//! capacity-for-simplicity trade, not an oversight.
//!
//! # Safety
//!
//! The entire crate is safe Rust: storage is `Vec`-backed, handles carry no
//! referent, and all access is bounds-checked against the record table.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod error;
pub mod handle;
mod record;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use error::ArenaError;
pub use handle::RegionHandle;
