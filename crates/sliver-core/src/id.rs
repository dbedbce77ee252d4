//! Strongly-typed identifiers for stores and element addresses.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`StoreId`] allocation.
static STORE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-allocation identifier for a backing store.
///
/// Allocated from a monotonic atomic counter via [`StoreId::next`]. Two
/// stores never share an ID within a process, even if one is dropped and
/// another is allocated at the same address, so the ID is a stable stand-in
/// for "the same allocation" in aliasing checks and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreId(u64);

impl StoreId {
    /// Allocate a fresh, unique store ID. Thread-safe.
    pub fn next() -> Self {
        Self(STORE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store#{}", self.0)
    }
}

/// Location of one element inside a backing store.
///
/// `offset` counts elements from the start of the store; `byte_offset` is
/// `offset * size_of::<T>()`. Consecutive elements of a view are exactly
/// one element size apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementAddr {
    /// The store holding the element.
    pub store: StoreId,
    /// Element offset from the start of the store.
    pub offset: usize,
    /// Byte offset from the start of the store.
    pub byte_offset: usize,
}

impl fmt::Display for ElementAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{:#x}", self.store, self.byte_offset)
    }
}
