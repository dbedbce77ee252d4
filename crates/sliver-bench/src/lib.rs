//! Benchmark profiles for the Sliver sequence views.
//!
//! - [`filled`]: a full view of `n` sequential integers
//! - [`with_headroom`]: `n` elements with `n` spare slots for in-place appends

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sliver_store::SliceView;

/// Element count used by the "small" profiles (stays in the doubling regime).
pub const SMALL: usize = 512;

/// Element count used by the "large" profiles (proportional growth regime).
pub const LARGE: usize = 100_000;

/// A full view (`len == capacity == n`) holding `0..n`.
pub fn filled(n: usize) -> SliceView<u64> {
    (0..n as u64).collect()
}

/// `n` sequential elements in a store of capacity `2 * n`.
pub fn with_headroom(n: usize) -> SliceView<u64> {
    let view = SliceView::with_capacity(n, 2 * n);
    view.copy_from(&filled(n));
    view
}
