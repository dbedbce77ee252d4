//! Test fixtures and logging setup for Sliver development.
//!
//! Provides the standard views used across the test suites
//! ([`fixtures`]) and [`log_to_stdout`] for tests that want to see the
//! store allocation and detach events.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::Once;

use tracing::Level;

static LOGGING: Once = Once::new();

/// Route `tracing` events at TRACE and above to the test output.
///
/// Safe to call from every test: the subscriber is installed at most once
/// per process, and a subscriber installed by someone else wins.
pub fn log_to_stdout() {
    LOGGING.call_once(|| {
        // Another global subscriber may already be installed; keep it.
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

pub use fixtures::{
    fruits, fruits_with_spare_capacity, hundreds, names, records, FRUITS, NAMES,
};
