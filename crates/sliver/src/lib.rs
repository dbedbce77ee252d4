//! Sliver: growable views over shared, contiguous backing stores.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Sliver sub-crates. For most users, adding `sliver` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sliver::prelude::*;
//!
//! // Length 5, capacity 8.
//! let fruits = SliceView::<String>::with_capacity(5, 8);
//! for (i, name) in ["Apple", "Orange", "Banana", "Grape", "Plum"].iter().enumerate() {
//!     fruits.set(i, name.to_string()).unwrap();
//! }
//!
//! // A sub-view inherits the parent's spare capacity, so appending to it
//! // in place overwrites the parent's element at index 4.
//! let middle = fruits.subview(2, 4).unwrap();
//! let grown = middle.extend(["X".to_string(), "X".to_string(), "X".to_string()]);
//! assert!(grown.shares_store(&fruits));
//! assert_eq!(fruits.get(4).unwrap(), "X");
//!
//! // Capping capacity makes the first append detach onto a new store.
//! let capped = fruits.subview_capped(0, 2, 2).unwrap();
//! let detached = capped.append("Kiwi".to_string());
//! assert!(!detached.shares_store(&fruits));
//! assert_eq!(fruits.get(2).unwrap(), "Banana");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sliver-core` | Errors and identifiers |
//! | [`store`] | `sliver-store` | Stores, views, growth policy, copy, inspection |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors and identifiers (`sliver-core`).
///
/// Contains [`types::SliceError`], [`types::ConfigError`],
/// [`types::StoreId`] and [`types::ElementAddr`].
pub use sliver_core as types;

/// Stores, views and the operations over them (`sliver-store`).
///
/// [`store::SliceView`] is the main type; [`store::GrowthPolicy`] controls
/// how appends size replacement stores.
pub use sliver_store as store;

/// Common imports for typical Sliver usage.
///
/// ```rust
/// use sliver::prelude::*;
/// ```
pub mod prelude {
    // Views and stores
    pub use sliver_store::{copy_into, ElementRef, SliceView, Store};

    // Growth
    pub use sliver_store::{GrowthConfig, GrowthPolicy};

    // Errors and identifiers
    pub use sliver_core::{ConfigError, ElementAddr, SliceError, StoreId};
}
