//! Shared backing stores and growable views over them.
//!
//! A [`SliceView`] is a small `(store, offset, len, capacity)` value over a
//! reference-counted, fixed-capacity [`Store`]. Views are cheap to clone
//! and may alias the same store; writes through one are visible through
//! every other view covering the same offsets.
//!
//! # Architecture
//!
//! ```text
//! SliceView (value: Arc<Store>, offset, len, capacity)
//! ├── Store (fixed-capacity Box<[T]> behind an RwLock, StoreId)
//! ├── append  → in-place write, or GrowthPolicy + fresh Store (detach)
//! ├── subview → same Store, shifted base, inherited or capped capacity
//! ├── copy    → element transfer between Stores, never allocates
//! ├── ElementRef (pins one element of one Store)
//! └── Inspection (len, capacity, per-element addresses)
//! ```
//!
//! # Aliasing contract
//!
//! - A sub-view inherits all of its parent's remaining capacity. Appending
//!   to it in place overwrites whatever the parent (or a sibling) holds at
//!   those offsets.
//! - A capacity-limited sub-view ([`SliceView::subview_capped`]) makes the
//!   first append past the cap detach onto a new store instead.
//! - Copy never aliases: destination and source stay independent.
//!
//! Stores are freed when the last view or [`ElementRef`] referencing them
//! is dropped; views cannot dangle.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod append;
pub mod config;
pub mod copy;
pub mod element_ref;
pub mod growth;
pub mod inspect;
pub mod store;
mod subview;
pub mod view;

// Public re-exports for the primary API surface.
pub use config::GrowthConfig;
pub use copy::copy_into;
pub use element_ref::ElementRef;
pub use growth::{CapacityChange, GrowthPolicy, GrowthTrace};
pub use inspect::{InspectedElement, Inspection};
pub use store::Store;
pub use view::{Iter, SliceView};
