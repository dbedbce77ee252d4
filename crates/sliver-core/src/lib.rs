//! Core types and errors for the Sliver sequence views.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error taxonomy shared by every view operation and the
//! strongly-typed identifiers used to talk about backing stores and
//! element addresses.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{ConfigError, SliceError};
pub use id::{ElementAddr, StoreId};
