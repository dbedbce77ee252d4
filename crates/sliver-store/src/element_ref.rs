//! References to a single element of a store.
//!
//! An [`ElementRef`] is what taking the address of `view[i]` yields: it is
//! bound to one offset of one store, not to the view it came from. It
//! keeps that store alive, so it cannot dangle. Once the view detaches
//! through a reallocating append, the reference and the view refer to
//! different stores and stop observing each other's writes.

use std::fmt;
use std::sync::Arc;

use sliver_core::{ElementAddr, SliceError};

use crate::store::Store;
use crate::view::SliceView;

/// A handle to one element of a [`Store`].
pub struct ElementRef<T> {
    store: Arc<Store<T>>,
    offset: usize,
}

impl<T> ElementRef<T> {
    /// Address of the referenced element.
    pub fn addr(&self) -> ElementAddr {
        self.store.addr(self.offset)
    }

    /// Overwrite the referenced element.
    pub fn set(&self, value: T) {
        self.store.write()[self.offset] = value;
    }
}

impl<T: Clone> ElementRef<T> {
    /// Read the referenced element.
    pub fn get(&self) -> T {
        self.store.read()[self.offset].clone()
    }
}

impl<T> Clone for ElementRef<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            offset: self.offset,
        }
    }
}

impl<T> fmt::Debug for ElementRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementRef").field(&self.addr()).finish()
    }
}

impl<T> SliceView<T> {
    /// Reference to visible element `index`.
    pub fn element_ref(&self, index: usize) -> Result<ElementRef<T>, SliceError> {
        let offset = self.check_index(index)?;
        Ok(ElementRef {
            store: Arc::clone(&self.store),
            offset,
        })
    }
}
