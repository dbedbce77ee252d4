//! The sequence view: a cheap `(store, offset, len, capacity)` value.
//!
//! A [`SliceView`] never owns its elements exclusively. Cloning a view
//! copies the four fields and bumps the store's reference count; the
//! elements themselves are shared. Writes through one view are visible
//! through every other view whose range covers the same store offsets.
//!
//! Views are created by:
//! - fresh allocation ([`SliceView::make`], [`SliceView::with_capacity`],
//!   [`SliceView::from_vec`] and the `From`/`FromIterator` impls),
//! - sub-viewing an existing view (see `subview`),
//! - append past capacity, which detaches onto a new store (see `append`).

use std::fmt;
use std::sync::Arc;

use sliver_core::{ElementAddr, SliceError, StoreId};

use crate::store::Store;

/// A window `[offset, offset + len)` into a shared [`Store`], with room
/// to grow in place up to `offset + capacity`.
///
/// Invariants: `len <= capacity` and `offset + capacity <= store.capacity()`.
pub struct SliceView<T> {
    pub(crate) store: Arc<Store<T>>,
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) capacity: usize,
}

impl<T: Default> SliceView<T> {
    /// The empty view: length 0, capacity 0.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Allocate a store of exactly `len` default elements and view all of it.
    pub fn make(len: usize) -> Self {
        Self::with_capacity(len, len)
    }

    /// Allocate a store of `capacity` default elements and view the first
    /// `len` of them.
    ///
    /// # Panics
    ///
    /// Panics if `len > capacity`.
    pub fn with_capacity(len: usize, capacity: usize) -> Self {
        assert!(len <= capacity, "length {len} exceeds capacity {capacity}");
        Self {
            store: Store::zeroed(capacity),
            offset: 0,
            len,
            capacity,
        }
    }
}

impl<T> SliceView<T> {
    /// View all of `data`; length and capacity both equal `data.len()`.
    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Self {
            store: Store::from_vec(data),
            offset: 0,
            len,
            capacity: len,
        }
    }

    /// Number of visible elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view has no visible elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements available from this view's base onward.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Identity of the backing store.
    pub fn store_id(&self) -> StoreId {
        self.store.id()
    }

    /// Element offset of this view's base within its store.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<Store<T>> {
        &self.store
    }

    /// Whether both views reference the same store.
    pub fn shares_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }

    /// Whether the visible ranges of both views overlap in the same store.
    ///
    /// Empty views never alias anything.
    pub fn aliases(&self, other: &Self) -> bool {
        self.shares_store(other)
            && self.len > 0
            && other.len > 0
            && self.offset < other.offset + other.len
            && other.offset < self.offset + self.len
    }

    /// Store offset of visible element `index`.
    pub(crate) fn check_index(&self, index: usize) -> Result<usize, SliceError> {
        if index < self.len {
            Ok(self.offset + index)
        } else {
            Err(SliceError::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Address of visible element `index`.
    pub fn address_of(&self, index: usize) -> Result<ElementAddr, SliceError> {
        let offset = self.check_index(index)?;
        Ok(self.store.addr(offset))
    }

    /// Overwrite visible element `index`.
    ///
    /// The write lands in the shared store and is observed by every view
    /// covering the same offset.
    pub fn set(&self, index: usize, value: T) -> Result<(), SliceError> {
        let offset = self.check_index(index)?;
        self.store.write()[offset] = value;
        Ok(())
    }
}

impl<T: Clone> SliceView<T> {
    /// Read visible element `index`.
    pub fn get(&self, index: usize) -> Result<T, SliceError> {
        let offset = self.check_index(index)?;
        Ok(self.store.read()[offset].clone())
    }

    /// Clone the visible elements into a `Vec`, in address order.
    pub fn to_vec(&self) -> Vec<T> {
        self.store.read()[self.offset..self.offset + self.len].to_vec()
    }

    /// Iterate the visible elements in address order.
    ///
    /// Each step reads the store afresh, so writes made through an aliasing
    /// view mid-iteration are observed.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            view: self,
            front: 0,
            back: self.len,
        }
    }
}

impl<T> Clone for SliceView<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            offset: self.offset,
            len: self.len,
            capacity: self.capacity,
        }
    }
}

impl<T: Default> Default for SliceView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for SliceView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceView")
            .field("store", &self.store.id())
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("elements", &self.to_vec())
            .finish()
    }
}

/// Element-wise equality of the visible ranges; capacity and store
/// identity are ignored.
impl<T: Clone + PartialEq> PartialEq for SliceView<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.to_vec() == other.to_vec()
    }
}

impl<T> From<Vec<T>> for SliceView<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T, const N: usize> From<[T; N]> for SliceView<T> {
    fn from(data: [T; N]) -> Self {
        Self::from_vec(Vec::from(data))
    }
}

impl<T> FromIterator<T> for SliceView<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T: Clone> IntoIterator for &'a SliceView<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cloned elements of a [`SliceView`].
pub struct Iter<'a, T> {
    view: &'a SliceView<T>,
    front: usize,
    back: usize,
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let value = self.view.store.read()[self.view.offset + self.front].clone();
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.view.store.read()[self.view.offset + self.back].clone())
    }
}

impl<T: Clone> ExactSizeIterator for Iter<'_, T> {}
