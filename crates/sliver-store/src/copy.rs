//! Bulk element transfer between views.
//!
//! Copy never allocates and never changes either view's length or
//! capacity. It copies `min(dst.len(), src.len())` elements in address
//! order. When both views sit in the same store the result is as if `src`
//! had been read in full before any write.

use std::sync::Arc;

use crate::view::SliceView;

/// Copy `src` into `dst`, returning the number of elements copied.
pub fn copy_into<T: Clone>(dst: &SliceView<T>, src: &SliceView<T>) -> usize {
    let count = dst.len.min(src.len);
    if count == 0 {
        return 0;
    }

    if Arc::ptr_eq(&dst.store, &src.store) {
        let mut data = dst.store.write();
        let (to, from) = (dst.offset, src.offset);
        if to < from {
            for i in 0..count {
                let value = data[from + i].clone();
                data[to + i] = value;
            }
        } else if to > from {
            for i in (0..count).rev() {
                let value = data[from + i].clone();
                data[to + i] = value;
            }
        }
        return count;
    }

    // Lock in store-id order so opposing copies between the same pair of
    // stores cannot deadlock.
    let dst_range = dst.offset..dst.offset + count;
    let src_range = src.offset..src.offset + count;
    if dst.store.id() < src.store.id() {
        let mut to = dst.store.write();
        let from = src.store.read();
        to[dst_range].clone_from_slice(&from[src_range]);
    } else {
        let from = src.store.read();
        let mut to = dst.store.write();
        to[dst_range].clone_from_slice(&from[src_range]);
    }
    count
}

impl<T: Clone> SliceView<T> {
    /// Copy `src` into `self`; see [`copy_into`].
    pub fn copy_from(&self, src: &Self) -> usize {
        copy_into(self, src)
    }
}

impl<T: Clone + Default> SliceView<T> {
    /// An independent copy of the visible elements, in a fresh store of
    /// exactly `len` elements.
    pub fn duplicate(&self) -> Self {
        let copy = Self::make(self.len);
        copy_into(&copy, self);
        copy
    }
}
