//! Sub-views: new views aliasing a sub-range of an existing store.
//!
//! [`SliceView::subview`] inherits all of the parent's remaining capacity,
//! so a later in-place append through the sub-view writes into slots that
//! sibling views may still be using. [`SliceView::subview_capped`] bounds
//! that capacity, forcing such an append to detach instead.
//!
//! Neither form allocates or consults the growth policy.

use std::sync::Arc;

use sliver_core::SliceError;

use crate::view::SliceView;

impl<T> SliceView<T> {
    /// View elements `lo..hi` of `self`, with capacity `capacity - lo`.
    ///
    /// Fails with [`SliceError::InvalidRange`] unless `lo <= hi <= len`.
    pub fn subview(&self, lo: usize, hi: usize) -> Result<Self, SliceError> {
        if lo > hi || hi > self.len {
            return Err(self.invalid_range(lo, hi, None));
        }
        Ok(self.window(lo, hi, self.capacity))
    }

    /// View elements `lo..hi` of `self`, with capacity `max - lo`.
    ///
    /// Fails with [`SliceError::InvalidRange`] unless
    /// `lo <= hi <= len` and `hi <= max <= capacity`.
    pub fn subview_capped(&self, lo: usize, hi: usize, max: usize) -> Result<Self, SliceError> {
        if lo > hi || hi > self.len || hi > max || max > self.capacity {
            return Err(self.invalid_range(lo, hi, Some(max)));
        }
        Ok(self.window(lo, hi, max))
    }

    /// Bounds already checked: `lo <= hi <= max <= self.capacity`.
    fn window(&self, lo: usize, hi: usize, max: usize) -> Self {
        Self {
            store: Arc::clone(&self.store),
            offset: self.offset + lo,
            len: hi - lo,
            capacity: max - lo,
        }
    }

    fn invalid_range(&self, lo: usize, hi: usize, max: Option<usize>) -> SliceError {
        SliceError::InvalidRange {
            lo,
            hi,
            max,
            len: self.len,
            capacity: self.capacity,
        }
    }
}
