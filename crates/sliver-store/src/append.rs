//! Append: in-place write when capacity allows, otherwise detach.
//!
//! Appending `k` elements to a view of length `len` and capacity `cap`:
//!
//! - `len + k <= cap`: the elements are written into the *same* store at
//!   offsets `len..len + k` (relative to the view's base). The returned view
//!   shares the store. Other views keep their own lengths; any of them whose
//!   range covers those offsets sees the new values. That overwrite is the
//!   hazard capacity-limited sub-views exist to prevent.
//! - `len + k > cap`: the growth policy picks a capacity for the final
//!   length in one step, a fresh store is allocated, the `len` visible
//!   elements are copied over in address order, then the new elements
//!   follow. The returned view is detached: nothing else references the new
//!   store, and the old store is left untouched.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{event, Level};

use crate::growth::GrowthPolicy;
use crate::store::Store;
use crate::view::SliceView;

/// Staging buffer for batch appends; small batches stay on the stack.
type Batch<T> = SmallVec<[T; 8]>;

impl<T: Clone + Default> SliceView<T> {
    /// Append one element using the standard growth policy.
    #[must_use = "append returns the grown view; the receiver keeps its old length"]
    pub fn append(&self, value: T) -> Self {
        self.append_with(&GrowthPolicy::STANDARD, value)
    }

    /// Append one element using `policy` if growth is needed.
    #[must_use = "append returns the grown view; the receiver keeps its old length"]
    pub fn append_with(&self, policy: &GrowthPolicy, value: T) -> Self {
        let mut batch = Batch::new();
        batch.push(value);
        self.append_batch(policy, batch)
    }

    /// Append every item of `items` as one batch.
    ///
    /// Capacity is computed for the final length, so the batch reallocates
    /// at most once.
    #[must_use = "extend returns the grown view; the receiver keeps its old length"]
    pub fn extend<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.extend_with(&GrowthPolicy::STANDARD, items)
    }

    /// [`extend`](Self::extend) with an explicit growth policy.
    #[must_use = "extend returns the grown view; the receiver keeps its old length"]
    pub fn extend_with<I>(&self, policy: &GrowthPolicy, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.append_batch(policy, items.into_iter().collect())
    }

    /// Append all visible elements of `other`.
    ///
    /// `other` may alias `self`; it is read in full before anything is
    /// written.
    #[must_use = "append_view returns the grown view; the receiver keeps its old length"]
    pub fn append_view(&self, other: &Self) -> Self {
        let batch: Batch<T> = {
            let data = other.store.read();
            data[other.offset..other.offset + other.len]
                .iter()
                .cloned()
                .collect()
        };
        self.append_batch(&GrowthPolicy::STANDARD, batch)
    }

    /// Append in place, replacing `self` with the grown view.
    pub fn push(&mut self, value: T) {
        *self = self.append(value);
    }

    fn append_batch(&self, policy: &GrowthPolicy, batch: Batch<T>) -> Self {
        if batch.is_empty() {
            return self.clone();
        }
        let needed = match self.len.checked_add(batch.len()) {
            Some(needed) => needed,
            None => capacity_overflow(),
        };

        if needed <= self.capacity {
            let start = self.offset + self.len;
            let mut data = self.store.write();
            for (slot, value) in data[start..start + batch.len()].iter_mut().zip(batch) {
                *slot = value;
            }
            return Self {
                store: Arc::clone(&self.store),
                offset: self.offset,
                len: needed,
                capacity: self.capacity,
            };
        }

        let capacity = policy.grow(self.capacity, needed);
        let mut data = Vec::with_capacity(capacity);
        data.extend_from_slice(&self.store.read()[self.offset..self.offset + self.len]);
        data.extend(batch);
        data.resize_with(capacity, T::default);
        let store = Store::from_vec(data);

        event!(
            Level::DEBUG,
            message = "append detached view",
            from = %self.store.id(),
            to = %store.id(),
            old_capacity = self.capacity,
            new_capacity = capacity,
            len = needed,
        );

        Self {
            store,
            offset: 0,
            len: needed,
            capacity,
        }
    }
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
