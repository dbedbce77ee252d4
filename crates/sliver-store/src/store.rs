//! Fixed-capacity contiguous backing stores.
//!
//! A [`Store`] is a single allocation of `capacity` homogeneous elements,
//! created once and never resized in place. Stores are only allocated by
//! view constructors and reallocating appends. Views reference a store
//! through an `Arc`, so it is freed as a whole when the last view (or
//! element reference) pointing into it is dropped.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sliver_core::{ElementAddr, StoreId};
use tracing::{event, Level};

/// A single contiguous backing allocation.
///
/// Elements live behind one `RwLock`: any number of readers may share the
/// store, and every mutation (`set`, in-place append, copy) holds the
/// write lock for the duration of the call.
pub struct Store<T> {
    id: StoreId,
    /// Fixed at creation; mirrors `data.len()` without taking the lock.
    capacity: usize,
    data: RwLock<Box<[T]>>,
}

impl<T: Default> Store<T> {
    /// Allocate a store of `capacity` default-initialised elements.
    pub(crate) fn zeroed(capacity: usize) -> Arc<Self> {
        Self::from_boxed(std::iter::repeat_with(T::default).take(capacity).collect())
    }
}

impl<T> Store<T> {
    /// Take ownership of `data` as a store whose capacity is `data.len()`.
    pub(crate) fn from_vec(data: Vec<T>) -> Arc<Self> {
        Self::from_boxed(data.into_boxed_slice())
    }

    fn from_boxed(data: Box<[T]>) -> Arc<Self> {
        let id = StoreId::next();
        let capacity = data.len();
        event!(
            Level::TRACE,
            message = "store allocated",
            store = %id,
            capacity,
        );
        Arc::new(Self {
            id,
            capacity,
            data: RwLock::new(data),
        })
    }

    /// This store's unique identity.
    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Total number of elements in the store.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Memory usage of the element storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<T>()
    }

    /// Address of the element at `offset`.
    pub fn addr(&self, offset: usize) -> ElementAddr {
        ElementAddr {
            store: self.id,
            offset,
            byte_offset: offset * std::mem::size_of::<T>(),
        }
    }

    /// Shared access to the elements.
    ///
    /// Lock poisoning is ignored: the slice is always fully initialised,
    /// so a panic in another holder cannot leave it torn.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Box<[T]>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access to the elements.
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Box<[T]>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn zeroed_store_is_default_initialised() {
        let store = Store::<u32>::zeroed(16);
        assert_eq!(store.capacity(), 16);
        assert!(store.read().iter().all(|&v| v == 0));
    }

    #[test]
    fn zeroed_strings_are_empty() {
        let store = Store::<String>::zeroed(3);
        assert!(store.read().iter().all(String::is_empty));
    }

    #[test]
    fn from_vec_keeps_contents() {
        let store = Store::from_vec(vec![1, 2, 3]);
        assert_eq!(store.capacity(), 3);
        assert_eq!(&store.read()[..], &[1, 2, 3]);
    }

    #[test]
    fn write_is_visible_to_later_reads() {
        let store = Store::<i64>::zeroed(4);
        store.write()[2] = 42;
        assert_eq!(store.read()[2], 42);
    }

    #[test]
    fn each_store_gets_a_distinct_id() {
        let a = Store::<u8>::zeroed(1);
        let b = Store::<u8>::zeroed(1);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn addresses_are_one_element_apart() {
        let store = Store::<u64>::zeroed(4);
        let a0 = store.addr(0);
        let a1 = store.addr(1);
        assert_eq!(a1.byte_offset - a0.byte_offset, 8);
        assert_eq!(a1.store, store.id());
    }

    #[test]
    fn memory_bytes_accounts_for_element_size() {
        let store = Store::<u32>::zeroed(10);
        assert_eq!(store.memory_bytes(), 40);
    }

    #[test]
    fn empty_store_is_valid() {
        let store = Store::<String>::zeroed(0);
        assert_eq!(store.capacity(), 0);
        assert_eq!(store.memory_bytes(), 0);
    }

    #[test]
    #[traced_test]
    fn allocation_is_logged_with_capacity() {
        let store = Store::<u8>::zeroed(12);
        assert!(logs_contain("store allocated"));
        assert!(logs_contain("capacity=12"));
        assert!(logs_contain(&format!("store={}", store.id())));
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let store = Store::<u8>::zeroed(2);
        let cloned = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = cloned.write();
            panic!("poison the lock");
        })
        .join();
        store.write()[0] = 9;
        assert_eq!(store.read()[0], 9);
    }
}
