//! Heap items: a priority paired with an opaque payload
//!
//! The priority decides where an item sits in the heap. The payload is caller
//! data carried alongside and never inspected by any heap operation.

use std::fmt;

/// A `(priority, payload)` pair stored in a heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeapItem<P, T> {
    /// Ordering key
    pub priority: P,
    /// Caller data
    pub payload: T,
}

impl<P, T> HeapItem<P, T> {
    /// Creates a new item
    pub fn new(priority: P, payload: T) -> Self {
        Self { priority, payload }
    }

    /// Splits the item back into its `(priority, payload)` pair
    pub fn into_pair(self) -> (P, T) {
        (self.priority, self.payload)
    }

    /// Borrows both halves of the item
    ///
    /// `&P` orders the same way `P` does, so a slice of borrowed items that
    /// mirrors a valid heap is itself a valid heap.
    pub fn as_ref(&self) -> HeapItem<&P, &T> {
        HeapItem {
            priority: &self.priority,
            payload: &self.payload,
        }
    }
}

impl<P, T> From<(P, T)> for HeapItem<P, T> {
    fn from((priority, payload): (P, T)) -> Self {
        Self::new(priority, payload)
    }
}

impl<P, T> From<HeapItem<P, T>> for (P, T) {
    fn from(item: HeapItem<P, T>) -> Self {
        item.into_pair()
    }
}

impl<P: fmt::Display, T: fmt::Display> fmt::Display for HeapItem<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.priority, self.payload)
    }
}
