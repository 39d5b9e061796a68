//! Fixed-capacity binary heap
//!
//! A binary heap whose backing storage is allocated once, up front. The
//! number of live items can never exceed the capacity chosen at construction;
//! a push on a full heap fails with [`HeapError::CapacityExceeded`] and leaves
//! the heap unchanged. The ordering direction defaults to [`Max`].
//!
//! Each heap owns its own size counter, so any number of fixed heaps can live
//! side by side.
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::{HeapError, PriorityQueue};
//! use rust_binary_heaps::fixed::FixedHeap;
//!
//! let mut heap: FixedHeap<(), i32> = FixedHeap::with_capacity(2);
//! heap.push(20, ()).unwrap();
//! heap.push(40, ()).unwrap();
//! assert_eq!(heap.push(15, ()), Err(HeapError::CapacityExceeded { capacity: 2 }));
//!
//! assert_eq!(heap.pop().unwrap().priority, 40);
//! assert_eq!(heap.pop().unwrap().priority, 20);
//! ```

use std::marker::PhantomData;

use log::{debug, trace};

use crate::display::TreeDisplay;
use crate::item::HeapItem;
use crate::kind::{Kind, Max};
use crate::raw::{self, KeyChange};
use crate::traits::{HeapError, PriorityQueue};

/// A binary heap with a hard upper bound on its size
#[derive(Debug, Clone)]
pub struct FixedHeap<T, P: Ord, K: Kind = Max> {
    /// Live items in heap order. Allocated with exactly `capacity` slots and
    /// never grown past them.
    data: Vec<HeapItem<P, T>>,
    capacity: usize,
    _kind: PhantomData<K>,
}

impl<T, P: Ord, K: Kind> FixedHeap<T, P, K> {
    /// Creates an empty heap that can hold at most `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            _kind: PhantomData,
        }
    }

    /// Builds a heap of the given capacity from an arbitrary collection in O(n)
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityExceeded`] if the collection holds more
    /// than `capacity` items.
    pub fn from_items<I, E>(capacity: usize, items: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = E>,
        E: Into<HeapItem<P, T>>,
    {
        let mut data: Vec<HeapItem<P, T>> = Vec::with_capacity(capacity);
        for item in items {
            if data.len() == capacity {
                debug!("{}-heap build rejected: more than {capacity} items", K::name());
                return Err(HeapError::CapacityExceeded { capacity });
            }
            data.push(item.into());
        }
        raw::build_heap::<K, P, T>(&mut data);
        debug!("built fixed {}-heap of {}/{capacity} items", K::name(), data.len());
        Ok(Self {
            data,
            capacity,
            _kind: PhantomData,
        })
    }

    /// Maximum number of live items
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if a push would fail
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Returns all payloads ordered best-first without modifying the heap
    ///
    /// For the default max-heap this is non-increasing priority order.
    pub fn sorted_payloads(&self) -> Vec<&T> {
        let mut scratch: Vec<HeapItem<&P, &T>> = self.data.iter().map(HeapItem::as_ref).collect();
        let mut sorted = Vec::with_capacity(scratch.len());
        while let Some(item) = raw::pop_root::<K, &P, &T>(&mut scratch) {
            sorted.push(item.payload);
        }
        sorted
    }

    /// Consumes the heap, returning its items ordered best-first
    pub fn into_sorted_vec(mut self) -> Vec<HeapItem<P, T>> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = raw::pop_root::<K, P, T>(&mut self.data) {
            sorted.push(item);
        }
        sorted
    }

    /// Finds the current position of the first item matching `pred`
    pub fn position_of<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&HeapItem<P, T>) -> bool,
    {
        self.data.iter().position(pred)
    }

    /// Iterates over the items in position order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, HeapItem<P, T>> {
        self.data.iter()
    }

    /// Removes every item; the capacity is kept
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning the live items in position order
    pub fn into_vec(self) -> Vec<HeapItem<P, T>> {
        self.data
    }

    /// Returns a renderer that draws the heap as an ASCII tree
    pub fn tree(&self) -> TreeDisplay<'_, P, T> {
        TreeDisplay::new(&self.data)
    }
}

impl<T, P: Ord, K: Kind> PriorityQueue<T, P> for FixedHeap<T, P, K> {
    fn len(&self) -> usize {
        self.data.len()
    }

    /// Places the new item in the next free slot and lets it rise to its
    /// position, as if a worst-possible placeholder there had its key
    /// increased to `priority`.
    fn push(&mut self, priority: P, payload: T) -> Result<(), HeapError> {
        if self.is_full() {
            debug!("{}-heap push rejected: at capacity {}", K::name(), self.capacity);
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.data.push(HeapItem::new(priority, payload));
        let last = self.data.len() - 1;
        let at = raw::sift_up::<K, P, T>(&mut self.data, last);
        trace!("fixed {}-heap push settled at {at}", K::name());
        Ok(())
    }

    fn peek(&self) -> Result<&HeapItem<P, T>, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    fn pop(&mut self) -> Result<HeapItem<P, T>, HeapError> {
        raw::pop_root::<K, P, T>(&mut self.data).ok_or(HeapError::Empty)
    }

    fn update_key(&mut self, position: usize, priority: P) -> Result<usize, HeapError> {
        raw::change_key::<K, P, T>(&mut self.data, position, priority, KeyChange::Any)
    }

    fn increase_key(&mut self, position: usize, priority: P) -> Result<usize, HeapError> {
        raw::change_key::<K, P, T>(&mut self.data, position, priority, KeyChange::Increase)
    }

    fn decrease_key(&mut self, position: usize, priority: P) -> Result<usize, HeapError> {
        raw::change_key::<K, P, T>(&mut self.data, position, priority, KeyChange::Decrease)
    }

    fn as_slice(&self) -> &[HeapItem<P, T>] {
        &self.data
    }
}
