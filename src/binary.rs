//! Dynamic binary heap
//!
//! A binary heap over a growable vector. It has no capacity limit: storage
//! grows on push and shrinks on pop. The ordering direction is chosen with the
//! `K` type parameter and defaults to [`Min`].
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `push`             | O(log n)   |
//! | `pop`              | O(log n)   |
//! | `peek`             | O(1)       |
//! | `update_key`       | O(log n)   |
//! | `from_items`       | O(n)       |
//! | `sorted_payloads`  | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::PriorityQueue;
//! use rust_binary_heaps::binary::BinaryHeap;
//!
//! let mut heap: BinaryHeap<&str, i32> = BinaryHeap::new();
//! heap.push(3, "three").unwrap();
//! heap.push(1, "one").unwrap();
//! heap.push(2, "two").unwrap();
//!
//! assert_eq!(heap.sorted_payloads(), vec![&"one", &"two", &"three"]);
//! assert_eq!(heap.len(), 3);
//!
//! // Move "three" to the front
//! let position = heap.position_of(|item| item.payload == "three").unwrap();
//! heap.update_key(position, 0).unwrap();
//! assert_eq!(heap.pop().unwrap().payload, "three");
//! ```

use std::marker::PhantomData;

use log::{debug, trace};

use crate::display::TreeDisplay;
use crate::item::HeapItem;
use crate::kind::{Kind, Min};
use crate::raw::{self, KeyChange};
use crate::traits::{HeapError, PriorityQueue};

/// A binary heap with dynamic storage
///
/// Stores `(priority, payload)` pairs and always yields the item whose
/// priority is best under `K` first.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, P: Ord, K: Kind = Min> {
    /// Live items in heap order
    data: Vec<HeapItem<P, T>>,
    _kind: PhantomData<K>,
}

impl<T, P: Ord, K: Kind> BinaryHeap<T, P, K> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            _kind: PhantomData,
        }
    }

    /// Creates an empty heap with room for `capacity` items before it
    /// reallocates
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            _kind: PhantomData,
        }
    }

    /// Builds a heap from an arbitrary collection in O(n)
    pub fn from_items<I, E>(items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<HeapItem<P, T>>,
    {
        let mut data: Vec<HeapItem<P, T>> = items.into_iter().map(Into::into).collect();
        raw::build_heap::<K, P, T>(&mut data);
        debug!("built {}-heap of {} items", K::name(), data.len());
        Self {
            data,
            _kind: PhantomData,
        }
    }

    /// Returns all payloads ordered best-first without modifying the heap
    ///
    /// For a min-heap this is non-decreasing priority order.
    pub fn sorted_payloads(&self) -> Vec<&T> {
        let mut scratch: Vec<HeapItem<&P, &T>> = self.data.iter().map(HeapItem::as_ref).collect();
        let mut sorted = Vec::with_capacity(scratch.len());
        while let Some(item) = raw::pop_root::<K, &P, &T>(&mut scratch) {
            sorted.push(item.payload);
        }
        debug!("sorted {} payloads of {}-heap", sorted.len(), K::name());
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
    ///
    /// Positions shift on every mutation, so look them up again right before
    /// calling a key update.
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

    /// Removes every item
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning the backing vector in position order
    pub fn into_vec(self) -> Vec<HeapItem<P, T>> {
        self.data
    }

    /// Returns a renderer that draws the heap as an ASCII tree
    pub fn tree(&self) -> TreeDisplay<'_, P, T> {
        TreeDisplay::new(&self.data)
    }
}

impl<T, P: Ord, K: Kind> PriorityQueue<T, P> for BinaryHeap<T, P, K> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, priority: P, payload: T) -> Result<(), HeapError> {
        self.data.push(HeapItem::new(priority, payload));
        let last = self.data.len() - 1;
        let at = raw::sift_up::<K, P, T>(&mut self.data, last);
        trace!("{}-heap push settled at {at}", K::name());
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

impl<T, P: Ord, K: Kind> Default for BinaryHeap<T, P, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord, K: Kind> From<Vec<HeapItem<P, T>>> for BinaryHeap<T, P, K> {
    fn from(data: Vec<HeapItem<P, T>>) -> Self {
        Self::from_items(data)
    }
}

impl<T, P: Ord, K: Kind> FromIterator<(P, T)> for BinaryHeap<T, P, K> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T, P: Ord, K: Kind> Extend<(P, T)> for BinaryHeap<T, P, K> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, payload) in iter {
            self.data.push(HeapItem::new(priority, payload));
            let last = self.data.len() - 1;
            raw::sift_up::<K, P, T>(&mut self.data, last);
        }
    }
}

impl<'a, T, P: Ord, K: Kind> IntoIterator for &'a BinaryHeap<T, P, K> {
    type Item = &'a HeapItem<P, T>;
    type IntoIter = std::slice::Iter<'a, HeapItem<P, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
