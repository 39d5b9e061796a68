//! Common traits for heap data structures
//!
//! This module provides the error type shared by every heap in the crate and
//! the [`PriorityQueue`] trait implemented by both storage disciplines:
//!
//! - [`BinaryHeap`](crate::binary::BinaryHeap): dynamic storage, never full
//! - [`FixedHeap`](crate::fixed::FixedHeap): preallocated storage with a hard capacity
//!
//! Positions used by the key-update operations are 0-based indices into the
//! live range `0..len()`. They are not stable: any push, pop or key update may
//! move items around, so a position must be re-resolved (for example with
//! `position_of`) after every mutation.

use thiserror::Error;

use crate::item::HeapItem;

/// Error type for heap operations
///
/// Every operation that returns an error leaves the heap exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Peek or pop on a heap with no items
    #[error("heap is empty")]
    Empty,
    /// Push on a fixed-capacity heap that is full
    #[error("heap is at capacity ({capacity} items)")]
    CapacityExceeded {
        /// The heap's fixed capacity
        capacity: usize,
    },
    /// A position outside the live range `0..len`
    #[error("position {position} is out of range for a heap of {len} items")]
    InvalidPosition {
        /// The rejected position
        position: usize,
        /// Number of live items at the time of the call
        len: usize,
    },
    /// `increase_key` asked to lower a priority, or `decrease_key` to raise one
    #[error("new priority for position {position} moves in the wrong direction")]
    OrderingViolation {
        /// The position whose update was rejected
        position: usize,
    },
}

/// Base trait for binary heap priority queues
///
/// Items are `(priority, payload)` pairs. Which end of the ordering comes out
/// first is decided by the heap's [`Kind`](crate::kind::Kind).
///
/// # Example
///
/// ```rust
/// use rust_binary_heaps::PriorityQueue;
/// use rust_binary_heaps::binary::BinaryHeap;
///
/// let mut heap: BinaryHeap<&str, i32> = BinaryHeap::new();
/// heap.push(8, "a").unwrap();
/// heap.push(29, "b").unwrap();
///
/// assert_eq!(heap.peek().unwrap().payload, "a");
/// assert_eq!(heap.pop().unwrap().into_pair(), (8, "a"));
/// assert_eq!(heap.peek().unwrap().priority, 29);
/// ```
pub trait PriorityQueue<T, P: Ord> {
    /// Returns the number of live items
    fn len(&self) -> usize;

    /// Returns true if the heap holds no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an item
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityExceeded`] if the heap has a fixed capacity
    /// and is full.
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, payload: T) -> Result<(), HeapError>;

    /// Returns the best-ordered item without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if there are no items.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&HeapItem<P, T>, HeapError>;

    /// Removes and returns the best-ordered item
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if there are no items.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<HeapItem<P, T>, HeapError>;

    /// Sets the priority of the item at `position`, in either direction
    ///
    /// Returns the item's new position.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidPosition`] if `position >= len()`.
    ///
    /// # Time Complexity
    /// O(log n)
    fn update_key(&mut self, position: usize, priority: P) -> Result<usize, HeapError>;

    /// Raises the priority value of the item at `position`
    ///
    /// Returns the item's new position.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidPosition`] if `position >= len()`, or
    /// [`HeapError::OrderingViolation`] if `priority` is smaller than the
    /// current priority.
    fn increase_key(&mut self, position: usize, priority: P) -> Result<usize, HeapError>;

    /// Lowers the priority value of the item at `position`
    ///
    /// Returns the item's new position.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidPosition`] if `position >= len()`, or
    /// [`HeapError::OrderingViolation`] if `priority` is larger than the
    /// current priority.
    fn decrease_key(&mut self, position: usize, priority: P) -> Result<usize, HeapError>;

    /// The live items in position order
    fn as_slice(&self) -> &[HeapItem<P, T>];
}
