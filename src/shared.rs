//! Coarse-grained locking for heaps shared between threads
//!
//! Sift-up, sift-down and build all make several structural moves that must
//! not be observed halfway. [`SharedHeap`] therefore guards the whole heap
//! with a single `parking_lot::Mutex` held for the full duration of every
//! operation.
//!
//! # Example
//!
//! ```rust
//! use std::thread;
//! use rust_binary_heaps::binary::BinaryHeap;
//! use rust_binary_heaps::shared::SharedHeap;
//!
//! let shared = SharedHeap::new(BinaryHeap::<u32, u32>::new());
//! let workers: Vec<_> = (0..4)
//!     .map(|t| {
//!         let heap = shared.clone();
//!         thread::spawn(move || {
//!             for i in 0..10 {
//!                 heap.push(t * 10 + i, t).unwrap();
//!             }
//!         })
//!     })
//!     .collect();
//! for w in workers {
//!     w.join().unwrap();
//! }
//! assert_eq!(shared.len(), 40);
//! assert_eq!(shared.pop().unwrap().priority, 0);
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::item::HeapItem;
use crate::traits::{HeapError, PriorityQueue};

/// A heap behind an `Arc<Mutex<_>>`
///
/// Cloning a `SharedHeap` yields another handle to the same heap.
pub struct SharedHeap<H, T, P> {
    inner: Arc<Mutex<H>>,
    _items: PhantomData<fn() -> (T, P)>,
}

impl<H, T, P> SharedHeap<H, T, P>
where
    H: PriorityQueue<T, P>,
    P: Ord,
{
    /// Takes ownership of `heap`
    pub fn new(heap: H) -> Self {
        Self {
            inner: Arc::new(Mutex::new(heap)),
            _items: PhantomData,
        }
    }

    /// Number of live items at the moment of the call
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if the heap held no items at the moment of the call
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// See [`PriorityQueue::push`]
    pub fn push(&self, priority: P, payload: T) -> Result<(), HeapError> {
        self.inner.lock().push(priority, payload)
    }

    /// See [`PriorityQueue::pop`]
    pub fn pop(&self) -> Result<HeapItem<P, T>, HeapError> {
        self.inner.lock().pop()
    }

    /// Calls `f` on the top item while the lock is held
    pub fn peek_with<R, F>(&self, f: F) -> Result<R, HeapError>
    where
        F: FnOnce(&HeapItem<P, T>) -> R,
    {
        self.inner.lock().peek().map(f)
    }

    /// See [`PriorityQueue::update_key`]
    pub fn update_key(&self, position: usize, priority: P) -> Result<usize, HeapError> {
        self.inner.lock().update_key(position, priority)
    }

    /// Runs several operations as one critical section
    ///
    /// Positions looked up inside `f` stay valid for the whole closure since
    /// no other thread can mutate the heap meanwhile.
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut H) -> R,
    {
        f(&mut self.inner.lock())
    }

    /// Returns the heap if this is the last handle, or `self` otherwise
    pub fn try_unwrap(self) -> Result<H, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self {
                inner,
                _items: PhantomData,
            })
    }
}

impl<H, T, P> Clone for SharedHeap<H, T, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _items: PhantomData,
        }
    }
}
