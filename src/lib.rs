//! Binary Heap Priority Queues for Rust
//!
//! This crate provides binary heaps stored as complete binary trees in
//! contiguous memory, in both ordering directions and two storage disciplines.
//!
//! # Features
//!
//! - **[`BinaryHeap`](binary::BinaryHeap)**: dynamic storage, grows and shrinks with the heap
//! - **[`FixedHeap`](fixed::FixedHeap)**: preallocated storage with a hard capacity
//! - **[`Max`] / [`Min`]**: ordering direction as a type parameter
//! - **Key updates**: direction-agnostic `update_key`, plus checked `increase_key` / `decrease_key`
//! - **Linear-time build** from an arbitrary collection
//! - **Non-destructive heap sort** via `sorted_payloads`
//! - **[`SharedHeap`](shared::SharedHeap)**: one-lock wrapper for use across threads (feature `sync`)
//! - **ASCII tree rendering** for debugging via `tree()`
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::{Max, PriorityQueue};
//! use rust_binary_heaps::fixed::FixedHeap;
//!
//! let mut heap: FixedHeap<(), i32, Max> = FixedHeap::with_capacity(20);
//! for p in [20, 15, 40, 10, 5, 7, 12, 2, 9, 1, 39] {
//!     heap.push(p, ()).unwrap();
//! }
//! assert_eq!(heap.pop().unwrap().priority, 40);
//! assert_eq!(heap.pop().unwrap().priority, 39);
//! ```

pub mod binary;
pub mod display;
pub mod fixed;
pub mod item;
pub mod kind;
pub mod raw;
#[cfg(feature = "sync")]
pub mod shared;
pub mod traits;

// Re-export the main types for convenience
pub use item::HeapItem;
pub use kind::{Kind, Max, Min};
pub use traits::{HeapError, PriorityQueue};
