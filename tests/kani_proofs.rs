//! Kani proof harnesses
//!
//! Bounded proofs of the heap property for small heaps with arbitrary
//! priorities. Run with `cargo kani --tests`; under `cargo test` this file
//! compiles to nothing.

#[cfg(kani)]
use rust_binary_heaps::binary::BinaryHeap;
#[cfg(kani)]
use rust_binary_heaps::fixed::FixedHeap;
#[cfg(kani)]
use rust_binary_heaps::raw;
#[cfg(kani)]
use rust_binary_heaps::{HeapError, Max, Min, PriorityQueue};

/// Proof: pushes keep the heap property and pop returns the maximum
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_fixed_max_push_pop() {
    let mut heap: FixedHeap<u8, u8, Max> = FixedHeap::with_capacity(4);
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();

    heap.push(a, 0).unwrap();
    heap.push(b, 1).unwrap();
    heap.push(c, 2).unwrap();
    assert!(raw::is_heap::<Max, _, _>(heap.as_slice()));

    let top = heap.pop().unwrap().priority;
    assert!(top >= a && top >= b && top >= c);
    assert!(raw::is_heap::<Max, _, _>(heap.as_slice()));
}

/// Proof: a full fixed heap rejects a push without changing
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_capacity_rejection() {
    let mut heap: FixedHeap<(), u8, Min> = FixedHeap::with_capacity(2);
    heap.push(kani::any(), ()).unwrap();
    heap.push(kani::any(), ()).unwrap();
    let before = heap.peek().unwrap().priority;

    assert!(heap.push(kani::any(), ()) == Err(HeapError::CapacityExceeded { capacity: 2 }));
    assert!(heap.len() == 2);
    assert!(heap.peek().unwrap().priority == before);
}

/// Proof: update_key at any position keeps the heap property
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_update_key_any_direction() {
    let mut heap: BinaryHeap<(), u8, Min> = BinaryHeap::new();
    for _ in 0..4 {
        heap.push(kani::any(), ()).unwrap();
    }

    let position: usize = kani::any();
    kani::assume(position < 4);
    heap.update_key(position, kani::any()).unwrap();

    assert!(raw::is_heap::<Min, _, _>(heap.as_slice()));
}
