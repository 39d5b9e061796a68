//! Slice-level heap primitives
//!
//! Every heap in this crate stores its items as a complete binary tree laid
//! out in a contiguous slice: the item at position `i` has children at `2i+1`
//! and `2i+2`, and its parent is at `(i-1)/2`. The functions here restore the
//! heap property on such a slice and are shared by [`BinaryHeap`] and
//! [`FixedHeap`].
//!
//! All of them operate on the slice they are given, so the live range is
//! exactly `0..data.len()`. Both sift loops are iterative; their cost is
//! bounded by the tree height.
//!
//! [`BinaryHeap`]: crate::binary::BinaryHeap
//! [`FixedHeap`]: crate::fixed::FixedHeap
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heaps::item::HeapItem;
//! use rust_binary_heaps::kind::Max;
//! use rust_binary_heaps::raw;
//!
//! let mut data: Vec<_> = [3, 9, 1, 7].iter().map(|&p| HeapItem::new(p, ())).collect();
//! raw::build_heap::<Max, _, _>(&mut data);
//! assert!(raw::is_heap::<Max, _, _>(&data));
//! assert_eq!(data[0].priority, 9);
//! ```

use log::{debug, trace};

use crate::item::HeapItem;
use crate::kind::Kind;
use crate::traits::HeapError;

/// Position of the parent of `index`. The root has no parent.
#[inline]
pub fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Position of the left child of `index`
#[inline]
pub fn left(index: usize) -> usize {
    2 * index + 1
}

/// Position of the right child of `index`
#[inline]
pub fn right(index: usize) -> usize {
    2 * index + 2
}

/// Moves the item at `index` toward the root until its parent is no longer
/// worse-ordered than it. Returns the item's final position.
///
/// Assumes the slice was a valid heap except possibly at `index`, whose
/// priority has just been improved.
pub fn sift_up<K: Kind, P: Ord, T>(data: &mut [HeapItem<P, T>], mut index: usize) -> usize {
    debug_assert!(index < data.len());
    while let Some(p) = parent(index) {
        if K::precedes(&data[index].priority, &data[p].priority) {
            data.swap(index, p);
            index = p;
        } else {
            break;
        }
    }
    index
}

/// Moves the item at `index` toward the leaves until no child is
/// better-ordered than it. Returns the item's final position.
///
/// Assumes both subtrees below `index` already satisfy the heap property.
pub fn sift_down<K: Kind, P: Ord, T>(data: &mut [HeapItem<P, T>], mut index: usize) -> usize {
    let len = data.len();
    loop {
        let l = left(index);
        let r = right(index);
        let mut best = index;

        if l < len && K::precedes(&data[l].priority, &data[best].priority) {
            best = l;
        }
        if r < len && K::precedes(&data[r].priority, &data[best].priority) {
            best = r;
        }

        if best == index {
            return index;
        }
        data.swap(index, best);
        index = best;
    }
}

/// Rearranges an arbitrary slice into a valid heap in O(n)
///
/// Sifts down every internal node, starting from the last one and ending at
/// the root. Leaves are already trivial heaps and are skipped.
pub fn build_heap<K: Kind, P: Ord, T>(data: &mut [HeapItem<P, T>]) {
    for index in (0..data.len() / 2).rev() {
        sift_down::<K, P, T>(data, index);
    }
}

/// Restores the heap property at `index` after its priority changed in
/// either direction. Returns the item's final position.
///
/// `improved` tells which way the priority moved under the heap's ordering:
/// toward the root (sift up) or away from it (sift down).
pub(crate) fn restore<K: Kind, P: Ord, T>(
    data: &mut [HeapItem<P, T>],
    index: usize,
    improved: bool,
) -> usize {
    if improved {
        sift_up::<K, P, T>(data, index)
    } else {
        sift_down::<K, P, T>(data, index)
    }
}

/// Which way a key update may move the priority value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyChange {
    Any,
    Increase,
    Decrease,
}

/// Validates and applies a key update at `position`, then restores the heap
/// property. Returns the item's final position.
///
/// Nothing is written unless every check passes.
pub(crate) fn change_key<K: Kind, P: Ord, T>(
    data: &mut [HeapItem<P, T>],
    position: usize,
    priority: P,
    change: KeyChange,
) -> Result<usize, HeapError> {
    let len = data.len();
    let Some(current) = data.get(position).map(|item| &item.priority) else {
        debug!("{}-heap key update rejected: position {position} of {len}", K::name());
        return Err(HeapError::InvalidPosition { position, len });
    };

    let allowed = match change {
        KeyChange::Any => true,
        KeyChange::Increase => priority >= *current,
        KeyChange::Decrease => priority <= *current,
    };
    if !allowed {
        debug!("{}-heap {change:?} rejected at position {position}", K::name());
        return Err(HeapError::OrderingViolation { position });
    }

    // Equal priorities count as improved; sifting up is then a no-op.
    let improved = !K::precedes(current, &priority);
    data[position].priority = priority;
    let settled = restore::<K, P, T>(data, position, improved);
    trace!("{}-heap key update moved {position} -> {settled}", K::name());
    Ok(settled)
}

/// Removes the root of a heap stored in a `Vec`
///
/// Swaps the root with the last item, pops it and sifts the new root down.
/// Returns `None` for an empty vector.
pub fn pop_root<K: Kind, P: Ord, T>(data: &mut Vec<HeapItem<P, T>>) -> Option<HeapItem<P, T>> {
    if data.is_empty() {
        return None;
    }
    let last = data.len() - 1;
    data.swap(0, last);
    let top = data.pop();
    if !data.is_empty() {
        sift_down::<K, P, T>(data, 0);
    }
    top
}

/// Checks the heap property over the whole slice
///
/// No child may be strictly better-ordered than its parent.
pub fn is_heap<K: Kind, P: Ord, T>(data: &[HeapItem<P, T>]) -> bool {
    (1..data.len()).all(|i| {
        let p = (i - 1) / 2;
        !K::precedes(&data[i].priority, &data[p].priority)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{Max, Min};

    fn items(priorities: &[i32]) -> Vec<HeapItem<i32, ()>> {
        priorities.iter().map(|&p| HeapItem::new(p, ())).collect()
    }

    fn priorities(data: &[HeapItem<i32, ()>]) -> Vec<i32> {
        data.iter().map(|item| item.priority).collect()
    }

    #[test]
    fn test_index_arithmetic() {
        assert_eq!(parent(0), None);
        assert_eq!(parent(1), Some(0));
        assert_eq!(parent(2), Some(0));
        assert_eq!(parent(5), Some(2));
        assert_eq!(parent(6), Some(2));
        assert_eq!(left(0), 1);
        assert_eq!(right(0), 2);
        assert_eq!(left(3), 7);
        assert_eq!(right(3), 8);
    }

    #[test]
    fn test_sift_up_to_root() {
        let mut data = items(&[10, 8, 9, 1, 2, 3, 20]);
        assert_eq!(sift_up::<Max, _, _>(&mut data, 6), 0);
        assert_eq!(priorities(&data), vec![20, 8, 10, 1, 2, 3, 9]);
        assert!(is_heap::<Max, _, _>(&data));
    }

    #[test]
    fn test_sift_up_stops_at_equal_parent() {
        let mut data = items(&[1, 5, 5]);
        assert_eq!(sift_up::<Min, _, _>(&mut data, 2), 2);
        assert_eq!(priorities(&data), vec![1, 5, 5]);
    }

    #[test]
    fn test_sift_down_picks_better_child() {
        let mut data = items(&[1, 30, 40, 10, 20, 35, 5]);
        assert_eq!(sift_down::<Max, _, _>(&mut data, 0), 5);
        assert_eq!(priorities(&data), vec![40, 30, 35, 10, 20, 1, 5]);
        assert!(is_heap::<Max, _, _>(&data));
    }

    #[test]
    fn test_sift_down_on_leaf_is_noop() {
        let mut data = items(&[1, 2, 3]);
        assert_eq!(sift_down::<Min, _, _>(&mut data, 2), 2);
        assert_eq!(priorities(&data), vec![1, 2, 3]);
    }

    #[test]
    fn test_build_heap_both_kinds() {
        let input = [4, 1, 3, 2, 16, 9, 10, 14, 8, 7];

        let mut max = items(&input);
        build_heap::<Max, _, _>(&mut max);
        assert_eq!(priorities(&max), vec![16, 14, 10, 8, 7, 9, 3, 2, 4, 1]);
        assert!(is_heap::<Max, _, _>(&max));

        let mut min = items(&input);
        build_heap::<Min, _, _>(&mut min);
        assert!(is_heap::<Min, _, _>(&min));
        assert_eq!(min[0].priority, 1);
    }

    #[test]
    fn test_build_heap_trivial_inputs() {
        let mut empty: Vec<HeapItem<i32, ()>> = Vec::new();
        build_heap::<Max, _, _>(&mut empty);
        assert!(is_heap::<Max, _, _>(&empty));

        let mut single = items(&[7]);
        build_heap::<Min, _, _>(&mut single);
        assert_eq!(priorities(&single), vec![7]);
    }

    #[test]
    fn test_pop_root_drains_in_order() {
        let mut data = items(&[5, 3, 8, 1, 9, 2]);
        build_heap::<Min, _, _>(&mut data);

        let mut out = Vec::new();
        while let Some(item) = pop_root::<Min, _, _>(&mut data) {
            assert!(is_heap::<Min, _, _>(&data));
            out.push(item.priority);
        }
        assert_eq!(out, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_restore_dispatch() {
        let mut data = items(&[10, 20, 30, 40, 50]);
        data[4].priority = 5;
        assert_eq!(restore::<Min, _, _>(&mut data, 4, true), 0);
        assert!(is_heap::<Min, _, _>(&data));

        data[0].priority = 100;
        restore::<Min, _, _>(&mut data, 0, false);
        assert!(is_heap::<Min, _, _>(&data));
        assert_eq!(data[0].priority, 10);
    }

    #[test]
    fn test_change_key_validates_before_writing() {
        let mut data = items(&[9, 7, 8]);
        assert_eq!(
            change_key::<Max, _, _>(&mut data, 3, 1, KeyChange::Any),
            Err(HeapError::InvalidPosition { position: 3, len: 3 })
        );
        assert_eq!(
            change_key::<Max, _, _>(&mut data, 1, 6, KeyChange::Increase),
            Err(HeapError::OrderingViolation { position: 1 })
        );
        assert_eq!(priorities(&data), vec![9, 7, 8]);

        assert_eq!(change_key::<Max, _, _>(&mut data, 1, 10, KeyChange::Increase), Ok(0));
        assert_eq!(priorities(&data), vec![10, 9, 8]);
        assert_eq!(change_key::<Max, _, _>(&mut data, 0, 1, KeyChange::Decrease), Ok(1));
        assert_eq!(priorities(&data), vec![9, 1, 8]);
    }

    #[test]
    fn test_is_heap_detects_violation() {
        assert!(!is_heap::<Max, _, _>(&items(&[1, 2])));
        assert!(is_heap::<Min, _, _>(&items(&[1, 2])));
        assert!(is_heap::<Max, _, _>(&items(&[3, 3, 3])));
    }
}
