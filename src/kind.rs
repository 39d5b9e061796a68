//! Heap ordering direction
//!
//! A heap is either max-first or min-first. The direction is a type parameter
//! so a heap's kind is fixed at compile time and costs nothing at runtime.
//!
//! ```rust
//! use rust_binary_heaps::kind::{Kind, Max, Min};
//!
//! assert!(Max::precedes(&5, &3));
//! assert!(Min::precedes(&3, &5));
//! assert!(!Min::precedes(&3, &3));
//! ```

/// Max-heap: larger priorities come out first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Max {}

/// Min-heap: smaller priorities come out first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Min {}

/// The binary heap kind: min-heap or max-heap
pub trait Kind: private::Sealed {
    /// Returns true if `a` is strictly better-ordered than `b`, i.e. `a`
    /// belongs closer to the root
    fn precedes<P: Ord + ?Sized>(a: &P, b: &P) -> bool;

    /// Short name used in log output
    fn name() -> &'static str;
}

impl Kind for Max {
    #[inline]
    fn precedes<P: Ord + ?Sized>(a: &P, b: &P) -> bool {
        a > b
    }

    fn name() -> &'static str {
        "max"
    }
}

impl Kind for Min {
    #[inline]
    fn precedes<P: Ord + ?Sized>(a: &P, b: &P) -> bool {
        a < b
    }

    fn name() -> &'static str {
        "min"
    }
}

mod private {
    pub trait Sealed {}
}

impl private::Sealed for Max {}
impl private::Sealed for Min {}
