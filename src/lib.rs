//! A double-ended priority queue built on a min-max heap.
//!
//! `MinMaxHeap` keeps every element in one `Vec`, laid out as a complete
//! binary tree whose levels alternate between min levels (even depth) and
//! max levels (odd depth). The smallest element sits at the root and the
//! largest is one of the root's children, so both ends are readable in
//! `O(1)` and removable in `O(log n)`.
//!
//! Ordering is supplied through the [`compare`] crate: the default
//! comparator is the natural `Ord` order, and any `Compare<T>` (including a
//! plain closure) can be plugged in instead.
//!
//! ```
//! use minmaxheap::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::from(vec![5, 3, 9, 1, 0]);
//! assert_eq!(heap.peek_min(), Some(&0));
//! assert_eq!(heap.peek_max(), Some(&9));
//! heap.push(12);
//! assert_eq!(heap.pop_max(), Some(12));
//! assert_eq!(heap.pop_min(), Some(0));
//! ```

#[macro_use]
mod log;

pub mod core;

pub use crate::core::{Drain, HeapErr, IntoIter, Iter, MinMaxHeap};
pub use compare;

#[cfg(test)]
mod tests;
