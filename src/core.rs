use compare::{Compare, Natural};

/// A double-ended priority queue implemented as a min-max heap.
///
/// Elements live in a single `Vec` encoding a complete binary tree: the
/// children of index `i` are `2i + 1` and `2i + 2`. Even-depth levels are
/// min levels (each element is `<=` everything below it), odd-depth levels
/// are max levels (each element is `>=` everything below it).
///
/// The order is given by `C`, any [`Compare<T>`](compare::Compare). The
/// default `Natural<T>` uses `T: Ord`.
pub struct MinMaxHeap<T, C: Compare<T> = Natural<T>> {
    pub(crate) data: Vec<T>,
    pub(crate) cmp: C,
}

/// Which extreme a tree level keeps on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Level {
    Min,
    Max,
}

mod construct;
mod level;
mod bubble;
mod push;
mod pop;
mod peek;
mod property;
mod iter;
mod from;
mod extend;
mod clone;
mod debug;
mod default;
mod into;

pub use self::iter::{Drain, IntoIter, Iter};
pub use self::peek::HeapErr;
