use compare::Compare;

use super::Level;

// Index arithmetic for the implicit tree. Child indices saturate so that a
// result past the end of any real vector just compares as out of bounds.

#[inline]
pub(crate) fn parent(index: usize) -> usize {
    debug_assert!(index > 0);
    (index - 1) / 2
}

#[inline]
pub(crate) fn grandparent(index: usize) -> usize {
    debug_assert!(index > 2);
    (index - 3) / 4
}

#[inline]
pub(crate) fn first_child(index: usize) -> usize {
    index.saturating_mul(2).saturating_add(1)
}

#[inline]
pub(crate) fn first_grandchild(index: usize) -> usize {
    first_child(first_child(index))
}

/// Depth of `index` in the tree, i.e. `floor(log2(index + 1))`.
#[inline]
pub(crate) fn depth(index: usize) -> u32 {
    debug_assert!(index < usize::MAX);
    usize::BITS - 1 - (index + 1).leading_zeros()
}

impl Level {
    /// Level of the node stored at `index`; the root level is a min level.
    #[inline]
    pub(crate) fn of(index: usize) -> Level {
        if depth(index) % 2 == 0 {
            Level::Min
        } else {
            Level::Max
        }
    }

    #[inline]
    pub(crate) fn opposite(self) -> Level {
        match self {
            Level::Min => Level::Max,
            Level::Max => Level::Min,
        }
    }

    /// Whether `a` belongs strictly above `b` on a level of this kind.
    #[inline]
    pub(crate) fn prefers<T, C: Compare<T>>(self, cmp: &C, a: &T, b: &T) -> bool {
        match self {
            Level::Min => cmp.compares_lt(a, b),
            Level::Max => cmp.compares_gt(a, b),
        }
    }
}

#[test]
fn depth_near_powers_of_two() {
    assert_eq!(depth(0), 0);
    assert_eq!(depth(1), 1);
    assert_eq!(depth(2), 1);
    assert_eq!(depth(3), 2);
    assert_eq!(depth(6), 2);
    assert_eq!(depth(7), 3);
    assert_eq!(depth(14), 3);
    assert_eq!(depth(15), 4);
    for d in 1..(usize::BITS - 1) {
        let start = (1usize << d) - 1;
        assert_eq!(depth(start), d);
        assert_eq!(depth(start - 1), d - 1);
    }
}

#[test]
fn levels_alternate() {
    assert_eq!(Level::of(0), Level::Min);
    assert_eq!(Level::of(1), Level::Max);
    assert_eq!(Level::of(2), Level::Max);
    for i in 3..7 {
        assert_eq!(Level::of(i), Level::Min);
    }
    for i in 7..15 {
        assert_eq!(Level::of(i), Level::Max);
    }
    assert_eq!(Level::of(15), Level::Min);
    assert_eq!(Level::Min.opposite(), Level::Max);
}

#[test]
fn family_indices() {
    assert_eq!(parent(1), 0);
    assert_eq!(parent(2), 0);
    assert_eq!(parent(6), 2);
    for i in 3..1000 {
        assert_eq!(grandparent(i), parent(parent(i)));
        assert_eq!(Level::of(i), Level::of(grandparent(i)));
    }
    assert_eq!(first_child(4), 9);
    assert_eq!(first_grandchild(1), 7);
    assert_eq!(first_child(usize::MAX / 2 + 1), usize::MAX);
}

#[test]
fn prefers_follows_the_comparator() {
    let natural = compare::natural::<i32>();
    assert!(Level::Min.prefers(&natural, &1, &2));
    assert!(!Level::Min.prefers(&natural, &2, &2));
    assert!(Level::Max.prefers(&natural, &3, &2));
    assert!(!Level::Max.prefers(&natural, &2, &3));
}
