use std::{error::Error, fmt::Display};

use compare::Compare;

use super::MinMaxHeap;

/// Error returned when an extreme is requested from an empty heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapErr {
    EmptyContainer,
}

impl Error for HeapErr {}

impl Display for HeapErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapErr::EmptyContainer => write!(f, "the heap is empty"),
        }
    }
}

impl <T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Index holding the greatest element: the root when it stands alone,
    /// otherwise the larger of its children.
    pub(crate) fn max_index(&self) -> Option<usize> {
        match self.data.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ => {
                if self.cmp.compares_lt(&self.data[1], &self.data[2]) {
                    Some(2)
                } else {
                    Some(1)
                }
            }
        }
    }

    /// Returns the smallest element, or `None` if the heap is empty.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// let mut heap = MinMaxHeap::new();
    /// assert_eq!(heap.peek_min(), None);
    /// heap.push(2);
    /// heap.push(1);
    /// assert_eq!(heap.peek_min(), Some(&1));
    /// ```
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the greatest element, or `None` if the heap is empty.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// let mut heap = MinMaxHeap::new();
    /// assert_eq!(heap.peek_max(), None);
    /// heap.push(1);
    /// heap.push(2);
    /// assert_eq!(heap.peek_max(), Some(&2));
    /// ```
    pub fn peek_max(&self) -> Option<&T> {
        let index = self.max_index()?;
        Some(&self.data[index])
    }

    /// Like [`peek_min`](Self::peek_min) but reports an empty heap as
    /// [`HeapErr::EmptyContainer`].
    pub fn min(&self) -> Result<&T, HeapErr> {
        self.peek_min().ok_or(HeapErr::EmptyContainer)
    }

    /// Like [`peek_max`](Self::peek_max) but reports an empty heap as
    /// [`HeapErr::EmptyContainer`].
    pub fn max(&self) -> Result<&T, HeapErr> {
        self.peek_max().ok_or(HeapErr::EmptyContainer)
    }
}

#[test]
fn peek_small_heaps() {
    let mut heap = MinMaxHeap::new();
    heap.push(5);
    assert_eq!(heap.peek_min(), Some(&5));
    assert_eq!(heap.peek_max(), Some(&5));
    heap.push(3);
    assert_eq!(heap.peek_min(), Some(&3));
    assert_eq!(heap.peek_max(), Some(&5));
    heap.push(9);
    assert_eq!(heap.peek_min(), Some(&3));
    assert_eq!(heap.peek_max(), Some(&9));
}

#[test]
fn peek_max_picks_larger_child() {
    let heap = MinMaxHeap::from(vec![0, 4, 7]);
    assert_eq!(heap.max_index(), Some(2));
    let heap = MinMaxHeap::from(vec![0, 7, 4]);
    assert_eq!(heap.max_index(), Some(1));
    let heap = MinMaxHeap::from(vec![0, 7, 7]);
    assert_eq!(heap.max_index(), Some(1));
}

#[test]
fn empty_reports_error() {
    let heap: MinMaxHeap<u8> = MinMaxHeap::new();
    assert_eq!(heap.min(), Err(HeapErr::EmptyContainer));
    assert_eq!(heap.max(), Err(HeapErr::EmptyContainer));
    assert_eq!(HeapErr::EmptyContainer.to_string(), "the heap is empty");
}
