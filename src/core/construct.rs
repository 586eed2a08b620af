use compare::{natural, Compare};

use super::MinMaxHeap;

impl <T: Ord> MinMaxHeap<T> {
    /// Creates an empty heap ordered by the natural order of `T`.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// let mut heap = MinMaxHeap::new();
    /// heap.push(4);
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }

    /// Creates an empty heap able to hold at least `capacity` elements
    /// without reallocating.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// let heap = MinMaxHeap::<i32>::with_capacity(10);
    /// assert!(heap.capacity() >= 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, natural())
    }

    /// Turns `vec` into a heap in `O(n)`.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// let heap = MinMaxHeap::from_vec(vec![5, 3, 9, 1, 0]);
    /// assert_eq!(heap.peek_min(), Some(&0));
    /// assert_eq!(heap.peek_max(), Some(&9));
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl <T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// // ordered by distance from zero
    /// let mut heap = MinMaxHeap::with_comparator(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
    /// heap.push(-7);
    /// heap.push(3);
    /// heap.push(-1);
    /// assert_eq!(heap.peek_min(), Some(&-1));
    /// assert_eq!(heap.peek_max(), Some(&-7));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        MinMaxHeap {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// use minmaxheap::compare::{natural, Compare};
    /// let mut heap = MinMaxHeap::with_capacity_and_comparator(8, natural::<u32>().rev());
    /// assert!(heap.capacity() >= 8);
    /// heap.push(1);
    /// heap.push(5);
    /// assert_eq!(heap.peek_min(), Some(&5));
    /// ```
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        MinMaxHeap {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Turns `vec` into a heap ordered by `cmp` in `O(n)`.
    pub fn from_vec_and_comparator(vec: Vec<T>, cmp: C) -> Self {
        let mut heap = MinMaxHeap { data: vec, cmp };
        heap.rebuild();
        heap
    }
}

#[test]
fn new_is_empty() {
    let heap: MinMaxHeap<i32> = MinMaxHeap::new();
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
    heap.check();
}

#[test]
fn with_capacity_reserves() {
    let heap: MinMaxHeap<String> = MinMaxHeap::with_capacity(20);
    assert_eq!(heap.len(), 0);
    assert!(heap.capacity() >= 20);
}

#[test]
fn from_vec_keeps_every_element() {
    let heap = MinMaxHeap::from_vec(vec![4, 4, 1, 7, 7, 7, 0, 2]);
    heap.check();
    let mut vec = heap.into_vec();
    vec.sort();
    assert_eq!(vec, vec![0, 1, 2, 4, 4, 7, 7, 7]);
}

#[test]
fn from_vec_and_comparator_reversed() {
    let reversed = compare::natural::<i32>().rev();
    let heap = MinMaxHeap::from_vec_and_comparator(vec![3, 8, 1, 6], reversed);
    heap.check();
    assert_eq!(heap.peek_min(), Some(&8));
    assert_eq!(heap.peek_max(), Some(&1));
}
