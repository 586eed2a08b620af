use compare::Compare;

use super::{HeapErr, MinMaxHeap};

impl <T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Removes the smallest element and returns it, or `None` if the heap
    /// is empty.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// let mut heap = MinMaxHeap::from(vec![3, 1, 2]);
    /// assert_eq!(heap.pop_min(), Some(1));
    /// assert_eq!(heap.pop_min(), Some(2));
    /// assert_eq!(heap.pop_min(), Some(3));
    /// assert_eq!(heap.pop_min(), None);
    /// ```
    pub fn pop_min(&mut self) -> Option<T> {
        self.pop_at(0)
    }

    /// Removes the greatest element and returns it, or `None` if the heap
    /// is empty.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// let mut heap = MinMaxHeap::from(vec![3, 1, 2]);
    /// assert_eq!(heap.pop_max(), Some(3));
    /// assert_eq!(heap.pop_max(), Some(2));
    /// assert_eq!(heap.pop_max(), Some(1));
    /// assert_eq!(heap.pop_max(), None);
    /// ```
    pub fn pop_max(&mut self) -> Option<T> {
        let index = self.max_index()?;
        self.pop_at(index)
    }

    /// Like [`pop_min`](Self::pop_min) but reports an empty heap as
    /// [`HeapErr::EmptyContainer`].
    pub fn remove_min(&mut self) -> Result<T, HeapErr> {
        self.pop_min().ok_or(HeapErr::EmptyContainer)
    }

    /// Like [`pop_max`](Self::pop_max) but reports an empty heap as
    /// [`HeapErr::EmptyContainer`].
    pub fn remove_max(&mut self) -> Result<T, HeapErr> {
        self.pop_max().ok_or(HeapErr::EmptyContainer)
    }

    // `index` must be 0 or the max index; the last element fills the hole
    fn pop_at(&mut self, index: usize) -> Option<T> {
        if index >= self.data.len() {
            return None;
        }
        let value = self.data.swap_remove(index);
        if index < self.data.len() {
            self.bubble_down(index);
        }
        Some(value)
    }
}

#[test]
fn pop_min_until_empty() {
    let mut heap = MinMaxHeap::from(vec![5, 3, 9, 1, 0, 7]);
    let mut out = Vec::new();
    while let Some(value) = heap.pop_min() {
        heap.check();
        out.push(value);
    }
    assert_eq!(out, vec![0, 1, 3, 5, 7, 9]);
}

#[test]
fn pop_max_until_empty() {
    let mut heap = MinMaxHeap::from(vec![5, 3, 9, 1, 0, 7]);
    let mut out = Vec::new();
    while let Some(value) = heap.pop_max() {
        heap.check();
        out.push(value);
    }
    assert_eq!(out, vec![9, 7, 5, 3, 1, 0]);
}

#[test]
fn remove_on_empty() {
    let mut heap: MinMaxHeap<i64> = MinMaxHeap::new();
    assert_eq!(heap.remove_min(), Err(HeapErr::EmptyContainer));
    assert_eq!(heap.remove_max(), Err(HeapErr::EmptyContainer));
    heap.push(-2);
    assert_eq!(heap.remove_max(), Ok(-2));
    assert_eq!(heap.remove_min(), Err(HeapErr::EmptyContainer));
}
