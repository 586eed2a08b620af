use compare::Compare;

use super::MinMaxHeap;

impl <T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Returns the number of elements in the heap.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// let mut heap = MinMaxHeap::new();
    /// assert_eq!(heap.len(), 0);
    /// heap.push(1);
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns how many elements the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Shrinks the allocation as close to `len()` as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Drops every element. The allocation is kept for reuse.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// let mut heap = MinMaxHeap::from(vec![1, 2, 3]);
    /// heap.clear();
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.peek_max(), None);
    /// ```
    pub fn clear(&mut self) {
        log!("clearing {} elements", self.data.len());
        self.data.clear();
    }

    /// Returns the comparator ordering this heap.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }
}

impl <T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Walks every node and asserts it is in order with all of its children
    /// and grandchildren.
    #[cfg(test)]
    pub(crate) fn check(&self) {
        use super::level::{first_child, first_grandchild};
        use super::Level;

        let len = self.data.len();
        for index in 0..len {
            let level = Level::of(index);
            let child = first_child(index);
            let grandchild = first_grandchild(index);
            let children = child..child.saturating_add(2);
            let grandchildren = grandchild..grandchild.saturating_add(4);
            let family = children.chain(grandchildren);
            for below in family.filter(|&below| below < len) {
                assert!(
                    !level.prefers(&self.cmp, &self.data[below], &self.data[index]),
                    "node {} ({:?} level) out of order with descendant {}",
                    index,
                    level,
                    below,
                );
            }
        }
    }
}

#[test]
fn clear_keeps_capacity() {
    let mut heap = MinMaxHeap::from(vec![4, 2, 8, 6]);
    let capacity = heap.capacity();
    heap.clear();
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
    assert_eq!(heap.capacity(), capacity);
    heap.push(1);
    assert_eq!(heap.peek_min(), Some(&1));
}

#[test]
fn reserve_and_shrink() {
    let mut heap: MinMaxHeap<i32> = MinMaxHeap::new();
    heap.reserve(32);
    assert!(heap.capacity() >= 32);
    heap.push(1);
    heap.shrink_to_fit();
    assert!(heap.capacity() >= 1);
    assert_eq!(heap.len(), 1);
}
