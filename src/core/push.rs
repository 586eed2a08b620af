use compare::Compare;

use super::MinMaxHeap;

impl <T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Pushes a value onto the heap in `O(log n)`.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// let mut heap = MinMaxHeap::new();
    /// heap.push(3);
    /// heap.push(1);
    /// heap.push(2);
    /// assert_eq!(heap.peek_min(), Some(&1));
    /// assert_eq!(heap.peek_max(), Some(&3));
    /// ```
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        let index = self.data.len() - 1;
        self.bubble_up(index);
    }

    /// Pushes `value` and then pops the minimum in one step.
    ///
    /// When the heap is empty or `value` is not greater than the current
    /// minimum, `value` comes straight back and the heap is untouched.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// let mut heap = MinMaxHeap::from(vec![4, 6]);
    /// assert_eq!(heap.push_pop_min(1), 1);
    /// assert_eq!(heap.push_pop_min(5), 4);
    /// assert_eq!(heap.into_sorted_vec(), vec![5, 6]);
    /// ```
    pub fn push_pop_min(&mut self, value: T) -> T {
        let root = match self.data.first_mut() {
            Some(root) => root,
            None => return value,
        };
        if !self.cmp.compares_gt(&value, root) {
            return value;
        }
        let value = std::mem::replace(root, value);
        self.bubble_down(0);
        value
    }

    /// Pushes `value` and then pops the maximum in one step.
    ///
    /// When the heap is empty or `value` is not less than the current
    /// maximum, `value` comes straight back and the heap is untouched.
    pub fn push_pop_max(&mut self, value: T) -> T {
        let index = match self.max_index() {
            Some(index) => index,
            None => return value,
        };
        if !self.cmp.compares_lt(&value, &self.data[index]) {
            return value;
        }
        let value = std::mem::replace(&mut self.data[index], value);
        if index > 0 && self.cmp.compares_lt(&self.data[index], &self.data[0]) {
            // the newcomer undercuts the root; it belongs there instead
            self.data.swap(index, 0);
        }
        self.bubble_down(index);
        value
    }
}

#[test]
fn push_keeps_invariant() {
    let mut heap = MinMaxHeap::new();
    for i in [5, 3, 9, 1, 0, 12, -4, 7, 7, 2, 8, 11, -1].iter() {
        heap.push(*i);
        heap.check();
    }
    assert_eq!(heap.len(), 13);
    assert_eq!(heap.peek_min(), Some(&-4));
    assert_eq!(heap.peek_max(), Some(&12));
}

#[test]
fn push_pop_min_on_empty() {
    let mut heap = MinMaxHeap::new();
    assert_eq!(heap.push_pop_min(3), 3);
    assert!(heap.is_empty());
}

#[test]
fn push_pop_max_replaces_top() {
    let mut heap = MinMaxHeap::from(vec![1, 5, 9, 3]);
    assert_eq!(heap.push_pop_max(10), 10);
    assert_eq!(heap.push_pop_max(4), 9);
    heap.check();
    assert_eq!(heap.push_pop_max(0), 5);
    heap.check();
    assert_eq!(heap.peek_min(), Some(&0));
    assert_eq!(heap.into_sorted_vec(), vec![0, 1, 3, 4]);
}

#[test]
fn push_pop_max_single_element() {
    let mut heap = MinMaxHeap::from(vec![8]);
    assert_eq!(heap.push_pop_max(2), 8);
    assert_eq!(heap.peek_min(), Some(&2));
    assert_eq!(heap.peek_max(), Some(&2));
}
