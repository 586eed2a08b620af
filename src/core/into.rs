use compare::Compare;

use super::MinMaxHeap;

impl <T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Consumes the heap and returns its storage, in no particular order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its elements in ascending order.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// let heap = MinMaxHeap::from(vec![5, 3, 9, 1, 0]);
    /// assert_eq!(heap.into_sorted_vec(), vec![0, 1, 3, 5, 9]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        while let Some(item) = self.pop_min() {
            vec.push(item);
        }
        vec
    }
}

impl <T, C: Compare<T>> From<MinMaxHeap<T, C>> for Vec<T> {
    fn from(heap: MinMaxHeap<T, C>) -> Vec<T> {
        heap.into_vec()
    }
}

#[test]
fn sorted_with_duplicates() {
    let heap = MinMaxHeap::from(vec![2, 2, 1, 3, 1, 2]);
    assert_eq!(heap.into_sorted_vec(), vec![1, 1, 2, 2, 2, 3]);
}

#[test]
fn into_plain_vec() {
    let heap = MinMaxHeap::from(vec![4, 1]);
    let mut vec: Vec<i32> = heap.into();
    vec.sort();
    assert_eq!(vec, vec![1, 4]);
}
