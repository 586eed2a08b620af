use super::MinMaxHeap;

impl <T: Ord, const N: usize> From<[T; N]> for MinMaxHeap<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_vec(Vec::from(array))
    }
}

impl <T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl <T: Ord> FromIterator<T> for MinMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

#[test]
fn from_array() {
    let heap = MinMaxHeap::from([5, 3, 9, 1, 0]);
    heap.check();
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.peek_min(), Some(&0));
    assert_eq!(heap.peek_max(), Some(&9));
}

#[test]
fn collect_from_iterator() {
    let heap: MinMaxHeap<u32> = (1..=20).rev().collect();
    heap.check();
    assert_eq!(heap.peek_min(), Some(&1));
    assert_eq!(heap.peek_max(), Some(&20));
}
