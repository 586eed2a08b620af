use super::MinMaxHeap;

impl <T: Ord> Default for MinMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
