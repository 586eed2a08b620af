use compare::Compare;

use super::MinMaxHeap;

impl <T: Clone, C: Compare<T> + Clone> Clone for MinMaxHeap<T, C> {
    // storage order is already a valid heap, no need to sift anything
    fn clone(&self) -> Self {
        MinMaxHeap {
            data: self.data.clone(),
            cmp: self.cmp.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.cmp = source.cmp.clone();
    }
}

#[test]
fn clone_is_independent() {
    let mut heap = MinMaxHeap::from(vec![2, 7, 1]);
    let copy = heap.clone();
    heap.pop_min();
    assert_eq!(heap.len(), 2);
    assert_eq!(copy.len(), 3);
    assert_eq!(copy.peek_min(), Some(&1));
    copy.check();
}
