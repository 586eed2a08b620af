use compare::Compare;

use super::MinMaxHeap;

impl <'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for MinMaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl <T, C: Compare<T>> Extend<T> for MinMaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

#[test]
fn extend_by_value_and_ref() {
    let mut heap = MinMaxHeap::from(vec![10]);
    heap.extend(vec![4, 12, 7]);
    heap.extend(&[1, 15]);
    heap.check();
    assert_eq!(heap.len(), 6);
    assert_eq!(heap.peek_min(), Some(&1));
    assert_eq!(heap.peek_max(), Some(&15));
}
