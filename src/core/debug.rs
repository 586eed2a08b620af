use std::fmt;

use compare::Compare;

use super::MinMaxHeap;

impl <T: fmt::Debug, C: Compare<T>> fmt::Debug for MinMaxHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

#[test]
fn debug_lists_storage() {
    let heap = MinMaxHeap::from(vec![1]);
    assert_eq!(format!("{:?}", heap), "[1]");
    let heap: MinMaxHeap<i32> = MinMaxHeap::new();
    assert_eq!(format!("{:?}", heap), "[]");
}
