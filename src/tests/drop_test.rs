use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

pub mod counter {
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub static COUNTER: AtomicUsize = AtomicUsize::new(0);

    #[derive(PartialOrd, Ord, PartialEq, Eq, Debug)]
    pub struct Counter(pub u32);

    impl Counter {
        pub fn new(value: u32) -> Self {
            COUNTER.fetch_add(1, Ordering::SeqCst);
            Self(value)
        }
    }

    impl Drop for Counter {
        fn drop(&mut self) {
            COUNTER.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn zero_sized_elements() {
    let mut heap = MinMaxHeap::new();
    heap.push(());
    heap.push(());
    heap.push(());
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.pop_max(), Some(()));
    assert_eq!(heap.pop_min(), Some(()));
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.pop_max(), Some(()));
    assert_eq!(heap.pop_max(), None);
}

// the only test touching COUNTER, so parallel tests cannot skew it
#[test]
fn elements_dropped_exactly_once() {
    let mut heap = MinMaxHeap::new();
    for i in 0..40 {
        heap.push(counter::Counter::new((i * 13) % 17));
    }
    assert_eq!(counter::COUNTER.load(Ordering::SeqCst), 40);
    let popped = heap.pop_min();
    assert!(popped.is_some());
    drop(popped);
    heap.pop_max();
    assert_eq!(counter::COUNTER.load(Ordering::SeqCst), 38);
    drop(heap.drain().take(3).collect::<Vec<_>>());
    assert!(heap.is_empty());
    assert_eq!(counter::COUNTER.load(Ordering::SeqCst), 0);

    let heap: MinMaxHeap<_> = (0..25).map(counter::Counter::new).collect();
    assert_eq!(counter::COUNTER.load(Ordering::SeqCst), 25);
    drop(heap);
    assert_eq!(counter::COUNTER.load(Ordering::SeqCst), 0);
}

#[test]
fn panicking_comparator_keeps_elements() {
    let budget = AtomicUsize::new(0);
    let cmp = |a: &i32, b: &i32| {
        if budget.fetch_add(1, Ordering::SeqCst) == 60 {
            panic!("comparator gave up");
        }
        a.cmp(b)
    };
    let mut heap = MinMaxHeap::with_comparator(cmp);
    let result = catch_unwind(AssertUnwindSafe(|| {
        for value in 0..100 {
            heap.push(value);
        }
    }));
    assert!(result.is_err());
    let mut left = heap.into_vec();
    left.sort();
    let expected: Vec<i32> = (0..left.len() as i32).collect();
    assert_eq!(left, expected);
}
