use super::*;

#[test]
fn directly_pop() {
    let mut heap = MinMaxHeap::<i32>::new();
    let max = heap.pop_max();
    assert_eq!(max, None);
    let min = heap.pop_min();
    assert_eq!(min, None);
}

#[test]
fn loop_push() {
    let mut heap = MinMaxHeap::<i32>::new();
    for i in 0..100 {
        heap.push(i);
    }
    for i in 0..100 {
        let min = heap.pop_min();
        assert_eq!(min, Some(i));
    }
    let min = heap.pop_min();
    assert_eq!(min, None);
}

#[test]
fn loop_push_reversed() {
    let mut heap = MinMaxHeap::<usize>::new();
    for i in (0..100).rev() {
        heap.push(i);
    }
    for i in (0..100).rev() {
        let max = heap.pop_max();
        assert_eq!(max, Some(i));
    }
    let max = heap.pop_max();
    assert_eq!(max, None);
}

#[test]
fn pop_from_both_ends() {
    let mut heap: MinMaxHeap<i32> = (0..100).collect();
    for i in 0..50 {
        assert_eq!(heap.pop_min(), Some(i));
        assert_eq!(heap.pop_max(), Some(99 - i));
        heap.check();
    }
    assert!(heap.is_empty());
}

#[test]
fn pop_single_element_both_ways() {
    let mut heap = MinMaxHeap::from(vec![42]);
    assert_eq!(heap.peek_min(), heap.peek_max());
    assert_eq!(heap.pop_max(), Some(42));
    assert_eq!(heap.pop_max(), None);
    heap.push(42);
    assert_eq!(heap.pop_min(), Some(42));
    assert!(heap.is_empty());
}

#[test]
fn pop_all_equal() {
    let mut heap = MinMaxHeap::from(vec![7; 33]);
    heap.check();
    let mut count = 0;
    while let Some(value) = heap.pop_max() {
        assert_eq!(value, 7);
        count += 1;
        heap.check();
    }
    assert_eq!(count, 33);
}
