use std::iter::FusedIterator;

use compare::Compare;

use super::MinMaxHeap;

/// Borrowing iterator over the heap's elements in storage order.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    pub(crate) inner: std::slice::Iter<'a, T>,
}

/// Owning iterator over the heap's elements in storage order.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    pub(crate) inner: std::vec::IntoIter<T>,
}

/// Draining iterator, see [`MinMaxHeap::drain`].
#[derive(Debug)]
pub struct Drain<'a, T> {
    pub(crate) inner: std::vec::Drain<'a, T>,
}

impl <'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl <'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl <'a, T> ExactSizeIterator for Iter<'a, T> {}
impl <'a, T> FusedIterator for Iter<'a, T> {}

impl <T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl <T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl <T> ExactSizeIterator for IntoIter<T> {}
impl <T> FusedIterator for IntoIter<T> {}

impl <'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl <'a, T> DoubleEndedIterator for Drain<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl <'a, T> ExactSizeIterator for Drain<'a, T> {}
impl <'a, T> FusedIterator for Drain<'a, T> {}

impl <'a, T, C: Compare<T>> IntoIterator for &'a MinMaxHeap<T, C> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.data.iter(),
        }
    }
}

impl <T, C: Compare<T>> IntoIterator for MinMaxHeap<T, C> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.data.into_iter(),
        }
    }
}

impl <T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Iterates over every element in arbitrary (storage) order.
    ///
    /// # Examples
    /// ```
    /// use minmaxheap::MinMaxHeap;
    /// let heap = MinMaxHeap::from(vec![1, 2, 3]);
    /// assert_eq!(heap.iter().sum::<i32>(), 6);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Removes every element, yielding them in arbitrary order. The heap is
    /// empty once the iterator is dropped, even if it was not exhausted.
    pub fn drain(&mut self) -> Drain<'_, T> {
        log!("draining {} elements", self.data.len());
        Drain {
            inner: self.data.drain(..),
        }
    }
}

#[test]
fn iter_visits_everything() {
    let mut heap = MinMaxHeap::new();
    for i in 0..100 {
        heap.push(i);
    }
    let iter = heap.iter();
    assert_eq!(iter.len(), 100);
    let mut seen: Vec<i32> = heap.iter().copied().collect();
    seen.sort();
    assert_eq!(seen, (0..100).collect::<Vec<_>>());
    for i in &heap {
        assert!((0..100).contains(i));
    }
}

#[test]
fn into_iter_and_drain() {
    let heap = MinMaxHeap::from(vec![3, 1, 2]);
    let mut owned: Vec<i32> = heap.into_iter().collect();
    owned.sort();
    assert_eq!(owned, vec![1, 2, 3]);

    let mut heap = MinMaxHeap::from(vec![3, 1, 2]);
    let mut drained: Vec<i32> = heap.drain().collect();
    drained.sort();
    assert_eq!(drained, vec![1, 2, 3]);
    assert!(heap.is_empty());
    heap.push(4);
    assert_eq!(heap.pop_max(), Some(4));
}
