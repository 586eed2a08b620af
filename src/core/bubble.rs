use compare::Compare;

use super::level::{first_child, first_grandchild, grandparent, parent};
use super::{Level, MinMaxHeap};

impl <T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Moves the element at `index` up until no ancestor is out of order
    /// with it. Everything outside the path from `index` to the root must
    /// already satisfy the heap property.
    pub(crate) fn bubble_up(&mut self, index: usize) {
        debug_assert!(index < self.data.len());
        if index == 0 {
            return;
        }
        let level = Level::of(index);
        let parent_index = parent(index);
        // the parent sits on the opposite kind of level, so a violation
        // there decides which chain the value has to climb
        if level.opposite().prefers(&self.cmp, &self.data[index], &self.data[parent_index]) {
            self.data.swap(index, parent_index);
            self.bubble_up_chain(parent_index, level.opposite());
        } else {
            self.bubble_up_chain(index, level);
        }
    }

    // climbs by grandparents, all of which share the level kind of `index`
    fn bubble_up_chain(&mut self, index: usize, level: Level) {
        let mut index = index;
        while index > 2 {
            let grandparent_index = grandparent(index);
            if !level.prefers(&self.cmp, &self.data[index], &self.data[grandparent_index]) {
                break;
            }
            self.data.swap(index, grandparent_index);
            index = grandparent_index;
        }
    }

    /// Moves the element at `index` down until none of its descendants is
    /// out of order with it. Both subtrees below `index` must already be
    /// valid min-max heaps.
    pub(crate) fn bubble_down(&mut self, index: usize) {
        debug_assert!(index < self.data.len());
        // grandchild hops never change the level kind
        let level = Level::of(index);
        let len = self.data.len();
        let mut index = index;
        loop {
            let child = first_child(index);
            if child >= len {
                break;
            }
            let grandchild = first_grandchild(index);
            let mut select = child;
            let candidates = [
                child + 1,
                grandchild,
                grandchild.saturating_add(1),
                grandchild.saturating_add(2),
                grandchild.saturating_add(3),
            ];
            for candidate in candidates.iter().copied().take_while(|&candidate| candidate < len) {
                if level.prefers(&self.cmp, &self.data[candidate], &self.data[select]) {
                    select = candidate;
                }
            }
            if !level.prefers(&self.cmp, &self.data[select], &self.data[index]) {
                break;
            }
            self.data.swap(select, index);
            if select < grandchild {
                // a swap with a direct child cannot disturb the level below it
                break;
            }
            let select_parent = parent(select);
            if level.prefers(&self.cmp, &self.data[select_parent], &self.data[select]) {
                self.data.swap(select, select_parent);
            }
            index = select;
        }
    }

    /// Restores the heap property over the whole storage in `O(n)`.
    pub(crate) fn rebuild(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        log!("rebuilding {} elements", len);
        for index in (0..len / 2).rev() {
            self.bubble_down(index);
        }
    }
}
