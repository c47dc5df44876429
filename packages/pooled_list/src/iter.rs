use std::iter::FusedIterator;

use crate::PooledList;
use crate::chain::{NodeChain, NodeIndex};

/// A double-ended iterator over the elements of a [`PooledList`] in window
/// order.
///
/// Created by [`PooledList::iter()`]. Spare pooled nodes are never visited.
#[derive(Debug)]
pub struct Iter<'a, T> {
    chain: &'a NodeChain<T>,

    /// Next node to yield from the front. Meaningless when `remaining == 0`.
    head: NodeIndex,

    /// Next node to yield from the back. Meaningless when `remaining == 0`.
    tail: NodeIndex,

    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a PooledList<T>) -> Self {
        Self {
            chain: list.chain(),
            head: list.list_start(),
            tail: list.list_end(),
            remaining: list.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let value = self
            .chain
            .value(self.head)
            .expect("active window nodes always hold a value");

        if self.remaining > 1 {
            self.head = self
                .chain
                .next_of(self.head)
                .expect("the iteration stays within the window, whose nodes are all linked");
        }

        self.remaining = self
            .remaining
            .checked_sub(1)
            .expect("guarded by the zero check above");

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let value = self
            .chain
            .value(self.tail)
            .expect("active window nodes always hold a value");

        if self.remaining > 1 {
            self.tail = self
                .chain
                .prev_of(self.tail)
                .expect("the iteration stays within the window, whose nodes are all linked");
        }

        self.remaining = self
            .remaining
            .checked_sub(1)
            .expect("guarded by the zero check above");

        Some(value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a PooledList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A consuming iterator over the elements of a [`PooledList`] in window
/// order.
///
/// Created by [`IntoIterator::into_iter()`]. Drains the list end-wise, so the
/// pool shrinks only when the list itself is finally dropped.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: PooledList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for PooledList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_iteration_follows_index_order() {
        let list: PooledList<u32> = (0..5).collect();

        let collected: Vec<u32> = list.iter().copied().collect();

        assert_eq!(collected, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn backward_iteration_reverses_index_order() {
        let list: PooledList<u32> = (0..5).collect();

        let collected: Vec<u32> = list.iter().rev().copied().collect();

        assert_eq!(collected, [4, 3, 2, 1, 0]);
    }

    #[test]
    fn iteration_from_both_ends_meets_in_the_middle() {
        let list: PooledList<u32> = (0..4).collect();

        let mut iter = list.iter();

        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iterator_is_exact_size() {
        let list: PooledList<u32> = (0..3).collect();

        let mut iter = list.iter();

        assert_eq!(iter.len(), 3);
        _ = iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn empty_list_yields_nothing() {
        let list = PooledList::<u32>::with_capacity(4);

        assert_eq!(list.iter().next(), None);
        assert_eq!(list.iter().next_back(), None);
    }

    #[test]
    fn spare_nodes_are_not_visited() {
        let mut list: PooledList<u32> = (0..5).collect();

        _ = list.remove_last().unwrap();
        _ = list.remove_first().unwrap();

        let collected: Vec<u32> = list.iter().copied().collect();

        assert_eq!(collected, [1, 2, 3]);
    }

    #[test]
    fn consuming_iteration_drains_in_order() {
        let list: PooledList<String> = ["a", "b", "c"].map(String::from).into_iter().collect();

        let collected: Vec<String> = list.into_iter().collect();

        assert_eq!(collected, ["a", "b", "c"]);
    }

    #[test]
    fn consuming_iteration_backwards() {
        let list: PooledList<u32> = (0..3).collect();

        let collected: Vec<u32> = list.into_iter().rev().collect();

        assert_eq!(collected, [2, 1, 0]);
    }

    #[test]
    fn borrowing_into_iterator_in_for_loop() {
        let list: PooledList<u32> = (0..3).collect();

        let mut seen = Vec::new();
        for value in &list {
            seen.push(*value);
        }

        assert_eq!(seen, [0, 1, 2]);
    }
}
