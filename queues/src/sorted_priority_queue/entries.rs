use super::SortedPriorityQueue;
use crate::{ring, Element};
use std::iter::FusedIterator;

/// Entries of a [`SortedPriorityQueue`] in extraction order.
#[derive(Debug, Clone)]
pub struct Entries<'a, V, P> {
    slots: &'a [Option<Element<V, P>>],
    index: usize,
    remaining: usize,
}

impl<'a, V, P> Entries<'a, V, P> {
    pub(super) fn new(queue: &'a SortedPriorityQueue<V, P>) -> Self {
        Self {
            slots: &queue.slots,
            index: queue.head,
            remaining: queue.len,
        }
    }
}

impl<'a, V, P> Iterator for Entries<'a, V, P> {
    type Item = &'a Element<V, P>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.slots[self.index].as_ref();
        self.index = ring::next(self.index, self.slots.len());
        self.remaining -= 1;
        entry
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, P> ExactSizeIterator for Entries<'_, V, P> {}

impl<V, P> FusedIterator for Entries<'_, V, P> {}

impl<'a, V, P> IntoIterator for &'a SortedPriorityQueue<V, P> {
    type Item = &'a Element<V, P>;
    type IntoIter = Entries<'a, V, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
