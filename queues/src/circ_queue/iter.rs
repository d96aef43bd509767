use super::CircQueue;
use crate::ring;
use std::iter::FusedIterator;

/// Borrowing iterator over a [`CircQueue`], oldest element first.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    items: &'a [Option<T>],
    index: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(queue: &'a CircQueue<T>) -> Self {
        Self {
            items: &queue.items,
            index: queue.front.unwrap_or(0),
            remaining: queue.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.items[self.index].as_ref();
        self.index = ring::next(self.index, self.items.len());
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CircQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
