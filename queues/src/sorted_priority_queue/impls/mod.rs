use super::{Entries, SortedPriorityQueue};
use crate::{ring, Element, QueueError};

impl<V, P> SortedPriorityQueue<V, P> {
    pub fn with_capacity(capacity: usize) -> Result<Self, QueueError<Element<V, P>>> {
        let capacity = QueueError::<Element<V, P>>::check_capacity(capacity)?;
        Ok(Self {
            slots: ring::empty_slots(capacity),
            head: 0,
            len: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Iterates in extraction order, lowest priority first.
    pub fn iter(&self) -> Entries<'_, V, P> {
        Entries::new(self)
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.len = 0;
    }

    /// Returns the entry with the lowest priority without removing it.
    pub fn peek_min(&self) -> Result<&Element<V, P>, QueueError<Element<V, P>>> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        self.slots[self.head].as_ref().ok_or(QueueError::Empty)
    }

    /// Removes the entry with the lowest priority.
    pub fn extract_min(&mut self) -> Result<Element<V, P>, QueueError<Element<V, P>>> {
        if self.is_empty() {
            tracing::debug!("extract rejected, queue is empty");
            return Err(QueueError::Empty);
        }
        let head = self.head;
        let entry = self.slots[head].take().ok_or(QueueError::Empty)?;
        self.len -= 1;
        self.head = if self.len == 0 {
            0
        } else {
            ring::next(head, self.capacity())
        };
        tracing::trace!(head, len = self.len, "extracted min");
        Ok(entry)
    }
}

impl<V, P: Ord> SortedPriorityQueue<V, P> {
    /// Inserts `value` behind every entry whose priority is less than or equal to `priority`.
    ///
    /// Entries with a strictly greater priority are shifted one slot toward the rear,
    /// so equal priorities come out in insertion order.
    pub fn insert(&mut self, value: V, priority: P) -> Result<(), QueueError<Element<V, P>>> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity(), "insert rejected, queue is full");
            return Err(QueueError::Full(Element::new(value, priority)));
        }
        let capacity = self.capacity();
        let mut offset = self.len;
        while offset > 0 {
            let prev = ring::wrap_add(self.head, offset - 1, capacity);
            match &self.slots[prev] {
                Some(entry) if entry.priority > priority => {}
                _ => break,
            }
            let slot = ring::wrap_add(self.head, offset, capacity);
            self.slots[slot] = self.slots[prev].take();
            offset -= 1;
        }
        let slot = ring::wrap_add(self.head, offset, capacity);
        self.slots[slot] = Some(Element::new(value, priority));
        self.len += 1;
        tracing::trace!(slot, shifted = self.len - 1 - offset, len = self.len, "inserted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priorities(queue: &SortedPriorityQueue<i32, i32>) -> Vec<i32> {
        queue.iter().map(|entry| entry.priority).collect()
    }

    #[test]
    fn zero_capacity_is_invalid() {
        assert_eq!(
            SortedPriorityQueue::<i32, i32>::with_capacity(0).unwrap_err(),
            QueueError::InvalidCapacity { capacity: 0 }
        );
    }

    #[test]
    fn extracts_lowest_priority_not_highest() {
        let mut queue = SortedPriorityQueue::with_capacity(4).unwrap();
        queue.insert(5, 2).unwrap();
        queue.insert(10, 1).unwrap();
        assert_eq!(queue.extract_min(), Ok(Element::new(10, 1)));
        assert_eq!(queue.extract_min(), Ok(Element::new(5, 2)));
        assert!(queue.is_empty());
    }

    #[test]
    fn keeps_non_decreasing_order() {
        let mut queue = SortedPriorityQueue::with_capacity(6).unwrap();
        for priority in [4, 1, 3, 1, 5, 0] {
            queue.insert(priority * 10, priority).unwrap();
        }
        assert_eq!(priorities(&queue), vec![0, 1, 1, 3, 4, 5]);
        assert!(queue.is_full());
    }

    #[test]
    fn equal_priorities_extract_in_insertion_order() {
        let mut queue = SortedPriorityQueue::with_capacity(4).unwrap();
        queue.insert("first", 3).unwrap();
        queue.insert("other", 1).unwrap();
        queue.insert("second", 3).unwrap();
        queue.insert("third", 3).unwrap();
        let values: Vec<_> = std::iter::from_fn(|| queue.extract_min().ok())
            .map(|entry| entry.value)
            .collect();
        assert_eq!(values, vec!["other", "first", "second", "third"]);
    }

    #[test]
    fn insert_on_full_queue_hands_entry_back() {
        let mut queue = SortedPriorityQueue::with_capacity(2).unwrap();
        queue.insert(1, 1).unwrap();
        queue.insert(2, 2).unwrap();
        assert_eq!(queue.insert(0, 0), Err(QueueError::Full(Element::new(0, 0))));
        assert_eq!(priorities(&queue), vec![1, 2]);
    }

    #[test]
    fn extract_and_peek_on_empty_queue_fail() {
        let mut queue = SortedPriorityQueue::<i32, i32>::with_capacity(1).unwrap();
        assert_eq!(queue.extract_min(), Err(QueueError::Empty));
        assert_eq!(queue.peek_min(), Err(QueueError::Empty));
    }

    #[test]
    fn peek_min_does_not_mutate() {
        let mut queue = SortedPriorityQueue::with_capacity(3).unwrap();
        queue.insert('b', 2).unwrap();
        queue.insert('a', 1).unwrap();
        assert_eq!(queue.peek_min(), Ok(&Element::new('a', 1)));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.extract_min(), Ok(Element::new('a', 1)));
    }

    #[test]
    fn shifting_wraps_around_the_ring() {
        let mut queue = SortedPriorityQueue::with_capacity(3).unwrap();
        queue.insert(1, 1).unwrap();
        queue.insert(2, 2).unwrap();
        queue.extract_min().unwrap();
        queue.insert(3, 3).unwrap();
        // head is now past the first slot, so this shift crosses the end of the buffer
        queue.insert(0, 0).unwrap();
        assert_eq!(priorities(&queue), vec![0, 2, 3]);
        assert_eq!(queue.extract_min(), Ok(Element::new(0, 0)));
        assert_eq!(queue.extract_min(), Ok(Element::new(2, 2)));
        assert_eq!(queue.extract_min(), Ok(Element::new(3, 3)));
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut queue = SortedPriorityQueue::with_capacity(2).unwrap();
        queue.insert(1, 1).unwrap();
        queue.insert(2, 2).unwrap();
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.iter().count(), 0);
        queue.insert(3, 3).unwrap();
        assert_eq!(queue.peek_min(), Ok(&Element::new(3, 3)));
    }
}
