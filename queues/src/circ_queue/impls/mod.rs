use super::{CircQueue, Iter};
use crate::{ring, QueueError};
use std::fmt;

impl<T> CircQueue<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self, QueueError<T>> {
        let capacity = QueueError::<T>::check_capacity(capacity)?;
        Ok(Self {
            items: ring::empty_slots(capacity),
            front: None,
            rear: None,
            len: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Appends `value` behind the newest element.
    ///
    /// A full queue returns the value inside [`QueueError::Full`] and stays unchanged.
    pub fn enqueue(&mut self, value: T) -> Result<(), QueueError<T>> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity(), "enqueue rejected, queue is full");
            return Err(QueueError::Full(value));
        }
        let rear = match self.rear {
            Some(rear) => ring::next(rear, self.capacity()),
            None => {
                self.front = Some(0);
                0
            }
        };
        self.items[rear] = Some(value);
        self.rear = Some(rear);
        self.len += 1;
        tracing::trace!(rear, len = self.len, "enqueued");
        Ok(())
    }

    /// Removes and returns the oldest element.
    pub fn dequeue(&mut self) -> Result<T, QueueError<T>> {
        let Some(front) = self.front else {
            tracing::debug!("dequeue rejected, queue is empty");
            return Err(QueueError::Empty);
        };
        let value = self.items[front].take().ok_or(QueueError::Empty)?;
        self.len -= 1;
        if self.len == 0 {
            self.front = None;
            self.rear = None;
        } else {
            self.front = Some(ring::next(front, self.capacity()));
        }
        tracing::trace!(front, len = self.len, "dequeued");
        Ok(value)
    }

    /// Returns the oldest element without removing it.
    pub fn peek(&self) -> Result<&T, QueueError<T>> {
        self.front
            .and_then(|front| self.items[front].as_ref())
            .ok_or(QueueError::Empty)
    }

    /// Iterates from the oldest to the newest element.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.items.iter_mut().for_each(|slot| *slot = None);
        self.front = None;
        self.rear = None;
        self.len = 0;
    }
}

// space separated, oldest first
impl<T: fmt::Display> fmt::Display for CircQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
