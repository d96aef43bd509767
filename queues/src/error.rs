use thiserror::Error;

/// Failure of a queue operation. The queue is left untouched whenever one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError<T> {
    #[error("queue capacity must be positive, got {capacity}")]
    InvalidCapacity { capacity: usize },
    /// The rejected item is handed back to the caller.
    #[error("queue is full")]
    Full(T),
    #[error("queue is empty")]
    Empty,
}

impl<T> QueueError<T> {
    /// Recovers the item rejected by a full queue.
    pub fn into_inner(self) -> Option<T> {
        match self {
            QueueError::Full(item) => Some(item),
            QueueError::InvalidCapacity { .. } | QueueError::Empty => None,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, QueueError::Full(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, QueueError::Empty)
    }

    pub(crate) fn check_capacity(capacity: usize) -> Result<usize, Self> {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity { capacity });
        }
        Ok(capacity)
    }
}
