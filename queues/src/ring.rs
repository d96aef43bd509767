// Slot arithmetic shared by both queues. `capacity` is never zero once a queue exists.

pub(crate) fn wrap_add(index: usize, offset: usize, capacity: usize) -> usize {
    (index + offset) % capacity
}

pub(crate) fn next(index: usize, capacity: usize) -> usize {
    wrap_add(index, 1, capacity)
}

pub(crate) fn empty_slots<T>(len: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(len).collect()
}
