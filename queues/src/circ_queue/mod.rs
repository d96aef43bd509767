mod impls;
mod iter;

pub use iter::Iter;

/// Fixed-capacity FIFO queue over a ring of slots.
///
/// `front` and `rear` are `None` exactly when the queue is empty. `len` is
/// authoritative for the full and empty checks, so all `capacity` slots are usable.
#[derive(Debug, Clone)]
pub struct CircQueue<T> {
    items: Vec<Option<T>>,
    front: Option<usize>,
    rear: Option<usize>,
    len: usize,
}
