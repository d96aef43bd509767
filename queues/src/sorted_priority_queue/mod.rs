mod entries;
mod impls;

pub use entries::Entries;

use crate::Element;

/// Fixed-capacity min-priority queue kept sorted by insertion.
///
/// Live entries occupy `len` consecutive ring slots starting at `head`, in
/// non-decreasing priority order. The minimum therefore always sits at `head`
/// and is removed by advancing it.
#[derive(Debug, Clone)]
pub struct SortedPriorityQueue<V, P> {
    slots: Vec<Option<Element<V, P>>>,
    head: usize,
    len: usize,
}
