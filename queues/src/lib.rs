//! Fixed-capacity queues: a circular FIFO and a sorted-insertion min-priority queue.

mod circ_queue;
mod element;
mod error;
mod ring;
mod sorted_priority_queue;

pub use circ_queue::{CircQueue, Iter};
pub use element::Element;
pub use error::QueueError;
pub use sorted_priority_queue::{Entries, SortedPriorityQueue};
