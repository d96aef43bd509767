use prompt::Command;
use queues::{CircQueue, Element, QueueError, SortedPriorityQueue};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub type Entry = Element<i32, i32>;

/// A circular queue and a priority queue driven by [`Command`]s.
pub struct Session {
    circ_queue: CircQueue<i32>,
    priority_queue: SortedPriorityQueue<i32, i32>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("circular queue: {0}")]
    CircQueue(#[from] QueueError<i32>),
    #[error("priority queue: {0}")]
    PriorityQueue(#[from] QueueError<Entry>),
}

/// What a successfully applied command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Enqueued(i32),
    Dequeued(i32),
    Front(i32),
    Contents(Vec<i32>),
    Inserted(Entry),
    ExtractedMin(Entry),
    Min(Entry),
    Help,
    Quit,
}

#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub circ_queue: Vec<i32>,
    pub priority_queue: Vec<&'a Entry>,
}

impl Session {
    pub fn with_capacity(capacity: usize) -> Result<Self, SessionError> {
        Ok(Self {
            circ_queue: CircQueue::with_capacity(capacity)?,
            priority_queue: SortedPriorityQueue::with_capacity(capacity)?,
        })
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome, SessionError> {
        let outcome = match command {
            Command::Enqueue(value) => {
                self.circ_queue.enqueue(value)?;
                Outcome::Enqueued(value)
            }
            Command::Dequeue => Outcome::Dequeued(self.circ_queue.dequeue()?),
            Command::Peek => Outcome::Front(*self.circ_queue.peek()?),
            Command::Show => Outcome::Contents(self.circ_queue.to_vec()),
            Command::Insert { value, priority } => {
                self.priority_queue.insert(value, priority)?;
                Outcome::Inserted(Element::new(value, priority))
            }
            Command::ExtractMin => Outcome::ExtractedMin(self.priority_queue.extract_min()?),
            Command::PeekMin => Outcome::Min(*self.priority_queue.peek_min()?),
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            circ_queue: self.circ_queue.to_vec(),
            priority_queue: self.priority_queue.iter().collect(),
        }
    }
}

// The commands replayed when no session is requested.
pub fn demo_script() -> Vec<Command> {
    vec![
        Command::Enqueue(10),
        Command::Enqueue(20),
        Command::Enqueue(30),
        Command::Show,
        Command::Dequeue,
        Command::Show,
        Command::Peek,
        Command::Insert {
            value: 5,
            priority: 2,
        },
        Command::Insert {
            value: 10,
            priority: 1,
        },
        Command::ExtractMin,
    ]
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Enqueued(value) => write!(f, "Enqueued: {value}"),
            Outcome::Dequeued(value) => write!(f, "Dequeued: {value}"),
            Outcome::Front(value) => write!(f, "Front element is: {value}"),
            Outcome::Contents(values) if values.is_empty() => f.write_str("Queue is empty"),
            Outcome::Contents(values) => {
                f.write_str("Queue contents:")?;
                for value in values {
                    write!(f, " {value}")?;
                }
                Ok(())
            }
            Outcome::Inserted(entry) => {
                write!(f, "Inserted: {} with priority {}", entry.value, entry.priority)
            }
            Outcome::ExtractedMin(entry) => {
                write!(f, "Extracted min: {} with priority {}", entry.value, entry.priority)
            }
            Outcome::Min(entry) => {
                write!(f, "Min element is: {} with priority {}", entry.value, entry.priority)
            }
            Outcome::Help => f.write_str(Command::HELP),
            Outcome::Quit => f.write_str("bye"),
        }
    }
}
