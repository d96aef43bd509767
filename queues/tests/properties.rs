use queues::{CircQueue, Element, QueueError, SortedPriorityQueue};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

const SEED: u64 = 0x5eed_c1c0;

#[test]
fn circ_queue_matches_vec_deque_model() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for capacity in 1..=8 {
        let mut queue = CircQueue::with_capacity(capacity).unwrap();
        let mut model = VecDeque::new();
        for step in 0..500 {
            if rng.gen_bool(0.55) {
                let value: u32 = rng.gen();
                match queue.enqueue(value) {
                    Ok(()) => model.push_back(value),
                    Err(err) => {
                        assert_eq!(model.len(), capacity, "step {step}");
                        assert_eq!(err, QueueError::Full(value));
                    }
                }
            } else {
                match queue.dequeue() {
                    Ok(value) => assert_eq!(Some(value), model.pop_front()),
                    Err(err) => {
                        assert!(model.is_empty(), "step {step}");
                        assert_eq!(err, QueueError::Empty);
                    }
                }
            }
            assert!(queue.len() <= capacity);
            assert_eq!(queue.len(), model.len());
            assert_eq!(queue.is_empty(), model.is_empty());
            assert_eq!(queue.is_full(), model.len() == capacity);
            assert_eq!(queue.to_vec(), Vec::from(model.clone()));
            assert_eq!(queue.peek().ok(), model.front());
        }
    }
}

#[test]
fn sorted_priority_queue_matches_stable_sort_model() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for capacity in 1..=8 {
        let mut queue = SortedPriorityQueue::with_capacity(capacity).unwrap();
        // (priority, insertion sequence number)
        let mut model: Vec<(i8, usize)> = Vec::new();
        for sequence in 0..500 {
            if rng.gen_bool(0.55) {
                let priority = rng.gen_range(-3..=3);
                match queue.insert(sequence, priority) {
                    Ok(()) => {
                        model.push((priority, sequence));
                        model.sort_by_key(|&(priority, _)| priority);
                    }
                    Err(err) => {
                        assert_eq!(model.len(), capacity);
                        assert!(err.is_full());
                    }
                }
            } else {
                match queue.extract_min() {
                    Ok(entry) => {
                        let (priority, sequence) = model.remove(0);
                        assert_eq!(entry, Element::new(sequence, priority));
                    }
                    Err(err) => {
                        assert!(model.is_empty());
                        assert!(err.is_empty());
                    }
                }
            }
            let entries: Vec<(i8, usize)> = queue
                .iter()
                .map(|entry| (entry.priority, entry.value))
                .collect();
            assert_eq!(entries, model);
        }
    }
}

#[test]
fn full_circ_queue_rejects_without_changing_contents() {
    let mut queue = CircQueue::with_capacity(3).unwrap();
    for value in [1, 2, 3] {
        queue.enqueue(value).unwrap();
    }
    let before = queue.to_vec();
    let err = queue.enqueue(4).unwrap_err();
    assert_eq!(err.into_inner(), Some(4));
    assert_eq!(queue.to_vec(), before);
}

#[test]
fn priority_queue_rejects_one_past_capacity() {
    let mut queue = SortedPriorityQueue::with_capacity(4).unwrap();
    for value in 0..4 {
        queue.insert(value, 4 - value).unwrap();
    }
    assert_eq!(
        queue.insert(99, 0),
        Err(QueueError::Full(Element::new(99, 0)))
    );
    assert_eq!(queue.len(), 4);
    assert_eq!(queue.peek_min(), Ok(&Element::new(3, 1)));
}

#[test]
fn element_serializes_with_named_fields() {
    let element = Element::new(10, 1);
    let json = serde_json::to_string(&element).unwrap();
    assert_eq!(json, r#"{"value":10,"priority":1}"#);
}
