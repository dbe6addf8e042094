use linked_queue::{LinkedQueue, QueueError};

fn contents(queue: &LinkedQueue) -> Vec<i32> {
    queue.iter().collect()
}

#[test]
fn test_walkthrough() {
    let mut q1 = LinkedQueue::new();
    for val in [10, 20, 30, 40, 50] {
        q1.enqueue(val);
    }

    assert_eq!(q1.dequeue(), Ok(10));
    assert_eq!(q1.dequeue(), Ok(20));
    assert_eq!(contents(&q1), vec![30, 40, 50]);

    // 出队后重新编号
    assert_eq!(q1.search(30), Some(0));
    assert_eq!(q1.search(10), None);

    q1.sort();
    assert_eq!(q1.to_string(), "Queue [30 <- 40 <- 50]");

    let mut q2: LinkedQueue = [5, 15, 25].into_iter().collect();
    q1.merge(&mut q2);
    assert_eq!(contents(&q1), vec![30, 40, 50, 5, 15, 25]);
    assert!(q2.is_empty());
    assert_eq!(q2.to_string(), "Queue []");

    q1.sort();
    assert_eq!(contents(&q1), vec![5, 15, 25, 30, 40, 50]);
}

#[test]
fn test_sort_descending_after_dequeues() {
    let mut queue: LinkedQueue = [70, 60, 50, 40, 30].into_iter().collect();
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    assert_eq!(contents(&queue), vec![50, 40, 30]);
    queue.sort();
    assert_eq!(contents(&queue), vec![30, 40, 50]);
}

#[test]
fn test_merge_into_empty() {
    let mut empty = LinkedQueue::new();
    let mut source: LinkedQueue = [5, 15, 25].into_iter().collect();
    empty.merge(&mut source);
    assert_eq!(contents(&empty), vec![5, 15, 25]);
    assert_eq!(source.len(), 0);
    assert!(source.is_empty());
}

#[test]
fn test_underflow_is_an_error() {
    let mut queue = LinkedQueue::new();
    let err = queue.dequeue().unwrap_err();
    assert_eq!(err, QueueError::Underflow);
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_repeated_pairs_leave_empty() {
    let mut queue = LinkedQueue::new();
    for i in 0..1_000 {
        queue.enqueue(i);
        assert_eq!(queue.dequeue(), Ok(i));
    }
    assert!(queue.is_empty());
    assert_eq!(queue.slot_count(), 1);
}
