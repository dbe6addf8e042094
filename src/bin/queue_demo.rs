//! 队列操作演示，最后打印各操作的耗时与理论复杂度

use linked_queue::timing::{run_suite, table_header};
use linked_queue::{HarnessConfig, LinkedQueue};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn show(queue: &LinkedQueue) {
    if queue.is_empty() {
        println!("Queue is empty.");
    } else {
        println!("{}", queue);
    }
}

fn report_search(queue: &LinkedQueue, val: i32) {
    match queue.search(val) {
        Some(position) => println!("Element {} found at position {}", val, position),
        None => println!("Element {} not found in the queue", val),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HarnessConfig::from_env()?;
    info!(sample_size = config.sample_size, "configuration loaded");

    println!("Queue Implementation using Doubly Linked List");
    println!("=============================================");

    let mut q1 = LinkedQueue::new();

    println!("\n1. Enqueue Operation:");
    for val in [10, 20, 30, 40, 50] {
        q1.enqueue(val);
    }
    show(&q1);

    println!("\n2. Dequeue Operation:");
    for _ in 0..2 {
        println!("Dequeued element: {}", q1.dequeue()?);
        show(&q1);
    }

    println!("\n3. Search Operation:");
    report_search(&q1, 30);
    report_search(&q1, 10);

    println!("\n4. Sort Operation:");
    print!("Before sorting: ");
    show(&q1);
    q1.sort();
    print!("After sorting: ");
    show(&q1);

    println!("\n5. Merge Operation:");
    let mut q2: LinkedQueue = [5, 15, 25].into_iter().collect();
    print!("First queue: ");
    show(&q1);
    print!("Second queue: ");
    show(&q2);
    q1.merge(&mut q2);
    print!("After merging: ");
    show(&q1);
    print!("Second queue after merging: ");
    show(&q2);

    println!("\n6. Time Complexity Analysis:");
    println!("{}", table_header());
    for row in run_suite(&config) {
        println!("{}", row);
    }

    Ok(())
}
