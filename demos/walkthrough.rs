//! Walkthrough of both heap flavours
//!
//! Replays the classic textbook sequence on a fixed-capacity max-heap, then a
//! small key/value session on a dynamic min-heap.
//!
//! ```bash
//! cargo run --example walkthrough
//! ```

use rust_binary_heaps::binary::BinaryHeap;
use rust_binary_heaps::fixed::FixedHeap;
use rust_binary_heaps::{HeapError, Max, PriorityQueue};

fn priorities(heap: &FixedHeap<(), i32, Max>) -> Vec<i32> {
    heap.iter().map(|item| item.priority).collect()
}

fn main() -> Result<(), HeapError> {
    let mut max: FixedHeap<(), i32, Max> = FixedHeap::with_capacity(20);
    for p in [20, 15, 40, 10, 5, 7, 12, 2, 9, 1, 39] {
        max.push(p, ())?;
    }
    println!("{:?}", priorities(&max));

    max.increase_key(5, 22)?;
    println!("{:?}", priorities(&max));

    max.decrease_key(0, 3)?;
    println!("{:?}", priorities(&max));

    println!("{}", max.peek()?.priority);
    println!("{}", max.pop()?.priority);
    println!("{:?}", priorities(&max));

    while let Ok(item) = max.pop() {
        println!("{}", item.priority);
    }

    let mut min: BinaryHeap<i32, i32> = BinaryHeap::new();
    min.push(8, 2)?;
    min.push(29, 12)?;
    min.extend([(3, 7), (17, 1), (11, 5)]);
    print!("{}\n\n", min.tree());

    let sorted: Vec<String> = min.sorted_payloads().iter().map(|v| v.to_string()).collect();
    println!("sorted payloads: {}", sorted.join(", "));

    if let Some(position) = min.position_of(|item| item.payload == 12) {
        min.update_key(position, 1)?;
    }
    println!("{}", min.tree());
    println!("top: {}", min.pop()?);

    Ok(())
}
