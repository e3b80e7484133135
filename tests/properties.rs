// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Property-based tests: random operation sequences must keep the heap
//! order and the entry count in step with a simple model.

use proptest::prelude::*;

use indexed_priority_queue::{
    natural, BinaryHeap, Compare, Precedes, PriorityQueue, QueueError,
};

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    Extract,
    DecreaseKey(u8, i32),
    Heapify(Vec<i32>),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-100i32..100).prop_map(Op::Insert),
        3 => Just(Op::Extract),
        3 => (any::<u8>(), -100i32..100).prop_map(|(v, p)| Op::DecreaseKey(v, p)),
        1 => prop::collection::vec(-100i32..100, 0..20).prop_map(Op::Heapify),
    ]
}

/// Applies `ops` to `pq` while tracking a model of the enqueued entries,
/// then empties the queue and returns the priorities in extraction order.
fn run_operations<C: Compare<i32>>(
    mut pq: PriorityQueue<i32, u32, C>,
    ops: Vec<Op>,
) -> Result<Vec<i32>, TestCaseError> {
    // (priority, payload) of every enqueued entry; payloads are unique.
    let mut model: Vec<(i32, u32)> = Vec::new();
    let mut next = 0u32;

    for op in ops {
        match op {
            Op::Insert(p) => {
                pq.insert(p, next);
                model.push((p, next));
                next += 1;
            }
            Op::Extract => match pq.extract_root() {
                Ok(entry) => {
                    let first = model.iter()
                        .map(|e| e.0)
                        .min_by(|a, b| pq.comparator().compare(a, b))
                        .unwrap();
                    prop_assert_eq!(entry.priority, first);
                    let i = model.iter().position(|e| e.1 == entry.payload).unwrap();
                    prop_assert_eq!(model[i].0, entry.priority);
                    model.swap_remove(i);
                }
                Err(err) => {
                    prop_assert_eq!(err, QueueError::EmptyQueue);
                    prop_assert!(model.is_empty());
                }
            },
            Op::DecreaseKey(v, p) => {
                let v = u32::from(v) % (next + 1);
                let before: Vec<_> = pq.iter().cloned().collect();
                let updated = pq.decrease_key(&v, p);
                match model.iter_mut().find(|e| e.1 == v) {
                    Some(e) => {
                        prop_assert!(updated);
                        e.0 = p;
                    }
                    None => {
                        prop_assert!(!updated);
                        let after: Vec<_> = pq.iter().cloned().collect();
                        prop_assert_eq!(before, after);
                    }
                }
            }
            Op::Heapify(ps) => {
                model = ps.iter()
                    .enumerate()
                    .map(|(i, &p)| (p, next + i as u32))
                    .collect();
                next += ps.len() as u32;
                pq.heapify(model.clone());
            }
        }
        prop_assert!(pq.is_valid());
        prop_assert_eq!(pq.len(), model.len());
        prop_assert_eq!(pq.is_empty(), model.is_empty());
    }

    let mut popped = Vec::new();
    while let Ok(entry) = pq.extract_root() {
        popped.push(entry.priority);
    }
    prop_assert_eq!(popped.len(), model.len());
    Ok(popped)
}

proptest! {
    #[test]
    fn operations_preserve_heap_order(ops in prop::collection::vec(op(), 0..100)) {
        let popped = run_operations(PriorityQueue::new(), ops)?;
        prop_assert!(popped.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn operations_preserve_reversed_heap_order(ops in prop::collection::vec(op(), 0..100)) {
        let pq = PriorityQueue::with_comparator(natural::<i32>().rev());
        let popped = run_operations(pq, ops)?;
        prop_assert!(popped.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn operations_preserve_predicate_heap_order(ops in prop::collection::vec(op(), 0..100)) {
        let pq = PriorityQueue::with_comparator(Precedes::new(|a: &i32, b: &i32| a > b));
        let popped = run_operations(pq, ops)?;
        prop_assert!(popped.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn heapify_extracts_in_order(items in prop::collection::vec(any::<i16>(), 0..200)) {
        let mut heap = BinaryHeap::new();
        heap.heapify(items.clone());
        prop_assert!(heap.is_valid());

        let mut expected = items;
        expected.sort();
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn reversed_comparator_extracts_descending(items in prop::collection::vec(any::<i16>(), 0..200)) {
        let mut heap = BinaryHeap::with_comparator(natural::<i16>().rev());
        for &x in &items {
            heap.push(x);
        }

        let mut expected = items;
        expected.sort_by(|a, b| b.cmp(a));
        let mut popped = Vec::new();
        while let Some(x) = heap.pop() {
            popped.push(x);
        }
        prop_assert_eq!(popped, expected);
    }
}
