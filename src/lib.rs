// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A mutable priority queue implemented with an indexed binary heap.
//!
//! [`BinaryHeap`] is a plain array-backed binary heap that accepts custom
//! comparators. [`PriorityQueue`] wraps one and stores `(priority, payload)`
//! entries, adding the ability to locate an entry by its payload and to
//! change its priority in place (decrease-key), as needed by Prim's and
//! Dijkstra's algorithms.
//!
//! Insertion, extraction of the root and decrease-key percolation are
//! `O(log n)`. Peeking at the root is `O(1)`. Building a heap from a vector
//! and locating an entry by payload are `O(n)`.
//!
//! The ordering is supplied by a [`Compare`] value and defaults to the
//! natural order of the priorities, which makes the queue a min-queue.
//! Use `natural().rev()`, a closure, or [`Precedes`] to change polarity.
//!
//! ```
//! use indexed_priority_queue::PriorityQueue;
//!
//! let mut pq = PriorityQueue::new();
//! pq.insert(4, 'x');
//! pq.insert(3, 'y');
//! pq.insert(5, 'z');
//!
//! assert!(pq.decrease_key(&'z', 1));
//! assert_eq!(pq.extract_root().map(|e| e.payload), Ok('z'));
//! assert_eq!(pq.extract_root().map(|e| e.payload), Ok('y'));
//! ```
//!
//! [`Compare`]: https://docs.rs/compare/0.1/compare/trait.Compare.html

pub use compare::{natural, Compare, Natural, Rev};

pub use crate::error::QueueError;
pub use crate::heap::{BinaryHeap, Drain, IntoIter, Iter};
pub use crate::predicate::Precedes;
pub use crate::queue::{ByPriority, HeapEntry, PriorityQueue};

mod error;
pub mod heap;
mod predicate;
pub mod queue;

// Heap positions are 1-based: the root lives at position 1 and the
// children of position `i` live at `2i` and `2i + 1`. Position 0 never
// names an item. Position `i` is stored in slot `i - 1` of the backing
// vector, so the vector's length is always the heap's size.
//
//            1
//          /   \
//        2       3
//       / \     / \
//      4   5   6   7

fn is_root(pos: usize) -> bool { parent(pos) == 0 }

fn parent(pos: usize) -> usize { pos / 2 }

fn left(pos: usize) -> usize { pos * 2 }

fn right(pos: usize) -> usize { pos * 2 + 1 }

/// Index of the vector slot holding position `pos`.
fn slot(pos: usize) -> usize {
    debug_assert!(pos > 0);
    pos - 1
}

#[cfg(test)]
mod test {
    use super::{is_root, left, parent, right, slot};

    #[test]
    fn test_index_arithmetic() {
        assert!(is_root(1));
        assert!(!is_root(2));
        assert!(!is_root(3));

        assert_eq!(parent(2), 1);
        assert_eq!(parent(3), 1);
        assert_eq!(parent(7), 3);

        assert_eq!(left(1), 2);
        assert_eq!(right(1), 3);
        assert_eq!(left(3), 6);
        assert_eq!(right(3), 7);

        for pos in 2..64 {
            assert!(parent(pos) < pos);
            assert!(left(parent(pos)) == pos || right(parent(pos)) == pos);
        }

        assert_eq!(slot(1), 0);
        assert_eq!(slot(6), 5);
    }
}
