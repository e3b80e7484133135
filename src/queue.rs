// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A priority queue of `(priority, payload)` entries with decrease-key.
//!
//! [`PriorityQueue`] is a thin layer over [`BinaryHeap`]: the heap orders
//! entries by priority alone through [`ByPriority`], and the queue adds
//! lookup of an entry by its payload and in-place priority changes.
//!
//! Payload lookup is a linear scan over the heap in position order. If
//! several entries share a payload, only the first one found is visible to
//! [`find`], [`priority_of`] and [`decrease_key`].
//!
//! [`find`]: struct.PriorityQueue.html#method.find
//! [`priority_of`]: struct.PriorityQueue.html#method.priority_of
//! [`decrease_key`]: struct.PriorityQueue.html#method.decrease_key

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::iter;

use compare::{natural, Compare, Natural};
use log::{debug, trace};

use crate::error::QueueError;
use crate::heap::{self, BinaryHeap};

/// A priority paired with the payload it was enqueued with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HeapEntry<P, V> {
    pub priority: P,
    pub payload: V,
}

impl<P, V> HeapEntry<P, V> {
    pub fn new(priority: P, payload: V) -> HeapEntry<P, V> {
        HeapEntry { priority: priority, payload: payload }
    }

    pub fn into_tuple(self) -> (P, V) {
        (self.priority, self.payload)
    }
}

impl<P, V> From<(P, V)> for HeapEntry<P, V> {
    fn from((priority, payload): (P, V)) -> HeapEntry<P, V> {
        HeapEntry::new(priority, payload)
    }
}

/// Orders heap entries by their priorities only, using the wrapped
/// comparator. Payloads never take part in the ordering.
#[derive(Clone, Copy, Default, Debug)]
pub struct ByPriority<C>(C);

impl<C> ByPriority<C> {
    pub fn new(cmp: C) -> ByPriority<C> { ByPriority(cmp) }

    /// Returns the comparator applied to priorities.
    pub fn get_ref(&self) -> &C { &self.0 }
}

impl<P, V, C: Compare<P>> Compare<HeapEntry<P, V>> for ByPriority<C> {
    fn compare(&self, l: &HeapEntry<P, V>, r: &HeapEntry<P, V>) -> Ordering {
        self.0.compare(&l.priority, &r.priority)
    }
}

/// A min-priority queue (under its comparator) that can locate entries by
/// payload and change their priority.
///
/// The comparator is fixed when the queue is built. The default natural
/// order puts the smallest priority at the root; build a new queue with a
/// reversed comparator to get a max-queue.
///
/// The queue owns its payloads. For graph traversals, store vertex ids or
/// shared references to vertices so the graph itself stays with the caller.
///
/// # Examples
///
/// ```
/// use indexed_priority_queue::{PriorityQueue, QueueError};
///
/// let mut pq = PriorityQueue::new();
/// pq.heapify(vec![(5, "e"), (3, "c"), (8, "h")]);
/// pq.insert(1, "a");
///
/// assert_eq!(pq.len(), 4);
/// assert_eq!(pq.extract_root().map(|e| e.into_tuple()), Ok((1, "a")));
/// assert_eq!(pq.peek_root().map(|e| e.priority), Ok(3));
///
/// pq.clear();
/// assert_eq!(pq.extract_root(), Err(QueueError::EmptyQueue));
/// ```
#[derive(Clone)]
pub struct PriorityQueue<P, V, C: Compare<P> = Natural<P>> {
    heap: BinaryHeap<HeapEntry<P, V>, ByPriority<C>>,
}

impl<P, V, C: Compare<P> + Default> Default for PriorityQueue<P, V, C> {
    #[inline]
    fn default() -> PriorityQueue<P, V, C> {
        Self::with_comparator(C::default())
    }
}

impl<P: Ord, V> PriorityQueue<P, V> {
    /// Returns an empty queue ordered by the natural order of its priorities.
    pub fn new() -> PriorityQueue<P, V> { Self::with_comparator(natural()) }

    /// Returns an empty queue with the given capacity and ordered by the
    /// natural order of its priorities.
    pub fn with_capacity(capacity: usize) -> PriorityQueue<P, V> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<P, V, C: Compare<P>> PriorityQueue<P, V, C> {
    /// Returns an empty queue ordered by the given priority comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_queue::{natural, Compare, PriorityQueue};
    ///
    /// let mut pq = PriorityQueue::with_comparator(natural::<i32>().rev());
    /// pq.insert(2, 'b');
    /// pq.insert(9, 'i');
    /// assert_eq!(pq.peek_root().map(|e| e.payload), Ok('i'));
    /// ```
    pub fn with_comparator(cmp: C) -> PriorityQueue<P, V, C> {
        PriorityQueue { heap: BinaryHeap::with_comparator(ByPriority(cmp)) }
    }

    /// Returns an empty queue with the given capacity and ordered by the given
    /// priority comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> PriorityQueue<P, V, C> {
        PriorityQueue {
            heap: BinaryHeap::with_capacity_and_comparator(capacity, ByPriority(cmp)),
        }
    }

    /// Returns the comparator applied to priorities.
    pub fn comparator(&self) -> &C {
        self.heap.comparator().get_ref()
    }

    /// Returns the number of entries in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue contains no entries.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Discards the current entries and builds the queue from `entries` in
    /// linear time.
    pub fn heapify<I: IntoIterator<Item = (P, V)>>(&mut self, entries: I) {
        self.heap.heapify(entries.into_iter().map(HeapEntry::from));
        debug!("heapified priority queue with {} entries", self.heap.len());
    }

    /// Adds an entry. It is placed after the last entry and percolates up.
    pub fn insert(&mut self, priority: P, payload: V) {
        self.heap.push(HeapEntry::new(priority, payload));
    }

    /// Returns the root entry without removing it.
    ///
    /// Fails with `QueueError::EmptyQueue` if the queue is empty.
    pub fn peek_root(&self) -> Result<&HeapEntry<P, V>, QueueError> {
        self.heap.peek().ok_or(QueueError::EmptyQueue)
    }

    /// Removes and returns the root entry. The last entry takes its place
    /// and percolates down.
    ///
    /// Fails with `QueueError::EmptyQueue` if the queue is empty.
    pub fn extract_root(&mut self) -> Result<HeapEntry<P, V>, QueueError> {
        self.heap.pop().ok_or(QueueError::EmptyQueue)
    }

    /// Returns the entry at the given 1-based position, the root being 1.
    pub fn get(&self, pos: usize) -> Option<&HeapEntry<P, V>> {
        self.heap.get(pos)
    }

    /// Returns `true` if some entry carries `payload`.
    pub fn contains(&self, payload: &V) -> bool where V: PartialEq {
        self.find(payload).is_some()
    }

    /// Returns the 1-based position of the first entry, in position order,
    /// that carries `payload`.
    pub fn find(&self, payload: &V) -> Option<usize> where V: PartialEq {
        self.heap.position(|entry| entry.payload == *payload)
    }

    /// Returns the priority of the first entry that carries `payload`.
    pub fn priority_of(&self, payload: &V) -> Option<&P> where V: PartialEq {
        self.find(payload)
            .and_then(|pos| self.heap.get(pos))
            .map(|entry| &entry.priority)
    }

    /// Replaces the priority of the first entry carrying `payload` and
    /// restores the heap order.
    ///
    /// The entry normally moves toward the root. A priority that orders
    /// after the old one is accepted as well; the entry then moves toward
    /// the leaves.
    ///
    /// Returns `false` and leaves the queue untouched when no entry carries
    /// `payload`. Use [`contains`](#method.contains) beforehand if the
    /// caller must tell the two cases apart up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_queue::PriorityQueue;
    ///
    /// let mut pq = PriorityQueue::new();
    /// for &(p, v) in &[(4, 'x'), (3, 'y'), (5, 'z'), (6, 'a'), (2, 'd')] {
    ///     pq.insert(p, v);
    /// }
    ///
    /// assert!(pq.decrease_key(&'z', 1));
    /// assert_eq!(pq.find(&'z'), Some(1));
    ///
    /// assert!(!pq.decrease_key(&'q', 0));
    /// assert_eq!(pq.len(), 5);
    /// ```
    pub fn decrease_key(&mut self, payload: &V, priority: P) -> bool where V: PartialEq {
        let pos = match self.find(payload) {
            Some(pos) => pos,
            None => {
                trace!("decrease_key: payload not enqueued, nothing to do");
                return false;
            }
        };

        let raised = match self.heap.get(pos) {
            Some(entry) => self.comparator().compares_gt(&priority, &entry.priority),
            None => false,
        };
        if raised {
            debug!("decrease_key: priority at position {} moved away from the root", pos);
        }

        let new_pos = self.heap.update(pos, |entry| entry.priority = priority);
        trace!("decrease_key: entry moved from position {} to {:?}", pos, new_pos);
        true
    }

    /// Returns an iterator visiting all entries in position order, root first.
    pub fn iter(&self) -> heap::Iter<'_, HeapEntry<P, V>> {
        self.heap.iter()
    }

    /// Removes all entries from the queue.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Reserves capacity for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
    }

    /// Consumes the queue and returns its entries in extraction order.
    pub fn into_sorted_vec(self) -> Vec<HeapEntry<P, V>> {
        self.heap.into_sorted_vec()
    }

    /// Consumes the queue and returns the underlying heap.
    pub fn into_heap(self) -> BinaryHeap<HeapEntry<P, V>, ByPriority<C>> {
        self.heap
    }

    /// Checks the heap-order invariant over the entries' priorities.
    pub fn is_valid(&self) -> bool {
        self.heap.is_valid()
    }
}

impl<P: Debug, V: Debug, C: Compare<P>> Debug for PriorityQueue<P, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Debug::fmt(&self.heap, f)
    }
}

impl<P: Debug, V: Debug, C: Compare<P>> Display for PriorityQueue<P, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.heap, f)
    }
}

impl<P, V, C: Compare<P> + Default> iter::FromIterator<(P, V)> for PriorityQueue<P, V, C> {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> PriorityQueue<P, V, C> {
        let mut pq = PriorityQueue::default();
        pq.heapify(iter);
        pq
    }
}

impl<P, V, C: Compare<P>> Extend<(P, V)> for PriorityQueue<P, V, C> {
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        self.heap.extend(iter.into_iter().map(HeapEntry::from));
    }
}

impl<P, V, C: Compare<P>> IntoIterator for PriorityQueue<P, V, C> {
    type Item = HeapEntry<P, V>;
    type IntoIter = heap::IntoIter<HeapEntry<P, V>>;
    fn into_iter(self) -> heap::IntoIter<HeapEntry<P, V>> { self.heap.into_iter() }
}

impl<'a, P, V, C: Compare<P>> IntoIterator for &'a PriorityQueue<P, V, C> {
    type Item = &'a HeapEntry<P, V>;
    type IntoIter = heap::Iter<'a, HeapEntry<P, V>>;
    fn into_iter(self) -> heap::Iter<'a, HeapEntry<P, V>> { self.heap.iter() }
}
