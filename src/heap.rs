// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A binary heap with a custom comparator.
//!
//! The item that compares *least* under the heap's comparator sits at the
//! root, so the default natural order yields a min-heap.

use std::fmt::{self, Debug, Display};
use std::iter;
use std::slice;
use std::vec;

use compare::{natural, Compare, Natural};

use crate::{is_root, left, parent, right, slot};

/// Moves the item at position `pos` toward the root while it compares
/// strictly less than its parent. Returns the item's final position.
fn percolate_up<T, C: Compare<T>>(v: &mut [T], mut pos: usize, cmp: &C) -> usize {
    debug_assert!(pos >= 1 && pos <= v.len());
    while !is_root(pos) {
        let par = parent(pos);
        if !cmp.compares_lt(&v[slot(pos)], &v[slot(par)]) {
            break;
        }
        v.swap(slot(pos), slot(par));
        pos = par;
    }
    pos
}

/// Returns the child of `pos` that should be promoted first, or `None` if
/// `pos` is a leaf. The right child wins only when it compares strictly
/// less than the left one, so ties go to the left child.
fn preferred_child<T, C: Compare<T>>(v: &[T], pos: usize, cmp: &C) -> Option<usize> {
    let (l, r) = (left(pos), right(pos));
    if r <= v.len() {
        if cmp.compares_lt(&v[slot(r)], &v[slot(l)]) { Some(r) } else { Some(l) }
    } else if l <= v.len() {
        Some(l)
    } else {
        None
    }
}

/// Moves the item at position `pos` toward the leaves while its preferred
/// child compares strictly less than it. Returns the item's final position.
fn percolate_down<T, C: Compare<T>>(v: &mut [T], mut pos: usize, cmp: &C) -> usize {
    debug_assert!(pos >= 1 && pos <= v.len());
    while let Some(child) = preferred_child(v, pos, cmp) {
        if !cmp.compares_lt(&v[slot(child)], &v[slot(pos)]) {
            break;
        }
        v.swap(slot(pos), slot(child));
        pos = child;
    }
    pos
}

/// Turns an arbitrary slice into a valid heap in `O(n)` by percolating
/// every non-leaf position down, starting from the parent of the last item.
fn build<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    for pos in (1..parent(v.len()) + 1).rev() {
        percolate_down(v, pos, cmp);
    }
}

/// A priority queue implemented with a binary heap.
///
/// Positions are 1-based: the root is at position 1 and the children of
/// position `i` are at `2i` and `2i + 1`.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the heap's
/// comparator, changes while it is in the heap, except through
/// [`update`](#method.update).
#[derive(Clone)]
pub struct BinaryHeap<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    #[inline]
    fn default() -> BinaryHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Returns an empty heap ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_queue::BinaryHeap;
    ///
    /// let heap = BinaryHeap::<u32>::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> BinaryHeap<T> { Self::with_comparator(natural()) }

    /// Returns an empty heap with the given capacity and ordered according to the
    /// natural order of its items.
    pub fn with_capacity(capacity: usize) -> BinaryHeap<T> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_queue::BinaryHeap;
    ///
    /// let heap = BinaryHeap::from(vec![6, 5, 4, 3, 2, 1]);
    /// assert_eq!(heap.len(), 6);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    fn from(vec: Vec<T>) -> BinaryHeap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_queue::{natural, BinaryHeap, Compare};
    ///
    /// let mut heap = BinaryHeap::with_comparator(natural::<i32>().rev());
    /// heap.push(2);
    /// heap.push(7);
    /// assert_eq!(heap.pop(), Some(7));
    /// ```
    pub fn with_comparator(cmp: C) -> BinaryHeap<T, C> {
        BinaryHeap { data: vec![], cmp: cmp }
    }

    /// Returns an empty heap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> BinaryHeap<T, C> {
        BinaryHeap { data: Vec::with_capacity(capacity), cmp: cmp }
    }

    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the given comparator.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, cmp: C) -> BinaryHeap<T, C> {
        build(&mut vec, &cmp);
        let heap = BinaryHeap { data: vec, cmp: cmp };
        debug_assert!(heap.is_valid());
        heap
    }

    /// Replaces the contents of the heap with the given items and restores the
    /// heap order in linear time.
    pub fn heapify<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.data.clear();
        self.data.extend(items);
        build(&mut self.data, &self.cmp);
        debug_assert!(self.is_valid());
    }

    /// Returns the comparator ordering this heap.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns an iterator visiting all items in position order, root first.
    pub fn iter(&self) -> Iter<'_, T> {
        debug_assert!(self.is_valid());
        Iter(self.data.iter())
    }

    /// Returns a reference to the root, the item that compares least.
    ///
    /// Returns `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.data.first()
    }

    /// Returns a reference to the item at the given 1-based position.
    ///
    /// Returns `None` if `pos` is 0 or past the last item.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_queue::BinaryHeap;
    ///
    /// let heap = BinaryHeap::from(vec![6, 5, 4, 3, 2, 1]);
    /// assert_eq!(heap.get(1), Some(&1));
    /// assert_eq!(heap.get(3), Some(&4));
    /// assert_eq!(heap.get(0), None);
    /// assert_eq!(heap.get(7), None);
    /// ```
    pub fn get(&self, pos: usize) -> Option<&T> {
        match pos {
            0 => None,
            _ => self.data.get(slot(pos)),
        }
    }

    /// Returns `true` if the given position has no children in this heap.
    pub fn is_leaf(&self, pos: usize) -> bool {
        left(pos) > self.data.len()
    }

    /// Returns the first position, in position order, whose item satisfies
    /// `pred`. This is a linear scan.
    pub fn position<P>(&self, mut pred: P) -> Option<usize> where P: FnMut(&T) -> bool {
        self.data.iter().position(|item| pred(item)).map(|i| i + 1)
    }

    /// Applies `f` to the item at position `pos` and moves it to wherever the
    /// heap order requires: toward the root if it now compares less than
    /// its parent, toward the leaves otherwise.
    ///
    /// Returns the item's new position, or `None` if `pos` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_queue::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::from(vec![1, 2, 3]);
    /// assert_eq!(heap.update(3, |x| *x = 0), Some(1));
    /// assert_eq!(heap.peek(), Some(&0));
    /// ```
    pub fn update<F>(&mut self, pos: usize, f: F) -> Option<usize> where F: FnOnce(&mut T) {
        if pos == 0 || pos > self.data.len() {
            return None;
        }
        f(&mut self.data[slot(pos)]);
        let mut new_pos = percolate_up(&mut self.data, pos, &self.cmp);
        if new_pos == pos {
            new_pos = percolate_down(&mut self.data, pos, &self.cmp);
        }
        debug_assert!(self.is_valid());
        Some(new_pos)
    }

    /// Returns the number of items the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more items to be inserted into the heap.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Removes the root from the heap and returns it. The last item takes
    /// its place and percolates down.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop(&mut self) -> Option<T> {
        debug_assert!(self.is_valid());
        let root = match self.data.len() {
            0 | 1 => self.data.pop(),
            _ => {
                let res = self.data.swap_remove(0);
                percolate_down(&mut self.data, 1, &self.cmp);
                Some(res)
            }
        };
        debug_assert!(self.is_valid());
        root
    }

    /// Pushes an item onto the heap. It is placed after the last item and
    /// percolates up.
    pub fn push(&mut self, item: T) {
        debug_assert!(self.is_valid());
        self.data.push(item);
        let last = self.data.len();
        percolate_up(&mut self.data, last, &self.cmp);
        debug_assert!(self.is_valid());
    }

    /// Consumes the heap and returns its items as a vector in position order.
    pub fn into_vec(self) -> Vec<T> { self.data }

    /// Consumes the heap and returns its items as a vector in the order
    /// `pop` would have produced them.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_priority_queue::BinaryHeap;
    ///
    /// let heap = BinaryHeap::from(vec![5, 3, 8, 1, 4]);
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 3, 4, 5, 8]);
    /// ```
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut vec = self.data;
        for end in (2..vec.len() + 1).rev() {
            vec.swap(0, slot(end));
            percolate_down(&mut vec[..end - 1], 1, &self.cmp);
        }
        vec.reverse();
        vec
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Clears the heap, returning an iterator over the removed items in position order.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain(self.data.drain(..))
    }

    /// Checks the heap-order invariant: no item compares less than its parent.
    pub fn is_valid(&self) -> bool {
        (2..self.data.len() + 1).all(|pos| {
            !self.cmp.compares_lt(&self.data[slot(pos)], &self.data[slot(parent(pos))])
        })
    }
}

impl<T: Debug, C: Compare<T>> Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: Debug, C: Compare<T>> Display for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "heap: {:?} size: {}", self.data, self.data.len())
    }
}

impl<T, C: Compare<T> + Default> iter::FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> BinaryHeap<T, C> {
        BinaryHeap::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for elem in iter {
            self.push(elem);
        }
    }
}

/// An iterator over a `BinaryHeap` in position order.
///
/// Acquire through [`BinaryHeap::iter`](struct.BinaryHeap.html#method.iter).
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline] fn next(&mut self) -> Option<&'a T> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// A consuming iterator over a `BinaryHeap` in position order.
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator that drains a `BinaryHeap` in position order.
///
/// Acquire through [`BinaryHeap::drain`](struct.BinaryHeap.html#method.drain).
pub struct Drain<'a, T: 'a>(vec::Drain<'a, T>);

impl<'a, T: 'a> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T: 'a> ExactSizeIterator for Drain<'a, T> {}

impl<T, C: Compare<T>> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.data.into_iter()) }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}
