// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Ordering;
use std::fmt::{self, Debug};

use compare::Compare;

/// A comparator built from a strict "must precede" predicate.
///
/// `satisfies(a, b)` returns `true` when `a` belongs above `b` in the heap,
/// i.e. when a parent holding `a` may have a child holding `b`. The
/// predicate must be a strict, consistent relation over the values it
/// sees: `a < b` gives a min-heap and `a > b` a max-heap. Values for which
/// `satisfies` holds in neither or in both directions compare equal, so a
/// reflexive predicate such as `a <= b` orders the same way as `a < b`.
///
/// # Examples
///
/// ```
/// use indexed_priority_queue::{Precedes, PriorityQueue};
///
/// let mut pq = PriorityQueue::with_comparator(Precedes::new(|a: &i32, b: &i32| a > b));
/// for &p in &[4, 3, 5, 6, 2] {
///     pq.insert(p, ());
/// }
///
/// assert_eq!(pq.peek_root().map(|e| e.priority), Ok(6));
/// ```
#[derive(Clone, Copy, Default)]
pub struct Precedes<F>(F);

impl<F> Precedes<F> {
    /// Wraps the predicate `satisfies(parent, child)`.
    pub fn new(satisfies: F) -> Precedes<F> { Precedes(satisfies) }
}

impl<T: ?Sized, F> Compare<T> for Precedes<F> where F: Fn(&T, &T) -> bool {
    fn compare(&self, l: &T, r: &T) -> Ordering {
        match ((self.0)(l, r), (self.0)(r, l)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}

impl<F> Debug for Precedes<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Precedes(..)")
    }
}
