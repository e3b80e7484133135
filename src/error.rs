// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error::Error;
use std::fmt;

/// Error type for priority queue operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The root was requested from a queue with no entries.
    EmptyQueue,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QueueError::EmptyQueue => write!(f, "priority queue is empty"),
        }
    }
}

impl Error for QueueError {}

#[cfg(test)]
mod test {
    use std::error::Error;

    use super::QueueError;

    #[test]
    fn test_display() {
        assert_eq!(QueueError::EmptyQueue.to_string(), "priority queue is empty");
    }

    #[test]
    fn test_boxed() {
        let err: Box<dyn Error> = Box::new(QueueError::EmptyQueue);
        assert!(err.source().is_none());
    }
}
