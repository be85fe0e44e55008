//! Error kinds reported by [`MinMaxPartitionQueue`](crate::queue::MinMaxPartitionQueue).
//!
//! Every variant here corresponds to a precondition violation, not a
//! recoverable runtime condition: the structure never ends up in a torn
//! state because of one of these, it simply refuses the operation. Looking
//! up an absent value with `remove` is not an error and is reported with
//! `bool`/`Option` instead.

use std::fmt;

/// Failure modes for [`MinMaxPartitionQueue`](crate::queue::MinMaxPartitionQueue) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `get(i)` was called with `i >= len()`.
    OutOfRange,
    /// `insert` was called on a full, fixed-size queue.
    CapacityExceeded,
    /// `resize` (directly or via `grow`) was attempted on a fixed-size queue.
    ResizeForbidden,
    /// `min`/`max` was called while the queue held no elements.
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::OutOfRange => "index out of range",
            Error::CapacityExceeded => "queue is full and fixed-size",
            Error::ResizeForbidden => "queue is fixed-size and cannot be resized",
            Error::Empty => "queue is empty",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}
