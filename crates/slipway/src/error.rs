//! Queue error types.

use std::error::Error;
use std::fmt;

use slipway_arena::ArenaError;

/// Errors reported by [`LinkedQueue`](crate::LinkedQueue) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueueError {
    /// `shift` was called on an empty queue.
    Empty,
    /// A node could not be acquired: the recycle store had nothing to
    /// reuse and the arena refused to grow further.
    Exhausted {
        /// The underlying arena failure.
        reason: ArenaError,
    },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "shift on empty queue"),
            Self::Exhausted { reason } => {
                write!(f, "node acquisition failed: {reason}")
            }
        }
    }
}

impl Error for QueueError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Exhausted { reason } => Some(reason),
            Self::Empty => None,
        }
    }
}
