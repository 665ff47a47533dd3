//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena or recycle-store operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena has reached its chunk ceiling — no more slots can be served.
    Exhausted {
        /// Number of chunks currently allocated.
        chunks: usize,
        /// Total slot capacity across all chunks.
        capacity: usize,
    },
    /// A configuration value failed validation at construction time.
    InvalidConfig {
        /// Human-readable description of the rejected value.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { chunks, capacity } => {
                write!(
                    f,
                    "node arena exhausted: {capacity} slots across {chunks} chunks, growth ceiling reached"
                )
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid arena configuration: {reason}")
            }
        }
    }
}

impl Error for ArenaError {}
