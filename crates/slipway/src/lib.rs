//! Slipway: an arena-backed linked queue with node recycling.
//!
//! [`LinkedQueue`] is a FIFO/deque-like queue whose nodes are served from a
//! chunked arena ([`slipway_arena::NodeArena`]) instead of per-node heap
//! allocations. Removed nodes are recycled through a LIFO free list
//! ([`slipway_arena::RecycleStore`]) before fresh arena slots are used, so
//! steady-state churn allocates nothing. All of append/prepend/shift are
//! O(1); node memory is released in bulk when the queue is dropped.
//!
//! # Quick start
//!
//! ```rust
//! use slipway::LinkedQueue;
//!
//! let mut queue = LinkedQueue::new(64).unwrap();
//! queue.append(1).unwrap();
//! queue.append(2).unwrap();
//! queue.prepend(0).unwrap();
//!
//! assert_eq!(queue.shift().unwrap(), 0);
//! assert_eq!(queue.shift().unwrap(), 1);
//! assert_eq!(queue.shift().unwrap(), 2);
//! assert!(queue.shift().is_err()); // empty queues report, not crash
//! ```
//!
//! # Failure model
//!
//! Every mutating operation returns a `Result`: construction fails on an
//! invalid arena configuration, `append`/`prepend` fail when the arena has
//! reached its growth ceiling, and `shift` fails on an empty queue. No
//! operation partially applies — a failed call leaves the queue exactly as
//! it was.
//!
//! # Single-threaded by design
//!
//! The queue performs no synchronization. Share it across threads only
//! behind external locking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod opaque;
pub mod queue;

/// Chunked node arena and recycle store (`slipway-arena`).
///
/// Exposes the storage collaborators for callers who want to inspect or
/// tune them: [`arena::ArenaConfig`], [`arena::RecycleConfig`], and the
/// [`arena::ArenaError`] type surfaced by queue construction.
pub use slipway_arena as arena;

// Primary API surface.
pub use error::QueueError;
pub use opaque::{Opaque, OpaqueQueue};
pub use queue::LinkedQueue;

/// Common imports for typical slipway usage.
///
/// ```rust
/// use slipway::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::QueueError;
    pub use crate::opaque::{Opaque, OpaqueQueue};
    pub use crate::queue::LinkedQueue;
    pub use slipway_arena::{ArenaConfig, ArenaError, RecycleConfig};
}
