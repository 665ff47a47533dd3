//! Chunked node arena and recycle store backing slipway queues.
//!
//! Provides the two storage collaborators a slipway queue needs:
//!
//! - [`NodeArena`]: fixed-size node slots served from pre-allocated chunks.
//!   Allocation bumps a cursor within the current chunk and grows by
//!   appending whole chunks, up to a configured maximum. Individual slots
//!   are never freed — the whole arena is released at once.
//! - [`RecycleStore`]: a LIFO stack of [`NodeRef`] handles for slots whose
//!   nodes have been removed, consulted before fresh arena allocation.
//!
//! Node "references" are [`NodeRef`] handles (chunk index plus slot offset),
//! never raw pointers, so slot reuse cannot dangle.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chunk;
pub mod config;
pub mod error;
pub mod handle;
pub mod recycle;

// Public re-exports for the primary API surface.
pub use chunk::NodeArena;
pub use config::{ArenaConfig, RecycleConfig};
pub use error::ArenaError;
pub use handle::NodeRef;
pub use recycle::RecycleStore;
