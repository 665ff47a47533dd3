//! Node handles.
//!
//! A [`NodeRef`] encodes the physical location of a node slot within the
//! arena as a chunk index plus a slot offset. Handles are plain indices —
//! copying one never aliases memory, and a stale handle can at worst reach
//! a recycled slot, never freed memory.

use std::fmt;

/// Physical location of a node slot within a [`NodeArena`](crate::NodeArena).
///
/// Handles are issued only by the arena's allocation path and resolve a
/// slot in O(1). Queue links and recycle-store entries are all `NodeRef`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct NodeRef {
    /// Which chunk the slot lives in.
    pub(crate) chunk: u16,
    /// Offset of the slot within that chunk.
    pub(crate) slot: u32,
}

impl NodeRef {
    /// Create a new handle. Only the arena issues handles.
    pub(crate) fn new(chunk: u16, slot: u32) -> Self {
        Self { chunk, slot }
    }

    /// Index of the chunk this handle points into.
    pub fn chunk(&self) -> u16 {
        self.chunk
    }

    /// Slot offset within the chunk.
    pub fn slot(&self) -> u32 {
        self.slot
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef(chunk={}, slot={})", self.chunk, self.slot)
    }
}
