//! Benchmark profiles for the slipway queue.
//!
//! Provides pre-built queue constructors shared by the criterion benches:
//!
//! - [`reference_queue`]: default chunking, recycling on
//! - [`no_recycle_queue`]: same arena, recycling off (isolates reuse cost)
//! - [`tight_queue`]: small chunks to magnify growth-path costs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use slipway::LinkedQueue;
use slipway_arena::{ArenaConfig, RecycleConfig};

/// Chunk capacity used by the reference profile.
pub const REFERENCE_CHUNK_CAPACITY: u32 = 256;

/// Build the reference benchmark queue: 256-node chunks, recycling on.
pub fn reference_queue() -> LinkedQueue<u64> {
    LinkedQueue::new(REFERENCE_CHUNK_CAPACITY).expect("reference config is valid")
}

/// Build a queue with recycling disabled but the same arena shape.
pub fn no_recycle_queue() -> LinkedQueue<u64> {
    LinkedQueue::without_recycling(ArenaConfig::new(REFERENCE_CHUNK_CAPACITY))
        .expect("reference config is valid")
}

/// Build a queue with 8-node chunks so growth dominates.
pub fn tight_queue() -> LinkedQueue<u64> {
    LinkedQueue::with_config(ArenaConfig::new(8), RecycleConfig::default())
        .expect("tight config is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_queue_round_trips() {
        let mut q = reference_queue();
        q.append(1).unwrap();
        assert_eq!(q.shift().unwrap(), 1);
    }

    #[test]
    fn no_recycle_queue_has_reuse_disabled() {
        let q = no_recycle_queue();
        assert!(!q.recycling_enabled());
    }
}
