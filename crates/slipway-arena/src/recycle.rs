//! LIFO recycle store for removed node handles.
//!
//! When a queue removes a node it pushes the node's [`NodeRef`] here;
//! the next acquisition pops the most recently recycled handle before
//! asking the arena for a fresh slot. LIFO reuse keeps recently-touched
//! slots hot and avoids arena growth under steady churn.

use crate::config::RecycleConfig;
use crate::error::ArenaError;
use crate::handle::NodeRef;

/// A growable stack of recycled [`NodeRef`]s.
///
/// Capacity management is explicit: the store reserves
/// `initial_capacity` entries up front and multiplies its capacity by
/// `growth_factor` each time it fills, giving amortized O(1) pushes.
pub struct RecycleStore {
    entries: Vec<NodeRef>,
    capacity: usize,
    growth_factor: f64,
}

impl RecycleStore {
    /// Create an empty store with the configured initial reservation.
    ///
    /// Fails with [`ArenaError::InvalidConfig`] if the configuration does
    /// not validate.
    pub fn new(config: RecycleConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            entries: Vec::with_capacity(config.initial_capacity),
            capacity: config.initial_capacity,
            growth_factor: config.growth_factor,
        })
    }

    /// Push a recycled handle, growing geometrically if the store is full.
    pub fn push(&mut self, node: NodeRef) {
        if self.entries.len() == self.capacity {
            // growth_factor > 1.0 is enforced at construction; the +1 floor
            // covers factors that round down to the current capacity.
            let grown = (self.capacity as f64 * self.growth_factor).ceil() as usize;
            let new_capacity = grown.max(self.capacity + 1);
            self.entries.reserve_exact(new_capacity - self.entries.len());
            self.capacity = new_capacity;
        }
        self.entries.push(node);
    }

    /// Pop the most recently recycled handle, if any.
    pub fn pop(&mut self) -> Option<NodeRef> {
        self.entries.pop()
    }

    /// Number of handles currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no handles.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current handle capacity before the next growth step.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all held handles without releasing the backing reservation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RecycleStore {
        RecycleStore::new(RecycleConfig::default()).unwrap()
    }

    fn node(slot: u32) -> NodeRef {
        NodeRef::new(0, slot)
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut s = store();
        assert!(s.pop().is_none());
        assert!(s.is_empty());
    }

    #[test]
    fn pop_is_lifo() {
        let mut s = store();
        s.push(node(1));
        s.push(node(2));
        s.push(node(3));
        assert_eq!(s.pop(), Some(node(3)));
        assert_eq!(s.pop(), Some(node(2)));
        assert_eq!(s.pop(), Some(node(1)));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn push_past_initial_capacity_grows() {
        let mut s = RecycleStore::new(RecycleConfig {
            initial_capacity: 2,
            growth_factor: 1.5,
        })
        .unwrap();
        for slot in 0..10 {
            s.push(node(slot));
        }
        assert_eq!(s.len(), 10);
        assert!(s.capacity() >= 10);
    }

    #[test]
    fn growth_is_geometric_not_single_step() {
        let mut s = RecycleStore::new(RecycleConfig {
            initial_capacity: 4,
            growth_factor: 2.0,
        })
        .unwrap();
        for slot in 0..5 {
            s.push(node(slot));
        }
        assert_eq!(s.capacity(), 8);
    }

    #[test]
    fn tiny_store_with_small_factor_still_grows() {
        // ceil(1 * 1.1) == 2, but ceil(1 * 1.0000…) could stall without
        // the +1 floor; exercise a factor close to 1.
        let mut s = RecycleStore::new(RecycleConfig {
            initial_capacity: 1,
            growth_factor: 1.01,
        })
        .unwrap();
        for slot in 0..20 {
            s.push(node(slot));
        }
        assert_eq!(s.len(), 20);
    }

    #[test]
    fn invalid_config_rejected() {
        let result = RecycleStore::new(RecycleConfig {
            initial_capacity: 0,
            growth_factor: 1.5,
        });
        assert!(matches!(result, Err(ArenaError::InvalidConfig { .. })));
    }

    #[test]
    fn clear_empties_but_keeps_capacity() {
        let mut s = store();
        for slot in 0..20 {
            s.push(node(slot));
        }
        let cap = s.capacity();
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.capacity(), cap);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pop_order_reverses_push_order(
                slots in proptest::collection::vec(0u32..10_000, 0..64),
            ) {
                let mut s = store();
                for &slot in &slots {
                    s.push(node(slot));
                }
                let mut popped = Vec::new();
                while let Some(r) = s.pop() {
                    popped.push(r.slot());
                }
                let mut expected = slots.clone();
                expected.reverse();
                prop_assert_eq!(popped, expected);
            }

            #[test]
            fn len_tracks_pushes_minus_pops(
                ops in proptest::collection::vec(proptest::bool::ANY, 0..128),
            ) {
                let mut s = store();
                let mut model = 0usize;
                for (i, &is_push) in ops.iter().enumerate() {
                    if is_push {
                        s.push(node(i as u32));
                        model += 1;
                    } else if s.pop().is_some() {
                        model -= 1;
                    }
                    prop_assert_eq!(s.len(), model);
                }
            }
        }
    }
}
