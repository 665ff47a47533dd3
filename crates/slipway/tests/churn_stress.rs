//! Long-running churn scenarios exercising the queue, arena growth, and
//! recycle store together.

use std::collections::VecDeque;

use slipway::arena::{ArenaConfig, RecycleConfig};
use slipway::{LinkedQueue, QueueError};

/// Deterministic LCG so failures reproduce without a seed dependency.
fn lcg(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 33
}

#[test]
fn mixed_churn_matches_vecdeque_over_ten_thousand_ops() {
    let mut q = LinkedQueue::new(16).unwrap();
    let mut model: VecDeque<u64> = VecDeque::new();
    let mut state = 0x5eed;

    for i in 0..10_000u64 {
        match lcg(&mut state) % 4 {
            0 | 1 => {
                q.append(i).unwrap();
                model.push_back(i);
            }
            2 => {
                q.prepend(i).unwrap();
                model.push_front(i);
            }
            _ => match model.pop_front() {
                Some(expected) => assert_eq!(q.shift().unwrap(), expected),
                None => assert_eq!(q.shift(), Err(QueueError::Empty)),
            },
        }
        assert_eq!(q.len(), model.len());
    }

    while let Some(expected) = model.pop_front() {
        assert_eq!(q.shift().unwrap(), expected);
    }
    assert!(q.is_empty());
}

#[test]
fn steady_state_churn_stops_growing_the_arena() {
    let mut q = LinkedQueue::with_config(
        ArenaConfig {
            chunk_capacity: 8,
            max_chunks: 64,
        },
        RecycleConfig::default(),
    )
    .unwrap();

    // Ramp to a working depth of 20 nodes, then churn at that depth.
    for v in 0..20u32 {
        q.append(v).unwrap();
    }
    let chunks_after_ramp = q.chunk_count();

    for v in 20..5_020u32 {
        q.append(v).unwrap();
        q.shift().unwrap();
    }

    assert_eq!(
        q.chunk_count(),
        chunks_after_ramp,
        "churn at fixed depth must be served entirely from recycled nodes"
    );
}

#[test]
fn repeated_fill_and_drain_reuses_slots() {
    let mut q = LinkedQueue::new(8).unwrap();

    for round in 0..50u32 {
        for v in 0..30 {
            q.append(round * 100 + v).unwrap();
        }
        for v in 0..30 {
            assert_eq!(q.shift().unwrap(), round * 100 + v);
        }
        assert!(q.is_empty());
    }

    // Every drained round parks its 30 handles for the next fill.
    assert_eq!(q.recycled_count(), 30);
}

#[test]
fn exhausted_queue_recovers_through_shift_and_clear() {
    let mut q = LinkedQueue::with_config(
        ArenaConfig {
            chunk_capacity: 4,
            max_chunks: 2,
        },
        RecycleConfig::default(),
    )
    .unwrap();

    for v in 0..8u32 {
        q.append(v).unwrap();
    }
    assert!(matches!(q.append(8), Err(QueueError::Exhausted { .. })));

    // Shifting frees capacity through the recycle store.
    assert_eq!(q.shift().unwrap(), 0);
    q.append(8).unwrap();

    // Clearing resets the arena wholesale.
    q.clear();
    for v in 0..8u32 {
        q.append(v).unwrap();
    }
    assert_eq!(q.len(), 8);
}
