//! Type-erased queue payloads.
//!
//! [`LinkedQueue`](crate::LinkedQueue) is monomorphized per element type,
//! so most callers name their own `T`. For contexts that route values of
//! unknown type through a single queue (handle tables, schedulers holding
//! tokens into foreign storage), [`Opaque`] is a pointer-width payload that
//! carries no type information, and [`OpaqueQueue`] is the matching
//! instantiation.

use std::fmt;

use crate::queue::LinkedQueue;

/// A pointer-width opaque payload.
///
/// Stores whatever the caller can encode in a `usize` — an index, a packed
/// handle, an address obtained elsewhere. The queue never interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Opaque(pub usize);

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<usize> for Opaque {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

impl From<Opaque> for usize {
    fn from(v: Opaque) -> Self {
        v.0
    }
}

/// The type-erased fallback instantiation of [`LinkedQueue`].
pub type OpaqueQueue = LinkedQueue<Opaque>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_round_trips_through_queue() {
        let mut queue = OpaqueQueue::new(8).unwrap();
        queue.append(Opaque(0xdead)).unwrap();
        queue.append(Opaque::from(0xbeef)).unwrap();
        assert_eq!(usize::from(queue.shift().unwrap()), 0xdead);
        assert_eq!(queue.shift().unwrap(), Opaque(0xbeef));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Opaque(255).to_string(), "0xff");
    }
}
