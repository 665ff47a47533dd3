//! The arena-backed linked queue.
//!
//! [`LinkedQueue`] chains nodes through [`NodeRef`] handles into a
//! [`NodeArena`] rather than through heap pointers. Removal never frees a
//! node's slot: the handle goes to a [`RecycleStore`] and is handed back
//! out on the next insertion, so a queue under steady churn stops touching
//! the allocator entirely. Dropping the queue releases every slot at once.

use slipway_arena::{ArenaConfig, ArenaError, NodeArena, NodeRef, RecycleConfig, RecycleStore};

use crate::error::QueueError;

/// One queue node: the element plus the link to the next node.
///
/// A live node always holds `Some(value)`; `shift` takes the value out, so
/// a recycled slot holds `None` and the element is dropped at removal, not
/// when the slot is eventually reused.
struct Node<T> {
    value: Option<T>,
    next: Option<NodeRef>,
}

/// A FIFO/deque-like queue with arena-backed node storage.
///
/// Supports O(1) [`append`](Self::append), [`prepend`](Self::prepend), and
/// [`shift`](Self::shift). Values appended are shifted out in FIFO order;
/// values prepended are shifted out in LIFO order; interleavings shift
/// whatever is currently at the front.
///
/// # Structure invariants
///
/// - `len == 0` exactly when both `head` and `tail` are `None`.
/// - `len == 1` exactly when `head` and `tail` name the same node.
/// - Following `next` from `head` visits `len` nodes and ends at `tail`.
/// - Every slot the arena has served is either live (reachable from
///   `head`) or recycled (held by the store), never both.
pub struct LinkedQueue<T> {
    head: Option<NodeRef>,
    tail: Option<NodeRef>,
    len: usize,
    arena: NodeArena<Node<T>>,
    recycle: Option<RecycleStore>,
}

impl<T> LinkedQueue<T> {
    /// Create a queue whose arena serves chunks of `chunk_capacity` nodes,
    /// with default recycling.
    ///
    /// Fails with [`ArenaError::InvalidConfig`] if `chunk_capacity` is 0.
    pub fn new(chunk_capacity: u32) -> Result<Self, ArenaError> {
        Self::with_config(ArenaConfig::new(chunk_capacity), RecycleConfig::default())
    }

    /// Create a queue with explicit arena and recycle-store configuration.
    ///
    /// An invalid arena configuration fails construction. An invalid
    /// recycle configuration does not: the queue comes up with reuse
    /// disabled and every acquisition falls through to the arena.
    pub fn with_config(arena: ArenaConfig, recycle: RecycleConfig) -> Result<Self, ArenaError> {
        Ok(Self {
            head: None,
            tail: None,
            len: 0,
            arena: NodeArena::new(arena)?,
            recycle: RecycleStore::new(recycle).ok(),
        })
    }

    /// Create a queue with node reuse disabled.
    ///
    /// Every acquisition allocates from the arena; shifted nodes are
    /// abandoned in place until the queue is cleared or dropped.
    pub fn without_recycling(arena: ArenaConfig) -> Result<Self, ArenaError> {
        Ok(Self {
            head: None,
            tail: None,
            len: 0,
            arena: NodeArena::new(arena)?,
            recycle: None,
        })
    }

    /// Produce a slot for a new node: recycled handle first, fresh arena
    /// slot second.
    fn acquire(&mut self, node: Node<T>) -> Result<NodeRef, QueueError> {
        if let Some(store) = &mut self.recycle {
            if let Some(reused) = store.pop() {
                *self.arena.get_mut(reused) = node;
                return Ok(reused);
            }
        }
        self.arena
            .alloc(node)
            .map_err(|reason| QueueError::Exhausted { reason })
    }

    /// Add `value` at the back of the queue.
    ///
    /// Fails with [`QueueError::Exhausted`] when no node can be acquired;
    /// the queue is left unchanged and the value is dropped with the error.
    pub fn append(&mut self, value: T) -> Result<(), QueueError> {
        let node = self.acquire(Node {
            value: Some(value),
            next: None,
        })?;
        match self.tail {
            Some(tail) => {
                self.arena.get_mut(tail).next = Some(node);
                self.tail = Some(node);
            }
            None => {
                self.head = Some(node);
                self.tail = Some(node);
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Add `value` at the front of the queue.
    ///
    /// Same failure behavior as [`append`](Self::append).
    pub fn prepend(&mut self, value: T) -> Result<(), QueueError> {
        let node = self.acquire(Node {
            value: Some(value),
            next: self.head,
        })?;
        if self.head.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the value at the front of the queue.
    ///
    /// Fails with [`QueueError::Empty`] on an empty queue. The detached
    /// node's handle goes to the recycle store (when one is present) for
    /// reuse by a later insertion.
    pub fn shift(&mut self) -> Result<T, QueueError> {
        let head = self.head.ok_or(QueueError::Empty)?;
        let node = self.arena.get_mut(head);
        // Live nodes always hold a value; see the Node invariant.
        let value = node.value.take().expect("live node holds a value");
        let next = node.next.take();

        if self.head == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            self.head = next;
        }
        self.len -= 1;

        if let Some(store) = &mut self.recycle {
            store.push(head);
        }
        Ok(value)
    }

    /// The value at the front of the queue, if any.
    pub fn front(&self) -> Option<&T> {
        let head = self.head?;
        self.arena.get(head).value.as_ref()
    }

    /// Mutable access to the value at the front of the queue, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        self.arena.get_mut(head).value.as_mut()
    }

    /// Number of values currently in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every value and release all node slots at once.
    ///
    /// Outstanding recycled handles are discarded with the slots they
    /// name; the queue is back in its freshly-constructed shape.
    pub fn clear(&mut self) {
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.arena.clear();
        if let Some(store) = &mut self.recycle {
            store.clear();
        }
    }

    /// Whether shifted nodes are recycled for reuse.
    pub fn recycling_enabled(&self) -> bool {
        self.recycle.is_some()
    }

    /// Number of node handles currently waiting for reuse.
    pub fn recycled_count(&self) -> usize {
        self.recycle.as_ref().map_or(0, RecycleStore::len)
    }

    /// Number of arena chunks backing this queue.
    pub fn chunk_count(&self) -> usize {
        self.arena.chunk_count()
    }

    /// Memory reserved for node storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.arena.memory_bytes()
    }
}
