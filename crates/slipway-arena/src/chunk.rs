//! Fixed-capacity chunks and the growable node arena.
//!
//! A [`Chunk`] is a pre-reserved `Vec<T>` that slots are bump-allocated
//! from. A [`NodeArena`] is a growable collection of chunks that overflows
//! into a fresh chunk when the current one fills, up to a configured
//! ceiling. Slots are never individually freed — [`NodeArena::clear`]
//! releases every slot at once.

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::NodeRef;

/// A single fixed-capacity chunk of node slots.
///
/// The backing `Vec` is reserved to full capacity at creation and never
/// reallocates, so slot offsets handed out by [`Chunk::alloc`] stay stable
/// for the chunk's lifetime.
struct Chunk<T> {
    slots: Vec<T>,
    capacity: u32,
}

impl<T> Chunk<T> {
    /// Create an empty chunk able to hold `capacity` slots.
    fn new(capacity: u32) -> Self {
        Self {
            slots: Vec::with_capacity(capacity as usize),
            capacity,
        }
    }

    /// Bump-allocate one slot holding `value`.
    ///
    /// Returns the slot offset, or gives the value back if the chunk is
    /// full.
    fn alloc(&mut self, value: T) -> Result<u32, T> {
        if self.slots.len() as u32 >= self.capacity {
            return Err(value);
        }
        let offset = self.slots.len() as u32;
        self.slots.push(value);
        Ok(offset)
    }

    fn is_full(&self) -> bool {
        self.slots.len() as u32 >= self.capacity
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    /// Memory reserved by the backing storage in bytes.
    fn memory_bytes(&self) -> usize {
        self.capacity as usize * std::mem::size_of::<T>()
    }
}

/// A growable arena of fixed-size node slots addressed by [`NodeRef`].
///
/// Allocation fills the newest chunk and appends another when it is full,
/// up to `max_chunks`. Resolution through [`NodeArena::get`] /
/// [`NodeArena::get_mut`] is O(1). The arena owns every slot for its whole
/// lifetime; removal is expressed by the caller recycling the handle, not
/// by freeing the slot.
pub struct NodeArena<T> {
    chunks: Vec<Chunk<T>>,
    config: ArenaConfig,
}

impl<T> NodeArena<T> {
    /// Create a new arena with one pre-allocated chunk.
    ///
    /// Fails with [`ArenaError::InvalidConfig`] if the configuration does
    /// not validate.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let mut chunks = Vec::with_capacity(config.max_chunks as usize);
        chunks.push(Chunk::new(config.chunk_capacity));
        Ok(Self { chunks, config })
    }

    /// Allocate a fresh slot holding `value`, growing by one chunk if the
    /// current chunk is full.
    ///
    /// Returns `Err(ArenaError::Exhausted)` once the chunk ceiling is
    /// reached; the arena is left untouched and `value` is dropped.
    pub fn alloc(&mut self, value: T) -> Result<NodeRef, ArenaError> {
        // The newest chunk is the only one with free slots: earlier chunks
        // were abandoned full, and slots are never returned.
        let current = self.chunks.len() - 1;
        let value = match self.chunks[current].alloc(value) {
            Ok(offset) => return Ok(NodeRef::new(current as u16, offset)),
            Err(value) => value,
        };

        if self.chunks.len() >= self.config.max_chunks as usize {
            return Err(ArenaError::Exhausted {
                chunks: self.chunks.len(),
                capacity: self.capacity(),
            });
        }

        let mut chunk = Chunk::new(self.config.chunk_capacity);
        let offset = match chunk.alloc(value) {
            Ok(offset) => offset,
            // chunk_capacity >= 1 is enforced by validate(), so a fresh
            // chunk always has room.
            Err(_) => unreachable!("fresh chunk always has a free slot"),
        };
        self.chunks.push(chunk);
        Ok(NodeRef::new((self.chunks.len() - 1) as u16, offset))
    }

    /// Resolve a handle to a shared slot reference.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this arena (or was
    /// invalidated by [`NodeArena::clear`]).
    pub fn get(&self, node: NodeRef) -> &T {
        &self.chunks[node.chunk as usize].slots[node.slot as usize]
    }

    /// Resolve a handle to a mutable slot reference.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not issued by this arena (or was
    /// invalidated by [`NodeArena::clear`]).
    pub fn get_mut(&mut self, node: NodeRef) -> &mut T {
        &mut self.chunks[node.chunk as usize].slots[node.slot as usize]
    }

    /// Release every slot at once, invalidating all outstanding handles.
    ///
    /// Chunk storage beyond the first chunk is released too, so a cleared
    /// arena is back in its freshly-created shape.
    pub fn clear(&mut self) {
        self.chunks.truncate(1);
        self.chunks[0].slots.clear();
    }

    /// Number of slots currently allocated.
    pub fn allocated(&self) -> usize {
        self.chunks.iter().map(Chunk::len).sum()
    }

    /// Number of chunks currently allocated.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total slot capacity across all current chunks.
    pub fn capacity(&self) -> usize {
        self.chunks.len() * self.config.chunk_capacity as usize
    }

    /// Memory reserved across all chunks in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.chunks.iter().map(Chunk::memory_bytes).sum()
    }

    /// The configuration this arena was created with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Whether the arena can serve at least one more allocation without
    /// hitting its ceiling.
    pub fn has_free_slot(&self) -> bool {
        !self.chunks[self.chunks.len() - 1].is_full()
            || self.chunks.len() < self.config.max_chunks as usize
    }
}
