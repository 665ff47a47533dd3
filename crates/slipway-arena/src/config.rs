//! Arena and recycle-store configuration parameters.

use crate::error::ArenaError;

/// Configuration for a [`NodeArena`](crate::NodeArena).
///
/// Controls chunk sizing and the growth ceiling. Validated at arena
/// construction; all values are immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of node slots per chunk.
    ///
    /// Default: 64. Must be at least 1. Larger chunks mean fewer growth
    /// allocations under sustained load at the cost of coarser-grained
    /// memory reservation.
    pub chunk_capacity: u32,

    /// Maximum number of chunks the arena may grow to.
    ///
    /// Default: 4096. Total slot capacity is
    /// `chunk_capacity * max_chunks`; allocation past that point fails
    /// with [`ArenaError::Exhausted`].
    pub max_chunks: u16,
}

impl ArenaConfig {
    /// Default number of node slots per chunk.
    pub const DEFAULT_CHUNK_CAPACITY: u32 = 64;

    /// Default growth ceiling in chunks.
    pub const DEFAULT_MAX_CHUNKS: u16 = 4096;

    /// Create a config for the given chunk capacity, using the default
    /// growth ceiling.
    ///
    /// The capacity is a sizing hint: the arena pre-allocates one chunk of
    /// this many node slots and grows chunk-by-chunk as needed.
    pub fn new(chunk_capacity: u32) -> Self {
        Self {
            chunk_capacity,
            max_chunks: Self::DEFAULT_MAX_CHUNKS,
        }
    }

    /// Total slot capacity if the arena grows to its ceiling.
    pub fn max_slots(&self) -> usize {
        self.chunk_capacity as usize * self.max_chunks as usize
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.chunk_capacity == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "chunk_capacity must be at least 1".into(),
            });
        }
        if self.max_chunks == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "max_chunks must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHUNK_CAPACITY)
    }
}

/// Configuration for a [`RecycleStore`](crate::RecycleStore).
///
/// The store is a plain growable stack; these parameters control its
/// initial reservation and geometric growth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecycleConfig {
    /// Number of handle slots reserved up front.
    ///
    /// Default: 15. Must be at least 1.
    pub initial_capacity: usize,

    /// Multiplier applied to the store's capacity when it fills.
    ///
    /// Default: 1.5. Must be greater than 1.0 so growth terminates in
    /// amortized O(1) pushes.
    pub growth_factor: f64,
}

impl RecycleConfig {
    /// Default up-front handle capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 15;

    /// Default geometric growth factor.
    pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.initial_capacity == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "initial_capacity must be at least 1".into(),
            });
        }
        if !(self.growth_factor > 1.0) || !self.growth_factor.is_finite() {
            return Err(ArenaError::InvalidConfig {
                reason: "growth_factor must be finite and greater than 1.0".into(),
            });
        }
        Ok(())
    }
}

impl Default for RecycleConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }
}
