//! Ring grouping of the matrix keys
//!
//! The matrix is split into an outer ring of 12 keys and an inner ring of
//! 4 keys, each animated by its own oscillator. A [`RingLayout`] can only be
//! built from ring definitions that partition the matrix exactly, so every
//! key resolves to exactly one ring.

use crate::error::ConfigurationError;
use crate::key::{KEY_COUNT, Key};

/// Keys on the border of the matrix
pub const OUTER_RING: [u8; 12] = [0, 1, 2, 3, 4, 7, 8, 11, 12, 13, 14, 15];

/// Keys in the middle of the matrix
pub const INNER_RING: [u8; 4] = [5, 6, 9, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    Outer,
    Inner,
}

/// Unvalidated ring definition, as written in the configuration
#[derive(Debug, Clone, Copy)]
pub struct RingSets {
    pub outer: &'static [u8],
    pub inner: &'static [u8],
}

impl RingSets {
    pub const DEFAULT: RingSets = RingSets {
        outer: &OUTER_RING,
        inner: &INNER_RING,
    };
}

/// Set of keys stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct KeySet(u16);

impl KeySet {
    fn from_indices(indices: &[u8]) -> Result<Self, ConfigurationError> {
        let mut set = Self::default();
        for &index in indices {
            let key = Key::new(index).ok_or(ConfigurationError::KeyOutOfRange(index))?;
            set.0 |= 1 << key.index();
        }
        Ok(set)
    }

    const fn contains(self, key: Key) -> bool {
        self.0 & (1 << key.index()) != 0
    }
}

/// Validated partition of the matrix into rings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingLayout {
    rings: [Ring; KEY_COUNT],
}

impl RingLayout {
    /// Validate ring definitions
    ///
    /// Every key must belong to exactly one ring.
    pub fn new(sets: &RingSets) -> Result<Self, ConfigurationError> {
        let outer = KeySet::from_indices(sets.outer)?;
        let inner = KeySet::from_indices(sets.inner)?;

        let mut rings = [Ring::Outer; KEY_COUNT];
        for key in Key::all() {
            rings[key.position()] = match (outer.contains(key), inner.contains(key)) {
                (true, false) => Ring::Outer,
                (false, true) => Ring::Inner,
                (true, true) => return Err(ConfigurationError::Overlap(key)),
                (false, false) => return Err(ConfigurationError::Unassigned(key)),
            };
        }

        Ok(Self { rings })
    }

    /// Ring the key belongs to
    pub const fn ring_of(&self, key: Key) -> Ring {
        self.rings[key.position()]
    }

    /// Number of keys assigned to the ring
    pub fn count(&self, ring: Ring) -> usize {
        self.rings.iter().filter(|&&r| r == ring).count()
    }
}
