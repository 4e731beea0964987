//! Key identity and edge events
//!
//! Keys are addressed by their position on the 4x4 matrix, row-major,
//! starting from the top-left corner.

use core::fmt;

/// Number of keys on the matrix
pub const KEY_COUNT: usize = 16;

/// A physical key on the matrix, index in `[0, 16)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(u8);

impl Key {
    /// Create a key from its index
    ///
    /// Returns `None` if the index is outside of the matrix.
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < KEY_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Index of the key on the matrix
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Index of the key as a slice position
    pub const fn position(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all keys in index order
    #[allow(clippy::cast_possible_truncation)]
    pub fn all() -> impl Iterator<Item = Key> {
        (0..KEY_COUNT as u8).map(Key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Transition reported by the key matrix
///
/// Rising is reported when the key goes down, Falling when it comes back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Rising,
    Falling,
}

impl Edge {
    /// Both edge kinds, in activation order
    pub const ALL: [Edge; 2] = [Edge::Rising, Edge::Falling];
}

/// A single edge event for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub edge: Edge,
}

impl KeyEvent {
    pub const fn new(key: Key, edge: Edge) -> Self {
        Self { key, edge }
    }

    /// Shortcut for a press event
    pub const fn rising(key: Key) -> Self {
        Self::new(key, Edge::Rising)
    }

    /// Shortcut for a release event
    pub const fn falling(key: Key) -> Self {
        Self::new(key, Edge::Falling)
    }
}
