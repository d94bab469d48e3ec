//! The board: a fixed ring of spaces.

use rustc_hash::FxHashMap;

use super::space::Space;
use crate::core::{ConfigError, SpaceDescriptor};

/// Fixed, non-empty, ordered sequence of spaces.
///
/// Indexing wraps: `get_space(i)` is `spaces[i mod len]` for every integer
/// `i`, negative ones included.
#[derive(Clone, Debug)]
pub struct Board {
    spaces: Vec<Space>,
    by_name: FxHashMap<String, usize>,
}

impl Board {
    /// Create a board. Fails if `spaces` is empty or names repeat.
    pub fn new(spaces: Vec<Space>) -> Result<Self, ConfigError> {
        if spaces.is_empty() {
            return Err(ConfigError::EmptyBoard);
        }

        let mut by_name = FxHashMap::default();
        for (slot, space) in spaces.iter().enumerate() {
            if by_name.insert(space.name().to_string(), slot).is_some() {
                return Err(ConfigError::DuplicateSpace {
                    name: space.name().to_string(),
                });
            }
        }

        Ok(Self { spaces, by_name })
    }

    /// Build a board from ordered descriptors.
    pub fn from_descriptors(descriptors: &[SpaceDescriptor]) -> Result<Self, ConfigError> {
        let spaces = descriptors
            .iter()
            .map(Space::from_descriptor)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(spaces)
    }

    /// Number of spaces; also the length of one lap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Always false: boards cannot be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Normalize any integer index to a slot in `0..len`.
    #[must_use]
    pub fn slot(&self, index: i64) -> usize {
        index.rem_euclid(self.spaces.len() as i64) as usize
    }

    /// Slot a player with cumulative `position` stands on.
    #[must_use]
    pub fn slot_of_position(&self, position: u64) -> usize {
        (position % self.spaces.len() as u64) as usize
    }

    /// Number of complete laps contained in `position`.
    #[must_use]
    pub fn lap_of_position(&self, position: u64) -> u64 {
        position / self.spaces.len() as u64
    }

    /// Space at any integer index, wrapping around the board.
    #[must_use]
    pub fn get_space(&self, index: i64) -> &Space {
        &self.spaces[self.slot(index)]
    }

    /// Space at a slot in `0..len`.
    ///
    /// # Panics
    ///
    /// If `slot >= len`.
    #[must_use]
    pub fn space(&self, slot: usize) -> &Space {
        &self.spaces[slot]
    }

    pub(crate) fn space_mut(&mut self, slot: usize) -> &mut Space {
        &mut self.spaces[slot]
    }

    /// Slot of the space called `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }
}
