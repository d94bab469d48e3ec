//! Dice rolls.

use serde::{Deserialize, Serialize};

/// Number of faces on each die.
pub const DIE_FACES: u8 = 6;

/// The two dice thrown at the start of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll([u8; 2]);

impl DiceRoll {
    /// Create a roll from two die faces.
    ///
    /// # Panics
    ///
    /// If either face is outside `1..=6`.
    #[must_use]
    pub fn new(first: u8, second: u8) -> Self {
        assert!(
            (1..=DIE_FACES).contains(&first) && (1..=DIE_FACES).contains(&second),
            "Die faces must be in 1..=6, got {first} and {second}"
        );
        Self([first, second])
    }

    /// The individual faces.
    #[must_use]
    pub const fn values(self) -> [u8; 2] {
        self.0
    }

    /// Total pips, i.e. the number of steps to move.
    #[must_use]
    pub const fn sum(self) -> u32 {
        self.0[0] as u32 + self.0[1] as u32
    }

    /// Whether both dice show the same face.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.0[0] == self.0[1]
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.0[0], self.0[1])
    }
}
