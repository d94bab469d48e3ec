//! Collaborator traits: the engine's requests to the outside world.
//!
//! The engine never rolls dice or asks a human anything by itself. It
//! calls a `DiceSource` once per turn (when driven through
//! `TurnEngine::play_turn`) and a `PurchaseDecider` whenever a player lands
//! on an unowned property or company. Both calls are synchronous.

use crate::board::Space;
use crate::core::{DiceRoll, GameRng, GameRngState, Player};

/// Supplies the dice for a turn.
pub trait DiceSource {
    fn roll(&mut self) -> DiceRoll;
}

impl<F> DiceSource for F
where
    F: FnMut() -> DiceRoll,
{
    fn roll(&mut self) -> DiceRoll {
        self()
    }
}

/// Decides whether a player buys the unowned space they landed on.
///
/// Returning `true` is a wish to buy; the engine still checks the player
/// can afford it.
pub trait PurchaseDecider {
    fn decide(&mut self, player: &Player, space: &Space) -> bool;
}

impl<F> PurchaseDecider for F
where
    F: FnMut(&Player, &Space) -> bool,
{
    fn decide(&mut self, player: &Player, space: &Space) -> bool {
        self(player, space)
    }
}

/// Fair dice from a seeded `GameRng`.
#[derive(Clone, Debug)]
pub struct RandomDice {
    rng: GameRng,
}

impl RandomDice {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed).for_context("dice"))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Resume dice captured with `state`.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self::from_rng(GameRng::from_state(state))
    }

    /// Where the dice are in their stream. Feeding this to `from_state`
    /// yields the same rolls from here on.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self) -> DiceRoll {
        self.rng.roll_dice()
    }
}

/// Replays a fixed sequence of rolls, starting over when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: Vec<DiceRoll>,
    next: usize,
}

impl ScriptedDice {
    /// # Panics
    ///
    /// If `rolls` is empty.
    #[must_use]
    pub fn new(rolls: Vec<DiceRoll>) -> Self {
        assert!(!rolls.is_empty(), "ScriptedDice needs at least one roll");
        Self { rolls, next: 0 }
    }

    /// Convenience constructor from `(first, second)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        Self::new(pairs.iter().map(|&(a, b)| DiceRoll::new(a, b)).collect())
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> DiceRoll {
        let roll = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        roll
    }
}

/// Buys whenever offered. This is the behavior when no decider is given.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysBuy;

impl PurchaseDecider for AlwaysBuy {
    fn decide(&mut self, _player: &Player, _space: &Space) -> bool {
        true
    }
}

/// Declines every offer.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverBuy;

impl PurchaseDecider for NeverBuy {
    fn decide(&mut self, _player: &Player, _space: &Space) -> bool {
        false
    }
}
