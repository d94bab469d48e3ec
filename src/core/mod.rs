//! Core engine types: players, dice, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board, the rules and the
//! turn engine.

pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{
    EffectDescriptor, GameConfig, SpaceDescriptor, DEFAULT_STARTING_BALANCE,
    DEFAULT_STARTING_BONUS,
};
pub use dice::DiceRoll;
pub use error::{ConfigError, TurnError};
pub use player::{Money, Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
