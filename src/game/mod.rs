//! The game and its turn engine.
//!
//! - `Game`: players, board, events, purchases, elimination and victory
//! - `GameBuilder`: validated setup, in code or from `GameConfig`
//! - `TurnEngine`: the dice-driven turn state machine

mod builder;
mod state;
mod turn;

pub use builder::GameBuilder;
pub use state::Game;
pub use turn::{TurnEngine, TurnPhase};
