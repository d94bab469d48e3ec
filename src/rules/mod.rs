//! Collaborator contracts and game results.
//!
//! The rules engine consumes two collaborators, `DiceSource` and
//! `PurchaseDecider`, and reports a `GameResult` when play ends. Simple
//! implementations of both collaborators live here too.

pub mod collaborator;
pub mod result;

pub use collaborator::{AlwaysBuy, DiceSource, NeverBuy, PurchaseDecider, RandomDice, ScriptedDice};
pub use result::GameResult;
