//! Error types.
//!
//! Only two things can go wrong: a game can be set up from bad
//! configuration, and a caller can ask for a turn after the game ended.
//! Running out of money is a game rule, not an error.

use thiserror::Error;

use super::player::Money;

/// Invalid game setup. Raised while building a game, never mid-game.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The space descriptor's `kind` tag is not a known space type.
    #[error("Unknown space kind `{kind}` for space `{space}`")]
    UnknownSpaceKind { space: String, kind: String },

    /// A company names a fee strategy other than `fixed` or `variable`.
    #[error("Unknown fee strategy `{strategy}` for company `{space}`")]
    UnknownFeeStrategy { space: String, strategy: String },

    /// A special space names an effect the engine does not provide.
    #[error("Unknown effect `{effect}` for space `{space}`")]
    UnknownEffect { space: String, effect: String },

    /// A descriptor lacks a field its kind requires.
    #[error("Space `{space}` is missing required field `{field}`")]
    MissingField { space: String, field: &'static str },

    /// Prices, rents and fees must be strictly positive.
    #[error("Space `{space}` has non-positive {field}: {value}")]
    NonPositive {
        space: String,
        field: &'static str,
        value: Money,
    },

    /// Space names identify spaces and must be unique.
    #[error("Duplicate space name `{name}`")]
    DuplicateSpace { name: String },

    /// Player names identify players and must be unique.
    #[error("Duplicate player name `{name}`")]
    DuplicatePlayer { name: String },

    #[error("Board must contain at least one space")]
    EmptyBoard,

    #[error("At least 2 players are required, got {count}")]
    NotEnoughPlayers { count: usize },

    #[error("At most 255 players are supported, got {count}")]
    TooManyPlayers { count: usize },

    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Misuse of the turn engine by its driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    /// A turn was requested after the game reached its result.
    #[error("The game is over")]
    GameOver,
}
