//! # trade-board
//!
//! A rules engine for turn-based property-trading board games.
//!
//! Players move around a fixed ring of spaces, buy properties and
//! companies, pay rent and fees to each other, trigger special spaces and
//! are eliminated when they cannot pay, until one player remains.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never rolls dice, prompts for
//!    input or draws anything. Dice and purchase decisions come from
//!    collaborators; everything that happens goes out as `GameEvent`s.
//!
//! 2. **Caller-Driven**: There is no internal game loop. The caller feeds
//!    one roll at a time to `TurnEngine::advance_turn`.
//!
//! 3. **Configuration Over Convention**: Boards are ordered lists of space
//!    descriptors, built in code or loaded from JSON.
//!
//! ## Modules
//!
//! - `core`: Players, dice, RNG, configuration, errors
//! - `board`: Spaces, fee strategies, special effects, the board
//! - `events`: Event records and sinks
//! - `rules`: Collaborator traits and game results
//! - `game`: Game state, builder and the turn engine
//! - `games`: The classic board and a self-playing match
//!
//! ## Example
//!
//! ```
//! use trade_board::board::{FeeStrategy, Space, SpecialEffect};
//! use trade_board::core::DiceRoll;
//! use trade_board::events::EventLog;
//! use trade_board::game::{GameBuilder, TurnEngine};
//!
//! let log = EventLog::new();
//! let game = GameBuilder::new()
//!     .players(["Ana", "Bruno"])
//!     .space(Space::special("Start", SpecialEffect::Nothing))
//!     .space(Space::property("Rua 1", 100, 10))
//!     .space(Space::company("Empresa 2", 150, 5, FeeStrategy::Variable))
//!     .sink(log.clone())
//!     .build()
//!     .unwrap();
//!
//! let mut engine = TurnEngine::new(game);
//! engine.advance_turn(DiceRoll::new(2, 2)).unwrap();
//! assert_eq!(log.lines()[2], "Ana rolled [2, 2] for a total of 4.");
//! ```

pub mod core;
pub mod board;
pub mod events;
pub mod rules;
pub mod game;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DiceRoll, GameConfig, GameRng, Money, Player, PlayerId, SpaceDescriptor,
    TurnError,
};

pub use crate::board::{Board, FeeStrategy, Space, SpecialEffect};

pub use crate::events::{EventLog, EventSink, GameEvent};

pub use crate::rules::{DiceSource, GameResult, PurchaseDecider};

pub use crate::game::{Game, GameBuilder, TurnEngine, TurnPhase};
