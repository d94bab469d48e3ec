//! Self-playing classic match.

use tracing::info;

use super::board::classic_config;
use crate::core::{ConfigError, GameRng, GameRngState};
use crate::events::EventSink;
use crate::game::{GameBuilder, TurnEngine};
use crate::rules::{DiceSource, GameResult, PurchaseDecider, RandomDice};

/// A classic game driven by seeded dice.
///
/// The match plays turns until the game ends or a turn limit is hit; the
/// engine itself never loops.
pub struct ClassicMatch {
    engine: TurnEngine,
    dice: RandomDice,
}

impl ClassicMatch {
    /// Set up a classic game. Purchases are decided by `decider`.
    pub fn new<I, S>(
        players: I,
        seed: u64,
        decider: impl PurchaseDecider + 'static,
        sink: impl EventSink + 'static,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let game = GameBuilder::from_config(classic_config(players))?
            .decider(decider)
            .sink(sink)
            .build()?;

        Ok(Self {
            engine: TurnEngine::new(game),
            dice: RandomDice::from_rng(GameRng::new(seed).for_context("dice")),
        })
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Position of the match's dice, for replaying the rest of a match.
    #[must_use]
    pub fn dice_state(&self) -> GameRngState {
        self.dice.state()
    }

    /// Play up to `max_turns` turns.
    ///
    /// Returns the result if the game ended within the limit.
    pub fn run(&mut self, max_turns: u32) -> Option<GameResult> {
        for _ in 0..max_turns {
            let roll = self.dice.roll();
            if self.engine.advance_turn(roll).is_err() {
                break;
            }
            if self.engine.is_over() {
                break;
            }
        }

        let result = self.engine.result();
        info!(turns = self.engine.turn_number(), result = ?result, "classic match stopped");
        result
    }
}
