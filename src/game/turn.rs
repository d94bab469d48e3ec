//! The turn state machine.
//!
//! ```text
//! AwaitingRoll(p) --advance_turn(dice)--> Resolving { p, dice }
//!     Resolving --game still on--> AwaitingRoll(next)
//!     Resolving --result reached--> GameOver(result)
//! ```
//!
//! The engine owns no loop. Its driver calls `advance_turn` with the dice
//! for the current player (or `play_turn` with a `DiceSource`) until the
//! phase is `GameOver`.

use tracing::instrument;

use super::state::Game;
use crate::core::{DiceRoll, PlayerId, TurnError};
use crate::events::GameEvent;
use crate::rules::{DiceSource, GameResult};

/// Where the engine is within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for the given player's dice.
    AwaitingRoll(PlayerId),
    /// Applying a roll. Set for the duration of `advance_turn`, which
    /// always leaves the engine in one of the other phases.
    Resolving { player: PlayerId, dice: DiceRoll },
    /// Terminal.
    GameOver(GameResult),
}

/// Drives a `Game` one turn at a time.
#[derive(Debug)]
pub struct TurnEngine {
    game: Game,
    phase: TurnPhase,
    turns_played: u32,
}

impl TurnEngine {
    /// Wrap a freshly built game and announce the first turn.
    pub fn new(mut game: Game) -> Self {
        let players = game.players().map(|p| p.name().to_string()).collect();
        game.log_event(GameEvent::GameStarted { players });

        let phase = match (game.result(), game.current_player()) {
            (Some(result), _) => TurnPhase::GameOver(result),
            (None, Some(player)) => {
                let name = game.player(player).name().to_string();
                game.log_event(GameEvent::TurnStarted { player: name });
                TurnPhase::AwaitingRoll(player)
            }
            (None, None) => TurnPhase::GameOver(GameResult::Draw),
        };

        Self {
            game,
            phase,
            turns_played: 0,
        }
    }

    /// Current phase, read against the game so that changes made through
    /// `game_mut` between turns are respected.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if let Some(result) = self.game.result() {
            return TurnPhase::GameOver(result);
        }
        match (self.phase, self.game.current_player()) {
            (TurnPhase::GameOver(result), _) => TurnPhase::GameOver(result),
            (_, Some(player)) => TurnPhase::AwaitingRoll(player),
            (_, None) => TurnPhase::GameOver(GameResult::Draw),
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Mutable access for setting up scenarios between turns. Eliminations
    /// made here decide who rolls next, or end the game.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    #[must_use]
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Turns resolved so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turns_played
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase(), TurnPhase::GameOver(_))
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase() {
            TurnPhase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    /// Play the current player's turn with `dice`.
    ///
    /// Moves the player, pays the lap bonus at most once however many laps
    /// the move covers, resolves the space landed on and passes the turn.
    /// Returns the new phase.
    #[instrument(level = "debug", skip(self), fields(turn = self.turns_played))]
    pub fn advance_turn(&mut self, dice: DiceRoll) -> Result<TurnPhase, TurnError> {
        let expected = self.phase;
        self.phase = self.phase();
        let TurnPhase::AwaitingRoll(player) = self.phase else {
            return Err(TurnError::GameOver);
        };
        if expected != self.phase {
            let name = self.game.player(player).name().to_string();
            self.game.log_event(GameEvent::TurnStarted { player: name });
        }
        self.phase = TurnPhase::Resolving { player, dice };

        let game = &mut self.game;
        let name = game.player(player).name().to_string();
        let steps = dice.sum();
        game.log_event(GameEvent::DiceRolled {
            player: name.clone(),
            dice,
            total: steps,
        });

        let before = game.player(player).position;
        let after = before + u64::from(steps);
        game.player_mut(player).position = after;

        if game.board().lap_of_position(after) > game.board().lap_of_position(before) {
            let bonus = game.starting_bonus();
            game.player_mut(player).adjust_balance(bonus);
            game.log_event(GameEvent::PassedStart {
                player: name,
                bonus,
            });
        }

        let slot = game.board().slot_of_position(after);
        game.resolve_landing(player, slot, dice);
        self.turns_played += 1;

        self.phase = match game.result() {
            Some(result) => TurnPhase::GameOver(result),
            None => {
                game.advance_pointer(player);
                match game.current_player() {
                    Some(next) => {
                        let next_name = game.player(next).name().to_string();
                        game.log_event(GameEvent::TurnStarted { player: next_name });
                        TurnPhase::AwaitingRoll(next)
                    }
                    None => TurnPhase::GameOver(GameResult::Draw),
                }
            }
        };

        Ok(self.phase)
    }

    /// Ask `dice` for a roll and play the turn with it.
    ///
    /// No roll is requested once the game is over.
    pub fn play_turn(&mut self, dice: &mut dyn DiceSource) -> Result<TurnPhase, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }
        let roll = dice.roll();
        self.advance_turn(roll)
    }
}
