//! Game setup.

use rustc_hash::FxHashSet;

use super::state::Game;
use crate::board::{Board, Space};
use crate::core::{
    ConfigError, GameConfig, Money, Player, PlayerMap, DEFAULT_STARTING_BALANCE,
    DEFAULT_STARTING_BONUS,
};
use crate::events::{EventSink, NullSink};
use crate::rules::{AlwaysBuy, PurchaseDecider};

/// Builder for creating a `Game`.
///
/// Defaults: 500 starting balance, 100 lap bonus, a decider that always
/// buys and a sink that discards events.
pub struct GameBuilder {
    players: Vec<String>,
    starting_balance: Money,
    starting_bonus: Money,
    spaces: Vec<Space>,
    decider: Box<dyn PurchaseDecider>,
    sink: Box<dyn EventSink>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            starting_balance: DEFAULT_STARTING_BALANCE,
            starting_bonus: DEFAULT_STARTING_BONUS,
            spaces: Vec::new(),
            decider: Box::new(AlwaysBuy),
            sink: Box::new(NullSink),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a configuration, converting its space descriptors.
    pub fn from_config(config: GameConfig) -> Result<Self, ConfigError> {
        let spaces = config
            .spaces
            .iter()
            .map(Space::from_descriptor)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            players: config.players,
            starting_balance: config.starting_balance,
            starting_bonus: config.starting_bonus,
            spaces,
            ..Self::default()
        })
    }

    /// Seat a player. Turn order is seating order.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn starting_balance(mut self, balance: Money) -> Self {
        self.starting_balance = balance;
        self
    }

    pub fn starting_bonus(mut self, bonus: Money) -> Self {
        self.starting_bonus = bonus;
        self
    }

    /// Append a space to the board.
    pub fn space(mut self, space: Space) -> Self {
        self.spaces.push(space);
        self
    }

    pub fn spaces(mut self, spaces: impl IntoIterator<Item = Space>) -> Self {
        self.spaces.extend(spaces);
        self
    }

    pub fn decider(mut self, decider: impl PurchaseDecider + 'static) -> Self {
        self.decider = Box::new(decider);
        self
    }

    pub fn sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Validate the setup and build the game.
    pub fn build(self) -> Result<Game, ConfigError> {
        let count = self.players.len();
        if count < 2 {
            return Err(ConfigError::NotEnoughPlayers { count });
        }
        if count > 255 {
            return Err(ConfigError::TooManyPlayers { count });
        }

        let mut seen = FxHashSet::default();
        for name in &self.players {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicatePlayer { name: name.clone() });
            }
        }

        let board = Board::new(self.spaces)?;
        let names = self.players;
        let balance = self.starting_balance;
        let players = PlayerMap::new(count, |id| Player::new(id, names[id.index()].clone(), balance));

        Ok(Game::new(board, players, self.starting_bonus, self.decider, self.sink))
    }
}
