//! Game configuration types.
//!
//! Games are configured at startup by providing:
//! - `SpaceDescriptor`: One board space (property, company or special)
//! - `EffectDescriptor`: The built-in effect of a special space
//! - `GameConfig`: Players, money rules and the ordered board
//!
//! Descriptors are plain data and load from JSON. They are validated when
//! the game is built, see `GameBuilder`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::Money;

/// Balance each player starts with unless configured otherwise.
pub const DEFAULT_STARTING_BALANCE: Money = 500;

/// Bonus credited for completing a lap unless configured otherwise.
pub const DEFAULT_STARTING_BONUS: Money = 100;

/// Tag-plus-fields description of one board space.
///
/// `kind` selects the variant:
/// - `"property"`: requires `price` and `rent`
/// - `"company"`: requires `price` and `base_fee`; `fee_strategy` is
///   `"fixed"` (default) or `"variable"`
/// - `"special"`: optional `effect`, no effect means nothing happens
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceDescriptor {
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<EffectDescriptor>,
}

impl SpaceDescriptor {
    fn bare(kind: &str, name: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            name: name.into(),
            price: None,
            rent: None,
            base_fee: None,
            fee_strategy: None,
            effect: None,
        }
    }

    /// Describe a property with a flat rent.
    pub fn property(name: impl Into<String>, price: Money, rent: Money) -> Self {
        Self {
            price: Some(price),
            rent: Some(rent),
            ..Self::bare("property", name)
        }
    }

    /// Describe a company with the given fee strategy tag.
    pub fn company(
        name: impl Into<String>,
        price: Money,
        base_fee: Money,
        fee_strategy: &str,
    ) -> Self {
        Self {
            price: Some(price),
            base_fee: Some(base_fee),
            fee_strategy: Some(fee_strategy.to_string()),
            ..Self::bare("company", name)
        }
    }

    /// Describe a special space. `None` makes it a plain resting square.
    pub fn special(name: impl Into<String>, effect: Option<EffectDescriptor>) -> Self {
        Self {
            effect,
            ..Self::bare("special", name)
        }
    }

    /// Fetch a required numeric field, checking it is strictly positive.
    pub(crate) fn require_positive(
        &self,
        field: &'static str,
        value: Option<Money>,
    ) -> Result<Money, ConfigError> {
        let value = value.ok_or_else(|| ConfigError::MissingField {
            space: self.name.clone(),
            field,
        })?;
        if value <= 0 {
            return Err(ConfigError::NonPositive {
                space: self.name.clone(),
                field,
                value,
            });
        }
        Ok(value)
    }
}

/// Built-in effect of a special space.
///
/// `kind` is one of `"none"`, `"bonus"` (needs `amount`), `"penalty"`
/// (needs `amount`) or `"advance"` (needs `steps`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDescriptor {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
}

impl EffectDescriptor {
    pub fn bonus(amount: Money) -> Self {
        Self {
            kind: "bonus".to_string(),
            amount: Some(amount),
            steps: None,
        }
    }

    pub fn penalty(amount: Money) -> Self {
        Self {
            kind: "penalty".to_string(),
            amount: Some(amount),
            steps: None,
        }
    }

    pub fn advance(steps: u32) -> Self {
        Self {
            kind: "advance".to_string(),
            amount: None,
            steps: Some(steps),
        }
    }
}

fn default_starting_balance() -> Money {
    DEFAULT_STARTING_BALANCE
}

fn default_starting_bonus() -> Money {
    DEFAULT_STARTING_BONUS
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in turn order.
    pub players: Vec<String>,

    #[serde(default = "default_starting_balance")]
    pub starting_balance: Money,

    /// Credited once per turn in which a player completes a lap.
    #[serde(default = "default_starting_bonus")]
    pub starting_bonus: Money,

    /// The board, start square first.
    pub spaces: Vec<SpaceDescriptor>,
}

impl GameConfig {
    /// Create a configuration with default money rules.
    pub fn new(players: Vec<String>, spaces: Vec<SpaceDescriptor>) -> Self {
        Self {
            players,
            starting_balance: DEFAULT_STARTING_BALANCE,
            starting_bonus: DEFAULT_STARTING_BONUS,
            spaces,
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_starting_balance(mut self, balance: Money) -> Self {
        self.starting_balance = balance;
        self
    }

    #[must_use]
    pub fn with_starting_bonus(mut self, bonus: Money) -> Self {
        self.starting_bonus = bonus;
        self
    }
}
