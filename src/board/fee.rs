//! Company usage fees.

use serde::{Deserialize, Serialize};

use super::space::Company;
use crate::core::{ConfigError, DiceRoll, Money};

/// Rule used to compute what a visitor owes a company's owner.
///
/// Chosen once when the company is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeStrategy {
    /// The base fee, whatever the dice show.
    #[default]
    Fixed,
    /// The base fee multiplied by the pips rolled this turn.
    Variable,
}

impl FeeStrategy {
    /// Compute the fee owed for landing on `company` with `dice`. Saturates
    /// at `Money::MAX`.
    #[must_use]
    pub fn calculate_fee(self, company: &Company, dice: DiceRoll) -> Money {
        match self {
            FeeStrategy::Fixed => company.base_fee(),
            FeeStrategy::Variable => company.base_fee().saturating_mul(Money::from(dice.sum())),
        }
    }

    /// Parse a configuration tag. A missing tag means `Fixed`.
    pub fn from_tag(space: &str, tag: Option<&str>) -> Result<Self, ConfigError> {
        match tag {
            None | Some("fixed") => Ok(FeeStrategy::Fixed),
            Some("variable") => Ok(FeeStrategy::Variable),
            Some(other) => Err(ConfigError::UnknownFeeStrategy {
                space: space.to_string(),
                strategy: other.to_string(),
            }),
        }
    }

    /// The configuration tag for this strategy.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            FeeStrategy::Fixed => "fixed",
            FeeStrategy::Variable => "variable",
        }
    }
}
