//! Effects of special spaces.

use std::fmt;
use std::rc::Rc;

use crate::core::{ConfigError, EffectDescriptor, Money, PlayerId};
use crate::events::GameEvent;
use crate::game::Game;

/// Callback run when a player lands on a special space.
pub type EffectFn = dyn Fn(PlayerId, &mut Game);

/// What a special space does to the player who lands on it.
///
/// The effect owns its consequences: an effect that can bankrupt a player
/// must eliminate them itself.
#[derive(Clone, Default)]
pub enum SpecialEffect {
    /// A resting square, such as the start.
    #[default]
    Nothing,
    /// Credit a fixed amount.
    Bonus(Money),
    /// Debit a fixed amount, eliminating the player if that leaves them
    /// with a negative balance.
    Penalty(Money),
    /// Move forward without resolving the square moved to and without
    /// a lap bonus.
    Advance(u32),
    /// Any other rule.
    Custom(Rc<EffectFn>),
}

impl SpecialEffect {
    /// Wrap a closure as an effect.
    pub fn custom(effect: impl Fn(PlayerId, &mut Game) + 'static) -> Self {
        SpecialEffect::Custom(Rc::new(effect))
    }

    /// Build an effect from its configuration.
    ///
    /// Amounts and steps must be strictly positive: a penalty is always a
    /// debit and a bonus always a credit.
    pub fn from_descriptor(
        space: &str,
        descriptor: Option<&EffectDescriptor>,
    ) -> Result<Self, ConfigError> {
        let Some(descriptor) = descriptor else {
            return Ok(SpecialEffect::Nothing);
        };
        let positive = |field: &'static str, value: Option<Money>| match value {
            None => Err(ConfigError::MissingField {
                space: space.to_string(),
                field,
            }),
            Some(value) if value <= 0 => Err(ConfigError::NonPositive {
                space: space.to_string(),
                field,
                value,
            }),
            Some(value) => Ok(value),
        };

        match descriptor.kind.as_str() {
            "none" => Ok(SpecialEffect::Nothing),
            "bonus" => Ok(SpecialEffect::Bonus(positive("amount", descriptor.amount)?)),
            "penalty" => Ok(SpecialEffect::Penalty(positive("amount", descriptor.amount)?)),
            "advance" => {
                let steps = positive("steps", descriptor.steps.map(Money::from))?;
                Ok(SpecialEffect::Advance(steps as u32))
            }
            other => Err(ConfigError::UnknownEffect {
                space: space.to_string(),
                effect: other.to_string(),
            }),
        }
    }

    /// Run the effect for `player`.
    pub fn apply(&self, player: PlayerId, game: &mut Game) {
        match self {
            SpecialEffect::Nothing => {}
            SpecialEffect::Bonus(amount) => {
                let name = game.player(player).name().to_string();
                game.log_event(GameEvent::BonusReceived { player: name, amount: *amount });
                game.player_mut(player).adjust_balance(*amount);
            }
            SpecialEffect::Penalty(amount) => {
                let name = game.player(player).name().to_string();
                game.log_event(GameEvent::PenaltyApplied { player: name, amount: *amount });
                game.player_mut(player).adjust_balance(-*amount);
                if game.player(player).balance() < 0 {
                    game.eliminate_player(player);
                }
            }
            SpecialEffect::Advance(steps) => {
                let name = game.player(player).name().to_string();
                game.log_event(GameEvent::Advanced { player: name, steps: *steps });
                game.player_mut(player).position += u64::from(*steps);
            }
            SpecialEffect::Custom(effect) => effect(player, game),
        }
    }
}

impl fmt::Debug for SpecialEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialEffect::Nothing => write!(f, "Nothing"),
            SpecialEffect::Bonus(amount) => f.debug_tuple("Bonus").field(amount).finish(),
            SpecialEffect::Penalty(amount) => f.debug_tuple("Penalty").field(amount).finish(),
            SpecialEffect::Advance(steps) => f.debug_tuple("Advance").field(steps).finish(),
            SpecialEffect::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_descriptor() {
        assert!(matches!(
            SpecialEffect::from_descriptor("Start", None).unwrap(),
            SpecialEffect::Nothing
        ));
        assert!(matches!(
            SpecialEffect::from_descriptor("Praça", Some(&EffectDescriptor::bonus(50))).unwrap(),
            SpecialEffect::Bonus(50)
        ));
        assert!(matches!(
            SpecialEffect::from_descriptor("Taxa", Some(&EffectDescriptor::penalty(50))).unwrap(),
            SpecialEffect::Penalty(50)
        ));
        assert!(matches!(
            SpecialEffect::from_descriptor("Atalho", Some(&EffectDescriptor::advance(1))).unwrap(),
            SpecialEffect::Advance(1)
        ));
    }

    #[test]
    fn test_from_descriptor_errors() {
        let unknown = EffectDescriptor {
            kind: "jail".into(),
            amount: None,
            steps: None,
        };
        assert!(matches!(
            SpecialEffect::from_descriptor("Prisão", Some(&unknown)),
            Err(ConfigError::UnknownEffect { .. })
        ));

        let no_amount = EffectDescriptor {
            kind: "bonus".into(),
            amount: None,
            steps: None,
        };
        assert!(matches!(
            SpecialEffect::from_descriptor("Praça", Some(&no_amount)),
            Err(ConfigError::MissingField { field: "amount", .. })
        ));
    }

    #[test]
    fn test_from_descriptor_rejects_non_positive() {
        assert!(matches!(
            SpecialEffect::from_descriptor("Taxa", Some(&EffectDescriptor::penalty(-600))),
            Err(ConfigError::NonPositive { field: "amount", value: -600, .. })
        ));
        assert!(matches!(
            SpecialEffect::from_descriptor("Praça", Some(&EffectDescriptor::bonus(0))),
            Err(ConfigError::NonPositive { field: "amount", value: 0, .. })
        ));
        assert!(matches!(
            SpecialEffect::from_descriptor("Atalho", Some(&EffectDescriptor::advance(0))),
            Err(ConfigError::NonPositive { field: "steps", value: 0, .. })
        ));
    }

    #[test]
    fn test_debug_hides_closure() {
        let effect = SpecialEffect::custom(|_, _| {});
        assert_eq!(format!("{:?}", effect), "Custom(..)");
        assert_eq!(format!("{:?}", SpecialEffect::Bonus(5)), "Bonus(5)");
    }
}
