//! Board spaces and what happens when a player lands on them.
//!
//! A space is one of three closed variants:
//! - `Property`: buyable, charges a flat rent
//! - `Company`: buyable, charges a fee computed by its `FeeStrategy`
//! - `SpecialSpace`: not buyable, runs a `SpecialEffect`
//!
//! `Space::landed_on` dispatches to the variant. Every resolution emits at
//! least one event.

use super::effect::SpecialEffect;
use super::fee::FeeStrategy;
use crate::core::{ConfigError, DiceRoll, Money, PlayerId, SpaceDescriptor};
use crate::events::GameEvent;
use crate::game::Game;

/// A buyable space with a flat rent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    name: String,
    price: Money,
    rent: Money,
    owner: Option<PlayerId>,
}

impl Property {
    pub fn new(name: impl Into<String>, price: Money, rent: Money) -> Self {
        Self {
            name: name.into(),
            price,
            rent,
            owner: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn price(&self) -> Money {
        self.price
    }

    #[must_use]
    pub fn rent(&self) -> Money {
        self.rent
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    fn landed_on(&self, slot: usize, player: PlayerId, game: &mut Game) {
        let visitor = game.player(player).name().to_string();
        match self.owner {
            None => {
                game.log_event(GameEvent::LandedOnProperty {
                    player: visitor,
                    space: self.name.clone(),
                    price: self.price,
                    rent: self.rent,
                });
                game.offer_purchase(player, slot);
            }
            Some(owner) if owner != player => {
                game.log_event(GameEvent::RentDue {
                    player: visitor,
                    space: self.name.clone(),
                    owner: game.player(owner).name().to_string(),
                    amount: self.rent,
                });
                game.collect_payment(player, owner, self.rent);
            }
            Some(_) => game.log_event(GameEvent::OwnSpace {
                player: visitor,
                space: self.name.clone(),
            }),
        }
    }
}

/// A buyable space whose usage fee depends on its strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Company {
    name: String,
    price: Money,
    base_fee: Money,
    fee_strategy: FeeStrategy,
    owner: Option<PlayerId>,
}

impl Company {
    pub fn new(
        name: impl Into<String>,
        price: Money,
        base_fee: Money,
        fee_strategy: FeeStrategy,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            base_fee,
            fee_strategy,
            owner: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn price(&self) -> Money {
        self.price
    }

    #[must_use]
    pub fn base_fee(&self) -> Money {
        self.base_fee
    }

    #[must_use]
    pub fn fee_strategy(&self) -> FeeStrategy {
        self.fee_strategy
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// The fee a visitor owes for landing here with `dice`.
    #[must_use]
    pub fn fee(&self, dice: DiceRoll) -> Money {
        self.fee_strategy.calculate_fee(self, dice)
    }

    fn landed_on(&self, slot: usize, player: PlayerId, dice: DiceRoll, game: &mut Game) {
        let visitor = game.player(player).name().to_string();
        match self.owner {
            None => {
                game.log_event(GameEvent::LandedOnCompany {
                    player: visitor,
                    space: self.name.clone(),
                    price: self.price,
                    base_fee: self.base_fee,
                });
                game.offer_purchase(player, slot);
            }
            Some(owner) if owner != player => {
                let fee = self.fee(dice);
                game.log_event(GameEvent::FeeDue {
                    player: visitor,
                    space: self.name.clone(),
                    owner: game.player(owner).name().to_string(),
                    amount: fee,
                });
                game.collect_payment(player, owner, fee);
            }
            Some(_) => game.log_event(GameEvent::OwnSpace {
                player: visitor,
                space: self.name.clone(),
            }),
        }
    }
}

/// A space with an effect instead of an owner.
#[derive(Clone, Debug)]
pub struct SpecialSpace {
    name: String,
    effect: SpecialEffect,
}

impl SpecialSpace {
    pub fn new(name: impl Into<String>, effect: SpecialEffect) -> Self {
        Self {
            name: name.into(),
            effect,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn effect(&self) -> &SpecialEffect {
        &self.effect
    }

    fn landed_on(&self, player: PlayerId, game: &mut Game) {
        game.log_event(GameEvent::LandedOnSpecial {
            player: game.player(player).name().to_string(),
            space: self.name.clone(),
        });
        self.effect.apply(player, game);
    }
}

/// One position on the board.
#[derive(Clone, Debug)]
pub enum Space {
    Property(Property),
    Company(Company),
    Special(SpecialSpace),
}

impl Space {
    /// Shorthand for an unowned property.
    pub fn property(name: impl Into<String>, price: Money, rent: Money) -> Self {
        Space::Property(Property::new(name, price, rent))
    }

    /// Shorthand for an unowned company.
    pub fn company(
        name: impl Into<String>,
        price: Money,
        base_fee: Money,
        fee_strategy: FeeStrategy,
    ) -> Self {
        Space::Company(Company::new(name, price, base_fee, fee_strategy))
    }

    /// Shorthand for a special space.
    pub fn special(name: impl Into<String>, effect: SpecialEffect) -> Self {
        Space::Special(SpecialSpace::new(name, effect))
    }

    /// Build a space from its configuration.
    ///
    /// Fails on an unknown `kind`, a missing or non-positive price, rent or
    /// fee, or an unknown fee strategy or effect.
    pub fn from_descriptor(descriptor: &SpaceDescriptor) -> Result<Self, ConfigError> {
        let name = descriptor.name.as_str();
        match descriptor.kind.as_str() {
            "property" => Ok(Space::property(
                name,
                descriptor.require_positive("price", descriptor.price)?,
                descriptor.require_positive("rent", descriptor.rent)?,
            )),
            "company" => Ok(Space::company(
                name,
                descriptor.require_positive("price", descriptor.price)?,
                descriptor.require_positive("base_fee", descriptor.base_fee)?,
                FeeStrategy::from_tag(name, descriptor.fee_strategy.as_deref())?,
            )),
            "special" => Ok(Space::special(
                name,
                SpecialEffect::from_descriptor(name, descriptor.effect.as_ref())?,
            )),
            other => Err(ConfigError::UnknownSpaceKind {
                space: name.to_string(),
                kind: other.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Space::Property(p) => p.name(),
            Space::Company(c) => c.name(),
            Space::Special(s) => s.name(),
        }
    }

    /// Purchase price, or `None` for spaces that cannot be bought.
    #[must_use]
    pub fn price(&self) -> Option<Money> {
        match self {
            Space::Property(p) => Some(p.price),
            Space::Company(c) => Some(c.price),
            Space::Special(_) => None,
        }
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Space::Property(p) => p.owner,
            Space::Company(c) => c.owner,
            Space::Special(_) => None,
        }
    }

    /// Record a purchase. Ownership changes through nothing else.
    pub(crate) fn set_owner(&mut self, owner: PlayerId) {
        match self {
            Space::Property(p) => p.owner = Some(owner),
            Space::Company(c) => c.owner = Some(owner),
            Space::Special(_) => {}
        }
    }

    /// Resolve `player` landing on this space, which sits at board `slot`.
    pub fn landed_on(&self, slot: usize, player: PlayerId, dice: DiceRoll, game: &mut Game) {
        match self {
            Space::Property(p) => p.landed_on(slot, player, game),
            Space::Company(c) => c.landed_on(slot, player, dice, game),
            Space::Special(s) => s.landed_on(player, game),
        }
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Space::Property(p) => write!(f, "{} (property, price {}, rent {})", p.name, p.price, p.rent),
            Space::Company(c) => write!(
                f,
                "{} (company, price {}, {} fee {})",
                c.name,
                c.price,
                c.fee_strategy.tag(),
                c.base_fee
            ),
            Space::Special(s) => write!(f, "{} (special)", s.name),
        }
    }
}
