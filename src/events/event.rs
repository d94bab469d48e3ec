//! Game event records.
//!
//! Every state change and every landing produces a `GameEvent`. Events
//! carry player and space names rather than ids so a consumer can rebuild
//! the game's history from the stream alone; `Display` renders the text
//! a log view would show.

use serde::{Deserialize, Serialize};

use crate::core::{DiceRoll, Money};

/// Something that happened during a game, in emission order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The turn engine was created and play can begin.
    GameStarted { players: Vec<String> },

    /// A player is now expected to roll.
    TurnStarted { player: String },

    DiceRolled {
        player: String,
        dice: DiceRoll,
        total: u32,
    },

    /// The move completed at least one lap and the bonus was credited.
    PassedStart { player: String, bonus: Money },

    /// Landed on an unowned property; a purchase offer follows.
    LandedOnProperty {
        player: String,
        space: String,
        price: Money,
        rent: Money,
    },

    /// Landed on an unowned company; a purchase offer follows.
    LandedOnCompany {
        player: String,
        space: String,
        price: Money,
        base_fee: Money,
    },

    LandedOnSpecial { player: String, space: String },

    /// Landed on a space the player already owns.
    OwnSpace { player: String, space: String },

    RentDue {
        player: String,
        space: String,
        owner: String,
        amount: Money,
    },

    FeeDue {
        player: String,
        space: String,
        owner: String,
        amount: Money,
    },

    PaymentMade {
        payer: String,
        payee: String,
        amount: Money,
    },

    Purchased {
        player: String,
        space: String,
        price: Money,
    },

    /// Wanted to buy but could not afford it. Nothing changes.
    PurchaseFailed {
        player: String,
        space: String,
        price: Money,
    },

    PurchaseDeclined { player: String, space: String },

    BonusReceived { player: String, amount: Money },

    PenaltyApplied { player: String, amount: Money },

    Advanced { player: String, steps: u32 },

    PlayerEliminated { player: String },

    Winner { player: String },

    /// Every remaining player was eliminated at once.
    NoWinner,
}

impl GameEvent {
    /// The player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<&str> {
        use GameEvent::*;
        match self {
            GameStarted { .. } | NoWinner => None,
            PaymentMade { payer, .. } => Some(payer),
            TurnStarted { player }
            | DiceRolled { player, .. }
            | PassedStart { player, .. }
            | LandedOnProperty { player, .. }
            | LandedOnCompany { player, .. }
            | LandedOnSpecial { player, .. }
            | OwnSpace { player, .. }
            | RentDue { player, .. }
            | FeeDue { player, .. }
            | Purchased { player, .. }
            | PurchaseFailed { player, .. }
            | PurchaseDeclined { player, .. }
            | BonusReceived { player, .. }
            | PenaltyApplied { player, .. }
            | Advanced { player, .. }
            | PlayerEliminated { player }
            | Winner { player } => Some(player),
        }
    }

    /// Whether this event ends the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::Winner { .. } | GameEvent::NoWinner)
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use GameEvent::*;
        match self {
            GameStarted { players } => write!(f, "Game started with {}.", players.join(", ")),
            TurnStarted { player } => write!(f, "It is {player}'s turn."),
            DiceRolled { player, dice, total } => {
                write!(f, "{player} rolled {dice} for a total of {total}.")
            }
            PassedStart { player, bonus } => {
                write!(f, "{player} passed the start and received {bonus}.")
            }
            LandedOnProperty { player, space, price, rent } => write!(
                f,
                "{player} landed on {space} (property). Price: {price}, rent: {rent}."
            ),
            LandedOnCompany { player, space, price, base_fee } => write!(
                f,
                "{player} landed on {space} (company). Price: {price}, base fee: {base_fee}."
            ),
            LandedOnSpecial { player, space } => {
                write!(f, "{player} landed on {space} (special).")
            }
            OwnSpace { player, space } => write!(f, "{player} landed on their own {space}."),
            RentDue { player, space, owner, amount } => write!(
                f,
                "{player} landed on {space}, owned by {owner}, and owes {amount} in rent."
            ),
            FeeDue { player, space, owner, amount } => write!(
                f,
                "{player} landed on {space}, owned by {owner}, and owes a fee of {amount}."
            ),
            PaymentMade { payer, payee, amount } => {
                write!(f, "{payer} paid {amount} to {payee}.")
            }
            Purchased { player, space, price } => {
                write!(f, "{player} bought {space} for {price}.")
            }
            PurchaseFailed { player, space, price } => write!(
                f,
                "{player} cannot afford {space} for {price}."
            ),
            PurchaseDeclined { player, space } => {
                write!(f, "{player} chose not to buy {space}.")
            }
            BonusReceived { player, amount } => write!(f, "{player} receives a bonus of {amount}."),
            PenaltyApplied { player, amount } => write!(f, "{player} pays a penalty of {amount}."),
            Advanced { player, steps } => write!(f, "{player} moves ahead {steps} space(s)."),
            PlayerEliminated { player } => write!(f, "{player} was eliminated!"),
            Winner { player } => write!(f, "{player} is the winner!"),
            NoWinner => write!(f, "Every player was eliminated. There is no winner."),
        }
    }
}
