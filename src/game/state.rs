//! Game state: roster, board, turn order and the economy rules.
//!
//! `Game` owns the board and every player. Spaces refer to owners by
//! `PlayerId`; eliminated players stay in the roster so those references
//! remain meaningful for display.
//!
//! ## Elimination
//!
//! `eliminate_player` removes a player from the active list. Removing a
//! player before the turn pointer shifts the pointer down, so it keeps
//! pointing at the same next-in-order player. When the current player is
//! the one removed, the pointer now names their successor. One survivor
//! wins; zero survivors (when chained effects take out the last two
//! players in one resolution) is a draw.

use tracing::{debug, info};

use crate::board::Board;
use crate::core::{DiceRoll, Money, Player, PlayerId, PlayerMap};
use crate::events::{EventSink, GameEvent};
use crate::rules::{GameResult, PurchaseDecider};

/// A game in progress (or finished).
pub struct Game {
    board: Board,
    players: PlayerMap<Player>,
    /// Players still in the game, in turn order.
    active: Vec<PlayerId>,
    /// Index into `active` of the player whose turn it is.
    turn_pointer: usize,
    starting_bonus: Money,
    result: Option<GameResult>,
    decider: Box<dyn PurchaseDecider>,
    sink: Box<dyn EventSink>,
}

impl Game {
    pub(crate) fn new(
        board: Board,
        players: PlayerMap<Player>,
        starting_bonus: Money,
        decider: Box<dyn PurchaseDecider>,
        sink: Box<dyn EventSink>,
    ) -> Self {
        let active = players.player_ids().collect();
        Self {
            board,
            players,
            active,
            turn_pointer: 0,
            starting_bonus,
            result: None,
            decider,
            sink,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Every player ever seated, eliminated ones included.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().map(|(_, p)| p)
    }

    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<PlayerId> {
        self.players.iter().find(|(_, p)| p.name() == name).map(|(id, _)| id)
    }

    /// Players still in the game, in turn order.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    #[must_use]
    pub fn is_in_game(&self, id: PlayerId) -> bool {
        self.active.contains(&id)
    }

    /// The player whose turn it is, or `None` once nobody is left.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.active.get(self.turn_pointer).copied()
    }

    #[must_use]
    pub fn turn_pointer(&self) -> usize {
        self.turn_pointer
    }

    #[must_use]
    pub fn starting_bonus(&self) -> Money {
        self.starting_bonus
    }

    /// True until the game has a result.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.result.is_none()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    // === Events ===

    /// Emit an event to the sink, in order.
    pub fn log_event(&mut self, event: GameEvent) {
        debug!(event = %event, "game event");
        self.sink.notify(&event);
    }

    // === Economy ===

    /// Offer the unowned space at `slot` to `player`.
    ///
    /// Buying needs both a yes from the decider and enough money. Not
    /// affording a wanted space is logged but changes nothing.
    pub fn offer_purchase(&mut self, player: PlayerId, slot: usize) {
        let space = self.board.space(slot);
        let Some(price) = space.price() else {
            return;
        };
        if space.owner().is_some() {
            return;
        }

        let wants = self.decider.decide(&self.players[player], space);
        let buyer = self.players[player].name().to_string();
        let space_name = space.name().to_string();

        if !wants {
            self.log_event(GameEvent::PurchaseDeclined {
                player: buyer,
                space: space_name,
            });
        } else if self.players[player].balance() >= price {
            let buyer_state = &mut self.players[player];
            buyer_state.adjust_balance(-price);
            buyer_state.add_holding(slot);
            self.board.space_mut(slot).set_owner(player);
            self.log_event(GameEvent::Purchased {
                player: buyer,
                space: space_name,
                price,
            });
        } else {
            self.log_event(GameEvent::PurchaseFailed {
                player: buyer,
                space: space_name,
                price,
            });
        }
    }

    /// All-or-nothing transfer between two players.
    ///
    /// Returns `false`, changing nothing, when the payer is short.
    pub fn transfer(&mut self, payer: PlayerId, payee: PlayerId, amount: Money) -> bool {
        match self.players.get_pair_mut(payer, payee) {
            Some((from, to)) => from.pay(amount, to),
            None => true,
        }
    }

    /// Charge a rent or fee. A payer who cannot cover it in full is
    /// eliminated and pays nothing.
    ///
    /// Returns whether the payment went through.
    pub fn collect_payment(&mut self, payer: PlayerId, payee: PlayerId, amount: Money) -> bool {
        if self.transfer(payer, payee, amount) {
            self.log_event(GameEvent::PaymentMade {
                payer: self.players[payer].name().to_string(),
                payee: self.players[payee].name().to_string(),
                amount,
            });
            true
        } else {
            self.eliminate_player(payer);
            false
        }
    }

    // === Elimination ===

    /// Remove `id` from the active players and check for the end of game.
    ///
    /// Eliminating a player who is already out does nothing. Effects that
    /// chain eliminations can remove the declared winner too, in which case
    /// the result becomes a draw.
    pub fn eliminate_player(&mut self, id: PlayerId) {
        let Some(index) = self.active.iter().position(|&p| p == id) else {
            return;
        };

        let name = self.players[id].name().to_string();
        self.log_event(GameEvent::PlayerEliminated {
            player: name.clone(),
        });

        self.active.remove(index);
        if index < self.turn_pointer {
            self.turn_pointer -= 1;
        }
        if self.active.is_empty() {
            self.turn_pointer = 0;
        } else {
            self.turn_pointer %= self.active.len();
        }
        info!(player = %name, remaining = self.active.len(), "player eliminated");

        match self.active.len() {
            1 => {
                let winner = self.active[0];
                self.log_event(GameEvent::Winner {
                    player: self.players[winner].name().to_string(),
                });
                self.finish(GameResult::Winner(winner));
            }
            0 => {
                self.log_event(GameEvent::NoWinner);
                self.finish(GameResult::Draw);
            }
            _ => {}
        }
    }

    fn finish(&mut self, result: GameResult) {
        info!(result = ?result, "game over");
        self.result = Some(result);
    }

    // === Turn support ===

    /// Resolve `player` landing on the space at `slot`.
    pub(crate) fn resolve_landing(&mut self, player: PlayerId, slot: usize, dice: DiceRoll) {
        let space = self.board.space(slot).clone();
        space.landed_on(slot, player, dice, self);
    }

    /// Move the turn pointer past `mover`, who just finished a turn.
    ///
    /// If `mover` was eliminated during the turn, elimination has already
    /// left the pointer on their successor.
    pub(crate) fn advance_pointer(&mut self, mover: PlayerId) {
        if self.active.is_empty() {
            return;
        }
        self.turn_pointer = match self.active.iter().position(|&p| p == mover) {
            Some(index) => (index + 1) % self.active.len(),
            None => self.turn_pointer % self.active.len(),
        };
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("active", &self.active)
            .field("turn_pointer", &self.turn_pointer)
            .field("starting_bonus", &self.starting_bonus)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}
