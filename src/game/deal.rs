use crate::deck::Deck;
use crate::error::DealError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Starts a new round: rebuilds the deck and deals.
    ///
    /// If difficulty progression is enabled, the difficulty level increases
    /// by one before the deck is built, so every round plays against a
    /// slightly richer deck than the last.
    ///
    /// Returns `Some` settlement when the opening deal produced a natural
    /// 21, `None` when play continues in [`GameState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn start_round(&mut self) -> Result<Option<RoundResult>, DealError> {
        if self.state == GameState::PlayerTurn {
            return Err(DealError::InvalidState);
        }

        if self.options.progressive_difficulty {
            self.difficulty = self.difficulty.saturating_add(1);
        }
        self.deck = Deck::new(self.difficulty, &mut self.rng);

        self.deal()
    }

    /// Deals the opening hands from the current deck and checks for
    /// naturals.
    ///
    /// Two cards go to the player, then two to the dealer. The player's
    /// hand is checked for a natural 21 before the dealer's, so a
    /// simultaneous double natural settles as a player blackjack.
    ///
    /// Returns `Some` settlement when a natural ended the round
    /// immediately, `None` when play continues.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or fewer than
    /// four cards remain.
    pub fn deal(&mut self) -> Result<Option<RoundResult>, DealError> {
        if self.state == GameState::PlayerTurn {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        self.player_hand.clear();
        self.dealer_hand.clear();

        for _ in 0..2 {
            if let Some(card) = self.draw() {
                self.player_hand.add_card(card);
            }
        }
        for _ in 0..2 {
            if let Some(card) = self.draw() {
                self.dealer_hand.add_card(card);
            }
        }

        // Player is checked first: a double natural is a player win.
        if self.player_hand.is_natural() {
            return Ok(Some(self.settle(RoundOutcome::PlayerBlackjack)));
        }
        if self.dealer_hand.is_natural() {
            return Ok(Some(self.settle(RoundOutcome::DealerBlackjack)));
        }

        self.state = GameState::PlayerTurn;
        Ok(None)
    }
}
