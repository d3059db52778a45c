use crate::error::ActionError;
use crate::result::{HitOutcome, RoundOutcome, StandResult};

use super::{Game, GameState};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// If the drawn card busts the hand, the round settles immediately with
    /// the chip reward going to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is
    /// empty.
    pub fn hit(&mut self) -> Result<HitOutcome, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.draw().ok_or(ActionError::NoCards)?;
        self.player_hand.add_card(card);

        if self.player_hand.is_bust() {
            let result = self.settle(RoundOutcome::PlayerBust);
            return Ok(HitOutcome::Busted { card, result });
        }

        Ok(HitOutcome::Drew(card))
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// The dealer then draws to the stand threshold and the round settles:
    /// a dealer bust or a higher player total wins for the player, a
    /// higher dealer total wins for the dealer, and equal totals push with
    /// no chip change.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs
    /// out while the dealer must draw.
    pub fn stand(&mut self) -> Result<StandResult, ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let drawn = self.dealer_play()?;

        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();

        let outcome = if self.dealer_hand.is_bust() || player_value > dealer_value {
            RoundOutcome::PlayerWin
        } else if player_value < dealer_value {
            RoundOutcome::DealerWin
        } else {
            RoundOutcome::Push
        };

        let result = self.settle(outcome);
        Ok(StandResult { drawn, result })
    }
}
