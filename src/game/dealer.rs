use crate::card::Card;
use crate::error::ActionError;

use super::Game;

impl Game {
    /// Dealer plays their hand: draws until the hand value reaches the
    /// configured stand threshold. The shared ace rule applies; there is no
    /// separate soft-17 policy.
    ///
    /// Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while the dealer must draw.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        let mut drawn = Vec::new();

        while self.dealer_hand.value() < self.options.dealer_stands_at {
            let card = self.draw().ok_or(ActionError::NoCards)?;
            self.dealer_hand.add_card(card);
            drawn.push(card);
        }

        Ok(drawn)
    }
}
