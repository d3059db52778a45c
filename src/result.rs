//! Round settlement and action result types.

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The player was dealt a natural 21.
    PlayerBlackjack,
    /// The dealer was dealt a natural 21 (and the player was not).
    DealerBlackjack,
    /// The player won at showdown (dealer bust or lower total).
    PlayerWin,
    /// The dealer won at showdown.
    DealerWin,
    /// The player drew over 21.
    PlayerBust,
    /// Equal totals at showdown; no chips change hands.
    Push,
}

impl RoundOutcome {
    /// Returns whether the player side won the round.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::PlayerBlackjack | Self::PlayerWin)
    }

    /// Returns whether the dealer side won the round.
    #[must_use]
    pub const fn dealer_won(self) -> bool {
        matches!(self, Self::DealerBlackjack | Self::DealerWin | Self::PlayerBust)
    }
}

/// Settlement of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// How the round was decided.
    pub outcome: RoundOutcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Chips awarded to the winning side (0 on a push).
    pub reward: i64,
}

/// Result of a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HitOutcome {
    /// The player drew a card and may act again.
    Drew(Card),
    /// The drawn card busted the player; the round is settled.
    Busted {
        /// The card that busted the hand.
        card: Card,
        /// The bust settlement.
        result: RoundResult,
    },
}

/// Result of standing: the dealer's play and the settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandResult {
    /// Cards the dealer drew while below the stand threshold.
    pub drawn: Vec<Card>,
    /// The showdown settlement.
    pub result: RoundResult,
}
