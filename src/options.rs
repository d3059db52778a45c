//! Game configuration options.

use serde::{Deserialize, Serialize};

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use chipjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_difficulty(2)
///     .with_progressive_difficulty(true)
///     .with_quiz(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Starting chip balance for both the player and the dealer.
    pub starting_chips: i64,
    /// Chips awarded to the winning side at settlement.
    pub chip_reward: i64,
    /// Dealer draws until reaching this total.
    pub dealer_stands_at: u8,
    /// Initial deck difficulty level (0 = unmodified 52-card deck).
    pub difficulty: u8,
    /// Whether the difficulty level increases on every new round.
    pub progressive_difficulty: bool,
    /// Whether the arithmetic chip-reward quiz is offered.
    pub quiz: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_chips: 1000,
            chip_reward: 50,
            dealer_stands_at: 17,
            difficulty: 0,
            progressive_difficulty: false,
            quiz: true,
        }
    }
}

impl GameOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use chipjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_chips(500);
    /// assert_eq!(options.starting_chips, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: i64) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the chips awarded to the winner of a round.
    ///
    /// # Example
    ///
    /// ```
    /// use chipjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_chip_reward(100);
    /// assert_eq!(options.chip_reward, 100);
    /// ```
    #[must_use]
    pub const fn with_chip_reward(mut self, reward: i64) -> Self {
        self.chip_reward = reward;
        self
    }

    /// Sets the total the dealer stands at.
    ///
    /// # Example
    ///
    /// ```
    /// use chipjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(16);
    /// assert_eq!(options.dealer_stands_at, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, total: u8) -> Self {
        self.dealer_stands_at = total;
        self
    }

    /// Sets the initial deck difficulty level.
    ///
    /// # Example
    ///
    /// ```
    /// use chipjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_difficulty(3);
    /// assert_eq!(options.difficulty, 3);
    /// ```
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets whether difficulty increases on every new round.
    ///
    /// # Example
    ///
    /// ```
    /// use chipjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_progressive_difficulty(true);
    /// assert!(options.progressive_difficulty);
    /// ```
    #[must_use]
    pub const fn with_progressive_difficulty(mut self, progressive: bool) -> Self {
        self.progressive_difficulty = progressive;
        self
    }

    /// Sets whether the chip-reward quiz is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use chipjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_quiz(false);
    /// assert!(!options.quiz);
    /// ```
    #[must_use]
    pub const fn with_quiz(mut self, offered: bool) -> Self {
        self.quiz = offered;
        self
    }
}
