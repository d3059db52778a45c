//! Game engine and round state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::quiz::Question;
use crate::result::{RoundOutcome, RoundResult};

mod actions;
mod deal;
mod dealer;
mod quiz;
pub mod state;

pub use state::GameState;

/// A single-player blackjack engine that manages the deck, both hands, the
/// chip counters, and the chip-reward quiz.
///
/// The engine owns all round state and is driven through `&mut self`
/// triggers; the presentation layer observes it through read-only
/// accessors. Use [`GameOptions`] to configure difficulty, rewards, and
/// quiz availability.
pub struct Game {
    /// Remaining cards for the current round.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: Hand,
    /// The player's chip balance.
    player_chips: i64,
    /// The dealer's chip balance.
    dealer_chips: i64,
    /// Current deck difficulty level.
    difficulty: u8,
    /// Quiz question awaiting an answer, if any.
    pending_question: Option<Question>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use chipjack::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Idle);
    /// assert_eq!(game.player_chips(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let difficulty = options.difficulty;
        let deck = Deck::new(difficulty, &mut rng);

        Self {
            deck,
            state: GameState::Idle,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            player_chips: options.starting_chips,
            dealer_chips: options.starting_chips,
            difficulty,
            pending_question: None,
            rng,
            options,
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.deal()
    }

    /// Settles the round: awards the chip reward to the winning side and
    /// moves to [`GameState::RoundOver`].
    fn settle(&mut self, outcome: RoundOutcome) -> RoundResult {
        let reward = if outcome == RoundOutcome::Push {
            0
        } else {
            self.options.chip_reward
        };

        if outcome.player_won() {
            self.player_chips += reward;
        } else if outcome.dealer_won() {
            self.dealer_chips += reward;
        }

        self.state = GameState::RoundOver;

        RoundResult {
            outcome,
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
            reward,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's cards, in deal order.
    #[must_use]
    pub fn player_cards(&self) -> &[Card] {
        self.player_hand.cards()
    }

    /// Returns the dealer's cards, in deal order.
    #[must_use]
    pub fn dealer_cards(&self) -> &[Card] {
        self.dealer_hand.cards()
    }

    /// Returns the player's current hand value.
    #[must_use]
    pub fn player_total(&self) -> u8 {
        self.player_hand.value()
    }

    /// Returns the dealer's current hand value.
    #[must_use]
    pub fn dealer_total(&self) -> u8 {
        self.dealer_hand.value()
    }

    /// Returns the player's chip balance.
    #[must_use]
    pub const fn player_chips(&self) -> i64 {
        self.player_chips
    }

    /// Returns the dealer's chip balance.
    #[must_use]
    pub const fn dealer_chips(&self) -> i64 {
        self.dealer_chips
    }

    /// Returns the current deck difficulty level.
    #[must_use]
    pub const fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
