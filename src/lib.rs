//! A single-player blackjack engine with chip wagering and an arithmetic
//! chip-reward quiz.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! dealing, the player's turn, the dealer's fixed-threshold play, chip
//! settlement, and the optional quiz. The presentation layer drives it
//! through [`Game::start_round`], [`Game::hit`], [`Game::stand`], and the
//! quiz triggers, and observes cards, totals, and chip balances through
//! read-only accessors.
//!
//! # Example
//!
//! ```
//! use chipjack::{Game, GameOptions, GameState};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(options, 42);
//!
//! if game.start_round().unwrap().is_none() {
//!     assert_eq!(game.state(), GameState::PlayerTurn);
//!     let _settled = game.stand().unwrap();
//! }
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod quiz;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, QuizError};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use quiz::{ANSWER_TOLERANCE, Question, QuizOutcome, QuizTier};
pub use result::{HitOutcome, RoundOutcome, RoundResult, StandResult};
