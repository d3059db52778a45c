//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck for the opening deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur in the chip-reward quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The quiz is not offered at this table.
    #[error("the quiz is not offered at this table")]
    NotOffered,
    /// A question is already pending an answer.
    #[error("a question is already pending an answer")]
    QuestionPending,
    /// No question is pending.
    #[error("no question is pending")]
    NoQuestion,
}
