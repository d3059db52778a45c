//! The arithmetic chip-reward quiz.
//!
//! Three fixed banks of (expression, answer) pairs, one per tier. A tier is
//! drawn by weighted choice (easy and medium 40% each, hard 20%) and pays
//! 20, 50, or 100 chips for a correct answer.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Absolute tolerance when comparing a submitted answer to the expected one,
/// so fractional input like `7.999` for `8` is accepted.
pub const ANSWER_TOLERANCE: f64 = 0.01;

const EASY_QUESTIONS: [(&str, f64); 5] = [
    ("5 + 3", 8.0),
    ("10 - 4", 6.0),
    ("7 * 2", 14.0),
    ("20 / 4", 5.0),
    ("9 + 6", 15.0),
];

const MEDIUM_QUESTIONS: [(&str, f64); 5] = [
    ("15 * 4", 60.0),
    ("28 / 7", 4.0),
    ("12 + 15", 27.0),
    ("35 - 17", 18.0),
    ("9 * 7", 63.0),
];

const HARD_QUESTIONS: [(&str, f64); 5] = [
    ("(5 + 3) * 2", 16.0),
    ("12 * (3 + 2)", 60.0),
    ("(8 - 3) * (6 + 2)", 40.0),
    ("18 / (3 - 1)", 9.0),
    ("25 + 5 * 4 - 10", 30.0),
];

/// Question difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuizTier {
    /// Single-operation arithmetic; pays 20 chips.
    Easy,
    /// Larger single-operation arithmetic; pays 50 chips.
    Medium,
    /// Multi-operation expressions; pays 100 chips.
    Hard,
}

impl QuizTier {
    /// Chips awarded for a correct answer at this tier.
    #[must_use]
    pub const fn reward(self) -> i64 {
        match self {
            Self::Easy => 20,
            Self::Medium => 50,
            Self::Hard => 100,
        }
    }

    /// The fixed question bank for this tier: (expression, answer) pairs.
    #[must_use]
    pub const fn questions(self) -> &'static [(&'static str, f64)] {
        match self {
            Self::Easy => &EASY_QUESTIONS,
            Self::Medium => &MEDIUM_QUESTIONS,
            Self::Hard => &HARD_QUESTIONS,
        }
    }
}

/// A quiz question presented to the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Question {
    /// The difficulty tier the question was drawn from.
    pub tier: QuizTier,
    /// The expression to evaluate, e.g. `"5 + 3"`.
    pub prompt: &'static str,
    /// The expected numeric answer.
    pub answer: f64,
    /// Chips awarded for a correct answer.
    pub reward: i64,
}

impl Question {
    /// Returns whether the submitted value matches the expected answer
    /// within [`ANSWER_TOLERANCE`].
    #[must_use]
    pub fn accepts(&self, value: f64) -> bool {
        (value - self.answer).abs() < ANSWER_TOLERANCE
    }
}

/// Quiz outcome from submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuizOutcome {
    /// Correct answer; the reward was added to the player's chips.
    Correct {
        /// Chips awarded.
        reward: i64,
    },
    /// Wrong answer; no chips awarded.
    Incorrect,
    /// The input was not a number; no chips awarded.
    Invalid,
}

fn draw_tier(rng: &mut ChaCha8Rng) -> QuizTier {
    match rng.random_range(0..100_u32) {
        0..=39 => QuizTier::Easy,
        40..=79 => QuizTier::Medium,
        _ => QuizTier::Hard,
    }
}

/// Draws a tier by weight, then a uniformly-random question from its bank.
pub(crate) fn draw_question(rng: &mut ChaCha8Rng) -> Question {
    let tier = draw_tier(rng);
    let bank = tier.questions();
    let (prompt, answer) = bank[rng.random_range(0..bank.len())];

    Question {
        tier,
        prompt,
        answer,
        reward: tier.reward(),
    }
}
