use crate::error::QuizError;
use crate::quiz::{self, Question, QuizOutcome};

use super::Game;

impl Game {
    /// Returns whether the chip-reward quiz is offered at this table.
    #[must_use]
    pub const fn is_quiz_offered(&self) -> bool {
        self.options.quiz
    }

    /// Draws a quiz question and stores it as pending.
    ///
    /// The quiz is independent of the round state and may be requested at
    /// any time. A pending question can only be cleared by submitting an
    /// answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the quiz is disabled or a question is already
    /// pending.
    pub fn request_question(&mut self) -> Result<Question, QuizError> {
        if !self.options.quiz {
            return Err(QuizError::NotOffered);
        }
        if self.pending_question.is_some() {
            return Err(QuizError::QuestionPending);
        }

        let question = quiz::draw_question(&mut self.rng);
        self.pending_question = Some(question);
        Ok(question)
    }

    /// Returns the pending quiz question, if any.
    #[must_use]
    pub const fn pending_question(&self) -> Option<&Question> {
        self.pending_question.as_ref()
    }

    /// Submits an answer to the pending question.
    ///
    /// Non-numeric input yields [`QuizOutcome::Invalid`] with no side
    /// effects; a numeric answer within the tolerance awards the tier
    /// reward to the player. The pending question is consumed either way.
    ///
    /// # Errors
    ///
    /// Returns an error if no question is pending.
    pub fn submit_answer(&mut self, answer: &str) -> Result<QuizOutcome, QuizError> {
        let question = self.pending_question.take().ok_or(QuizError::NoQuestion)?;

        let Ok(value) = answer.trim().parse::<f64>() else {
            return Ok(QuizOutcome::Invalid);
        };

        if question.accepts(value) {
            self.player_chips += question.reward;
            Ok(QuizOutcome::Correct {
                reward: question.reward,
            })
        } else {
            Ok(QuizOutcome::Incorrect)
        }
    }
}
