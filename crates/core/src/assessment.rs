//! Linear multiple-choice quiz runner.
//!
//! The engine moves through a fixed question list one step at a time. Every
//! failed operation returns a typed error and leaves the state untouched.

use serde::Serialize;
use thiserror::Error;

use crate::model::{BandThresholds, Question, QuizResults};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("a quiz needs at least one question")]
    NoQuestions,

    #[error("option {option} is out of range ({available} options available)")]
    InvalidSelection { option: usize, available: usize },

    #[error("question {index} must be answered before moving on")]
    AnswerRequired { index: usize },

    #[error("already at the first question")]
    AtBoundary,

    #[error("quiz is already completed")]
    AlreadyCompleted,

    #[error("quiz is not completed yet")]
    NotCompleted,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuizPhase {
    InProgress { current: usize },
    Completed,
}

/// Outcome of a successful `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index.
    Moved(usize),
    /// The last question was answered and the quiz is over.
    Completed,
}

/// Snapshot of the engine for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizState {
    pub current_index: usize,
    pub completed: bool,
    /// One slot per question; `None` until an option is selected.
    pub answers: Vec<Option<usize>>,
}

impl QuizState {
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Finite-state quiz runner: `InProgress(0)` → … → `InProgress(last)` → `Completed`.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    questions: Vec<Question>,
    thresholds: BandThresholds,
    phase: QuizPhase,
    answers: Vec<Option<usize>>,
}

impl AssessmentEngine {
    /// # Errors
    ///
    /// Returns `AssessmentError::NoQuestions` for an empty question list.
    pub fn new(questions: Vec<Question>) -> Result<Self, AssessmentError> {
        Self::with_thresholds(questions, BandThresholds::default())
    }

    /// # Errors
    ///
    /// Returns `AssessmentError::NoQuestions` for an empty question list.
    pub fn with_thresholds(
        questions: Vec<Question>,
        thresholds: BandThresholds,
    ) -> Result<Self, AssessmentError> {
        if questions.is_empty() {
            return Err(AssessmentError::NoQuestions);
        }
        let answers = vec![None; questions.len()];
        Ok(Self {
            questions,
            thresholds,
            phase: QuizPhase::InProgress { current: 0 },
            answers,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn thresholds(&self) -> &BandThresholds {
        &self.thresholds
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self.phase, QuizPhase::Completed)
    }

    /// Current question index; frozen at the last index once completed.
    #[must_use]
    pub fn current_index(&self) -> usize {
        match self.phase {
            QuizPhase::InProgress { current } => current,
            QuizPhase::Completed => self.last_index(),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index()]
    }

    /// Recorded answer for question `index`, if any.
    #[must_use]
    pub fn answer(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        QuizState {
            current_index: self.current_index(),
            completed: self.is_completed(),
            answers: self.answers.clone(),
        }
    }

    /// Records (or overwrites) the answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::AlreadyCompleted` once the quiz is over and
    /// `AssessmentError::InvalidSelection` if `option` does not exist.
    pub fn select_answer(&mut self, option: usize) -> Result<(), AssessmentError> {
        let current = self.in_progress()?;
        let available = self.questions[current].option_count();
        if option >= available {
            return Err(AssessmentError::InvalidSelection { option, available });
        }
        self.answers[current] = Some(option);
        Ok(())
    }

    /// Moves to the next question, or completes the quiz from the last one.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::AlreadyCompleted` once the quiz is over and
    /// `AssessmentError::AnswerRequired` if the current question is unanswered.
    pub fn advance(&mut self) -> Result<Advance, AssessmentError> {
        let current = self.in_progress()?;
        if self.answers[current].is_none() {
            return Err(AssessmentError::AnswerRequired { index: current });
        }

        if current < self.last_index() {
            let next = current + 1;
            self.phase = QuizPhase::InProgress { current: next };
            Ok(Advance::Moved(next))
        } else {
            self.phase = QuizPhase::Completed;
            Ok(Advance::Completed)
        }
    }

    /// Steps back one question, keeping every recorded answer.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::AlreadyCompleted` once the quiz is over and
    /// `AssessmentError::AtBoundary` on the first question.
    pub fn retreat(&mut self) -> Result<usize, AssessmentError> {
        let current = self.in_progress()?;
        if current == 0 {
            return Err(AssessmentError::AtBoundary);
        }
        let previous = current - 1;
        self.phase = QuizPhase::InProgress { current: previous };
        Ok(previous)
    }

    /// Returns to the first question with all answers cleared.
    pub fn reset(&mut self) {
        self.phase = QuizPhase::InProgress { current: 0 };
        self.answers.fill(None);
    }

    /// Scores the completed attempt.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::NotCompleted` while the quiz is in progress.
    pub fn compute_results(&self) -> Result<QuizResults, AssessmentError> {
        if !self.is_completed() {
            return Err(AssessmentError::NotCompleted);
        }
        Ok(QuizResults::compute(
            &self.questions,
            &self.answers,
            &self.thresholds,
        ))
    }

    fn in_progress(&self) -> Result<usize, AssessmentError> {
        match self.phase {
            QuizPhase::InProgress { current } => Ok(current),
            QuizPhase::Completed => Err(AssessmentError::AlreadyCompleted),
        }
    }

    fn last_index(&self) -> usize {
        self.questions.len() - 1
    }
}
