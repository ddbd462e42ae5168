use chrono::{DateTime, Utc};
use serde::Serialize;

use playbook_core::model::{BandThresholds, Question, QuizResults};
use playbook_core::{Advance, AssessmentEngine, AssessmentError, Clock, QuizState};

use crate::error::QuizServiceError;

//
// ─── VIEWS ─────────────────────────────────────────────────────────────────────
//

/// One selectable option as the UI should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOptionView {
    pub index: usize,
    pub text: String,
    pub selected: bool,
}

/// Everything needed to render the in-progress quiz card.
///
/// Intentionally **not** pre-formatted: "question 2 of 4" and button labels are
/// left to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    /// One-based question number.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<QuizOptionView>,
    /// An answer is recorded for the current question.
    pub can_advance: bool,
    pub can_retreat: bool,
    /// Advancing from here finishes the quiz.
    pub is_last: bool,
    pub completed: bool,
    pub progress: f64,
}

/// Scored attempt with its timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    pub results: QuizResults,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Presentation-facing wrapper around `AssessmentEngine`.
///
/// Adds attempt timestamps from a `Clock` and logs every transition. Rejected
/// operations are logged and returned; the engine state is untouched.
#[derive(Debug, Clone)]
pub struct QuizService {
    engine: AssessmentEngine,
    clock: Clock,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizService {
    /// # Errors
    ///
    /// Returns `QuizServiceError::Assessment` if `questions` is empty.
    pub fn new(
        questions: Vec<Question>,
        thresholds: BandThresholds,
        clock: Clock,
    ) -> Result<Self, QuizServiceError> {
        let engine = AssessmentEngine::with_thresholds(questions, thresholds)?;
        Ok(Self {
            engine,
            started_at: clock.now(),
            clock,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.engine.state()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.engine.is_completed()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Swaps the time source, e.g. to advance a fixed clock between steps.
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    /// # Errors
    ///
    /// See `AssessmentEngine::select_answer`.
    pub fn select_answer(&mut self, option: usize) -> Result<(), QuizServiceError> {
        let index = self.engine.current_index();
        self.engine
            .select_answer(option)
            .map_err(|err| rejected("select_answer", err))?;
        tracing::debug!(question = index, option, "answer selected");
        Ok(())
    }

    /// # Errors
    ///
    /// See `AssessmentEngine::advance`.
    pub fn advance(&mut self) -> Result<Advance, QuizServiceError> {
        let step = self
            .engine
            .advance()
            .map_err(|err| rejected("advance", err))?;
        match step {
            Advance::Moved(index) => tracing::debug!(question = index, "moved to next question"),
            Advance::Completed => {
                let now = self.clock.now();
                self.completed_at = Some(now);
                tracing::info!(
                    answered = self.engine.state().answered_count(),
                    total = self.engine.questions().len(),
                    "quiz completed"
                );
            }
        }
        Ok(step)
    }

    /// # Errors
    ///
    /// See `AssessmentEngine::retreat`.
    pub fn retreat(&mut self) -> Result<usize, QuizServiceError> {
        let index = self
            .engine
            .retreat()
            .map_err(|err| rejected("retreat", err))?;
        tracing::debug!(question = index, "moved to previous question");
        Ok(index)
    }

    /// Starts a fresh attempt over the same questions.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.started_at = self.clock.now();
        self.completed_at = None;
        tracing::debug!("quiz reset");
    }

    /// # Errors
    ///
    /// Returns `AssessmentError::NotCompleted` while the quiz is in progress.
    pub fn results(&self) -> Result<QuizResults, QuizServiceError> {
        Ok(self.engine.compute_results()?)
    }

    /// Results plus attempt timing.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::NotCompleted` while the quiz is in progress.
    pub fn report(&self) -> Result<QuizReport, QuizServiceError> {
        let results = self.engine.compute_results()?;
        let completed_at = self
            .completed_at
            .ok_or(QuizServiceError::Assessment(AssessmentError::NotCompleted))?;
        Ok(QuizReport {
            results,
            started_at: self.started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn view(&self) -> QuizView {
        let current = self.engine.current_index();
        let question = self.engine.current_question();
        let selected = self.engine.answer(current);
        let total = self.engine.questions().len();
        let completed = self.engine.is_completed();

        #[allow(clippy::cast_precision_loss)]
        let progress = (current + 1) as f64 / total as f64;

        QuizView {
            number: current + 1,
            total,
            prompt: question.prompt().to_string(),
            options: question
                .options()
                .iter()
                .enumerate()
                .map(|(index, text)| QuizOptionView {
                    index,
                    text: text.clone(),
                    selected: selected == Some(index),
                })
                .collect(),
            can_advance: !completed && selected.is_some(),
            can_retreat: !completed && current > 0,
            is_last: current + 1 == total,
            completed,
            progress,
        }
    }
}

fn rejected(operation: &'static str, err: AssessmentError) -> QuizServiceError {
    tracing::debug!(operation, error = %err, "quiz operation rejected");
    QuizServiceError::Assessment(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use playbook_core::model::Band;
    use playbook_core::time::fixed_now;

    fn service() -> QuizService {
        let questions = [1, 2, 1, 1]
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Question::new(format!("Q{}", i + 1), ["a", "b", "c", "d"], c).unwrap()
            })
            .collect();
        QuizService::new(questions, BandThresholds::default(), Clock::fixed(fixed_now())).unwrap()
    }

    #[test]
    fn view_tracks_navigation_affordances() {
        let mut quiz = service();
        let view = quiz.view();
        assert_eq!((view.number, view.total), (1, 4));
        assert!(!view.can_advance);
        assert!(!view.can_retreat);
        assert!(!view.is_last);
        assert!((view.progress - 0.25).abs() < 1e-9);

        quiz.select_answer(2).unwrap();
        let view = quiz.view();
        assert!(view.can_advance);
        assert!(view.options[2].selected);
        assert_eq!(view.options.iter().filter(|o| o.selected).count(), 1);

        for pick in [1, 2, 1] {
            quiz.select_answer(pick).unwrap();
            quiz.advance().unwrap();
        }
        let view = quiz.view();
        assert_eq!(view.number, 4);
        assert!(view.is_last);
        assert!(view.can_retreat);
    }

    #[test]
    fn rejected_operations_surface_engine_errors() {
        let mut quiz = service();
        let err = quiz.advance().unwrap_err();
        assert_eq!(err.assessment(), &AssessmentError::AnswerRequired { index: 0 });
        let err = quiz.retreat().unwrap_err();
        assert_eq!(err.assessment(), &AssessmentError::AtBoundary);
        let err = quiz.select_answer(9).unwrap_err();
        assert!(matches!(
            err.assessment(),
            AssessmentError::InvalidSelection { option: 9, .. }
        ));
        assert!(quiz.report().is_err());
    }

    #[test]
    fn report_records_attempt_timing() {
        let mut quiz = service();
        let mut clock = Clock::fixed(fixed_now());
        clock.advance(Duration::minutes(3));
        quiz.set_clock(clock);

        for pick in [1, 2, 1, 0] {
            quiz.select_answer(pick).unwrap();
            quiz.advance().unwrap();
        }

        let report = quiz.report().unwrap();
        assert_eq!(report.started_at, fixed_now());
        assert_eq!(report.completed_at - report.started_at, Duration::minutes(3));
        assert_eq!(report.results.score(), 3);
        assert_eq!(report.results.band(), Band::Excellent);
        assert!(!quiz.view().can_advance);
    }

    #[test]
    fn reset_restarts_timing() {
        let mut quiz = service();
        for pick in [0, 0, 0, 0] {
            quiz.select_answer(pick).unwrap();
            quiz.advance().unwrap();
        }
        assert!(quiz.completed_at().is_some());

        let mut clock = Clock::fixed(fixed_now());
        clock.advance(Duration::hours(1));
        quiz.set_clock(clock);
        quiz.reset();

        assert_eq!(quiz.started_at(), fixed_now() + Duration::hours(1));
        assert_eq!(quiz.completed_at(), None);
        assert_eq!(quiz.state().answered_count(), 0);
    }
}
