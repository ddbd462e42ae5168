use serde::Serialize;
use std::fmt;

use crate::model::{BandThresholds, Question};

//
// ─── BAND ──────────────────────────────────────────────────────────────────────
//

/// Qualitative label derived from a quiz score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Band {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Band {
    #[must_use]
    pub fn from_score(score: usize, thresholds: &BandThresholds) -> Self {
        if score >= thresholds.excellent_min() {
            Band::Excellent
        } else if score >= thresholds.good_min() {
            Band::Good
        } else {
            Band::NeedsImprovement
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Band::Excellent => "Excellent",
            Band::Good => "Good",
            Band::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── PER-QUESTION OUTCOME ──────────────────────────────────────────────────────
//

/// How the reader did on one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOutcome {
    pub index: usize,
    pub prompt: String,
    pub chosen_index: Option<usize>,
    /// `None` only if the question was never answered.
    pub chosen_text: Option<String>,
    pub correct_index: usize,
    pub correct_text: String,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

impl QuestionOutcome {
    /// The correct option text, surfaced only when the reader got it wrong.
    #[must_use]
    pub fn correction(&self) -> Option<&str> {
        (!self.is_correct).then_some(self.correct_text.as_str())
    }
}

//
// ─── RESULTS ───────────────────────────────────────────────────────────────────
//

/// Score, band and per-question report for a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResults {
    score: usize,
    total: usize,
    band: Band,
    outcomes: Vec<QuestionOutcome>,
}

impl QuizResults {
    /// Scores `answers` against `questions`.
    ///
    /// `answers[i]` is the option chosen for question `i`; a missing or `None` entry
    /// counts as incorrect.
    #[must_use]
    pub fn compute(
        questions: &[Question],
        answers: &[Option<usize>],
        thresholds: &BandThresholds,
    ) -> Self {
        let outcomes: Vec<QuestionOutcome> = questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let chosen_index = answers.get(index).copied().flatten();
                let chosen_text = chosen_index
                    .and_then(|i| question.option(i))
                    .map(str::to_string);
                QuestionOutcome {
                    index,
                    prompt: question.prompt().to_string(),
                    chosen_index,
                    chosen_text,
                    correct_index: question.correct_index(),
                    correct_text: question.correct_option().to_string(),
                    is_correct: chosen_index.is_some_and(|i| question.is_correct(i)),
                    explanation: question.explanation().map(str::to_string),
                }
            })
            .collect();

        let score = outcomes.iter().filter(|o| o.is_correct).count();

        Self {
            score,
            total: questions.len(),
            band: Band::from_score(score, thresholds),
            outcomes,
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn band(&self) -> Band {
        self.band
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(correct: &[usize]) -> Vec<Question> {
        correct
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Question::new(format!("Q{i}"), ["w", "x", "y", "z"], c).unwrap()
            })
            .collect()
    }

    #[test]
    fn default_bands_match_reference_quiz() {
        let t = BandThresholds::default();
        assert_eq!(Band::from_score(4, &t), Band::Excellent);
        assert_eq!(Band::from_score(3, &t), Band::Excellent);
        assert_eq!(Band::from_score(2, &t), Band::Good);
        assert_eq!(Band::from_score(1, &t), Band::NeedsImprovement);
        assert_eq!(Band::from_score(0, &t), Band::NeedsImprovement);
    }

    #[test]
    fn band_labels() {
        assert_eq!(Band::NeedsImprovement.to_string(), "Needs Improvement");
        assert_eq!(Band::Excellent.label(), "Excellent");
    }

    #[test]
    fn compute_counts_matches_and_reports_texts() {
        let qs = questions(&[1, 2, 1, 1]);
        let results = QuizResults::compute(
            &qs,
            &[Some(1), Some(2), Some(1), Some(0)],
            &BandThresholds::default(),
        );

        assert_eq!(results.score(), 3);
        assert_eq!(results.total(), 4);
        assert_eq!(results.band(), Band::Excellent);

        let last = &results.outcomes()[3];
        assert!(!last.is_correct);
        assert_eq!(last.chosen_text.as_deref(), Some("w"));
        assert_eq!(last.correction(), Some("x"));
        assert!(results.outcomes()[..3].iter().all(|o| o.correction().is_none()));
    }

    #[test]
    fn missing_answers_count_as_incorrect() {
        let qs = questions(&[0, 0]);
        let results = QuizResults::compute(&qs, &[Some(0)], &BandThresholds::default());
        assert_eq!(results.score(), 1);
        let missing = &results.outcomes()[1];
        assert!(!missing.is_correct);
        assert_eq!(missing.chosen_index, None);
        assert_eq!(missing.chosen_text, None);
    }
}
