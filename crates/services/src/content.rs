//! Playbook content loading.
//!
//! Content arrives as TOML drafts which are validated into core types before any
//! service sees them.

use std::path::Path;

use serde::Deserialize;

use playbook_core::model::{
    BandThresholds, Question, Section, SectionId, SectionOutline, TrackerSettings,
};

use crate::downloads::DownloadResource;
use crate::error::ContentError;
use crate::glossary::{Glossary, GlossaryEntry};

const BUILTIN_PLAYBOOK: &str = include_str!("../content/trade_playbook.toml");

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaybookDraft {
    meta: PlaybookMeta,
    #[serde(default)]
    tracker: TrackerDraft,
    #[serde(default)]
    scoring: ScoringDraft,
    sections: Vec<SectionDraft>,
    #[serde(default)]
    questions: Vec<QuestionDraft>,
    #[serde(default)]
    glossary: Vec<GlossaryDraft>,
    #[serde(default)]
    downloads: Vec<DownloadDraft>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TrackerDraft {
    #[serde(default = "default_lookahead")]
    lookahead: f64,
}

impl Default for TrackerDraft {
    fn default() -> Self {
        Self {
            lookahead: default_lookahead(),
        }
    }
}

fn default_lookahead() -> f64 {
    TrackerSettings::DEFAULT_LOOKAHEAD
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScoringDraft {
    #[serde(default = "default_excellent_min")]
    excellent_min: usize,
    #[serde(default = "default_good_min")]
    good_min: usize,
}

impl Default for ScoringDraft {
    fn default() -> Self {
        Self {
            excellent_min: default_excellent_min(),
            good_min: default_good_min(),
        }
    }
}

fn default_excellent_min() -> usize {
    BandThresholds::DEFAULT_EXCELLENT_MIN
}

fn default_good_min() -> usize {
    BandThresholds::DEFAULT_GOOD_MIN
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionDraft {
    id: String,
    title: String,
    #[serde(default)]
    subsections: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionDraft {
    prompt: String,
    options: Vec<String>,
    correct: usize,
    #[serde(default)]
    explanation: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GlossaryDraft {
    term: String,
    definition: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DownloadDraft {
    title: String,
    #[serde(default)]
    description: String,
    format: String,
    #[serde(default)]
    size: String,
}

//
// ─── VALIDATED CONTENT ─────────────────────────────────────────────────────────
//

/// Descriptive metadata shown in the page hero.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaybookMeta {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub last_updated: String,
}

/// Everything the engine consumes from the content collaborator.
#[derive(Debug, Clone)]
pub struct PlaybookContent {
    pub meta: PlaybookMeta,
    pub outline: SectionOutline,
    pub questions: Vec<Question>,
    pub tracker: TrackerSettings,
    pub scoring: BandThresholds,
    pub glossary: Glossary,
    pub downloads: Vec<DownloadResource>,
}

impl PlaybookContent {
    /// The bundled "Why Trade?" playbook.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file is itself invalid.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_toml_str(BUILTIN_PLAYBOOK)
    }

    /// Reads and validates a content file.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Read` on I/O failure, otherwise see `from_toml_str`.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_toml_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            sections = content.outline.len(),
            questions = content.questions.len(),
            "loaded playbook content"
        );
        Ok(content)
    }

    /// Parses and validates TOML content.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` for malformed TOML, invalid sections, questions,
    /// settings, glossary entries or downloads, and for a quiz with no questions.
    pub fn from_toml_str(raw: &str) -> Result<Self, ContentError> {
        let draft: PlaybookDraft = toml::from_str(raw)?;
        Self::from_draft(draft)
    }

    fn from_draft(draft: PlaybookDraft) -> Result<Self, ContentError> {
        let mut sections = Vec::with_capacity(draft.sections.len());
        for (index, s) in draft.sections.into_iter().enumerate() {
            let id = SectionId::new(s.id)
                .map_err(|source| ContentError::SectionId { index, source })?;
            sections.push(Section::new(id, s.title)?.with_subsections(s.subsections)?);
        }
        let outline = SectionOutline::new(sections)?;

        if draft.questions.is_empty() {
            return Err(ContentError::NoQuestions);
        }
        let questions = draft
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, q)| -> Result<Question, ContentError> {
                let question = Question::new(q.prompt, q.options, q.correct)
                    .map_err(|source| ContentError::Question { index, source })?;
                Ok(match q.explanation {
                    Some(text) => question.with_explanation(text),
                    None => question,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let tracker = TrackerSettings::new(draft.tracker.lookahead)?;
        let scoring = BandThresholds::new(draft.scoring.excellent_min, draft.scoring.good_min)?;

        let glossary = Glossary::new(draft.glossary.into_iter().map(|g| GlossaryEntry {
            term: g.term,
            definition: g.definition,
        }))?;

        let downloads = draft
            .downloads
            .into_iter()
            .map(|d| DownloadResource::new(d.title, d.description, d.format, d.size))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            meta: draft.meta,
            outline,
            questions,
            tracker,
            scoring,
            glossary,
            downloads,
        })
    }
}
