//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use playbook_core::AssessmentError;
use playbook_core::model::{ParseIdError, QuestionError, SectionError, SettingsError};

use crate::downloads::DownloadError;
use crate::glossary::GlossaryError;

/// Errors emitted while loading and validating playbook content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read content file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid content TOML")]
    Parse(#[from] toml::de::Error),
    #[error("section {index}: invalid id")]
    SectionId {
        index: usize,
        #[source]
        source: ParseIdError,
    },
    #[error(transparent)]
    Section(#[from] SectionError),
    #[error("question {index}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error("playbook has no quiz questions")]
    NoQuestions,
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Glossary(#[from] GlossaryError),
    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

impl QuizServiceError {
    /// The underlying engine condition.
    #[must_use]
    pub fn assessment(&self) -> &AssessmentError {
        match self {
            QuizServiceError::Assessment(err) => err,
        }
    }
}
