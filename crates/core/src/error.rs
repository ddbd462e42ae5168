use thiserror::Error;

use crate::assessment::AssessmentError;
use crate::model::{ParseIdError, QuestionError, SectionError, SettingsError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    SectionId(#[from] ParseIdError),
    #[error(transparent)]
    Section(#[from] SectionError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}
