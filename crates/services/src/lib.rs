#![forbid(unsafe_code)]

pub mod content;
pub mod downloads;
pub mod error;
pub mod glossary;
pub mod playbook;
pub mod quiz;
pub mod reading;

pub use playbook_core::Clock;

pub use content::{PlaybookContent, PlaybookMeta};
pub use downloads::{DownloadError, DownloadResource};
pub use error::{ContentError, QuizServiceError};
pub use glossary::{Glossary, GlossaryEntry, GlossaryError};
pub use playbook::PlaybookServices;
pub use quiz::{QuizOptionView, QuizReport, QuizService, QuizView};
pub use reading::{ReadingProgress, ReadingService, TocEntry};
