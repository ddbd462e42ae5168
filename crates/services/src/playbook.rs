use playbook_core::Clock;

use crate::content::{PlaybookContent, PlaybookMeta};
use crate::downloads::DownloadResource;
use crate::error::QuizServiceError;
use crate::glossary::Glossary;
use crate::quiz::QuizService;
use crate::reading::ReadingService;

/// Bundles the services behind one playbook page.
///
/// The reading tracker and the quiz never talk to each other; this type only
/// owns both so the presentation layer has a single handle.
#[derive(Debug, Clone)]
pub struct PlaybookServices {
    meta: PlaybookMeta,
    reading: ReadingService,
    quiz: QuizService,
    glossary: Glossary,
    downloads: Vec<DownloadResource>,
}

impl PlaybookServices {
    /// # Errors
    ///
    /// Returns `QuizServiceError` if the content carries no questions.
    pub fn from_content(content: PlaybookContent, clock: Clock) -> Result<Self, QuizServiceError> {
        let PlaybookContent {
            meta,
            outline,
            questions,
            tracker,
            scoring,
            glossary,
            downloads,
        } = content;

        Ok(Self {
            meta,
            reading: ReadingService::new(outline, tracker),
            quiz: QuizService::new(questions, scoring, clock)?,
            glossary,
            downloads,
        })
    }

    #[must_use]
    pub fn meta(&self) -> &PlaybookMeta {
        &self.meta
    }

    #[must_use]
    pub fn reading(&self) -> &ReadingService {
        &self.reading
    }

    pub fn reading_mut(&mut self) -> &mut ReadingService {
        &mut self.reading
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizService {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut QuizService {
        &mut self.quiz
    }

    #[must_use]
    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    #[must_use]
    pub fn downloads(&self) -> &[DownloadResource] {
        &self.downloads
    }
}
