use playbook_core::SectionTracker;
use playbook_core::model::{SectionBoundary, SectionId, SectionOutline, TrackerSettings};

/// Presentation-agnostic table-of-contents row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub id: SectionId,
    pub title: String,
    pub subsections: Vec<String>,
    pub is_active: bool,
}

/// Reading progress through the outline, counting the active section as read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingProgress {
    /// One-based position of the active section.
    pub position: usize,
    pub total: usize,
    pub fraction: f64,
}

impl ReadingProgress {
    /// Whole percent, rounded down.
    #[must_use]
    pub fn percent(&self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.fraction * 100.0).floor().clamp(0.0, 100.0) as u8;
        percent
    }
}

/// Facade over `SectionTracker` for the table of contents and progress bar.
///
/// Call `on_scroll` from the scroll handler; it is cheap enough to run on every
/// event.
#[derive(Debug, Clone)]
pub struct ReadingService {
    tracker: SectionTracker,
}

impl ReadingService {
    #[must_use]
    pub fn new(outline: SectionOutline, settings: TrackerSettings) -> Self {
        Self {
            tracker: SectionTracker::with_settings(outline, settings),
        }
    }

    #[must_use]
    pub fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    #[must_use]
    pub fn active_section_id(&self) -> &SectionId {
        self.tracker.active_section_id()
    }

    /// Feeds one scroll report to the tracker. Returns `true` if the active
    /// section changed.
    pub fn on_scroll(&mut self, scroll_offset: f64, boundaries: &[SectionBoundary]) -> bool {
        let previous = self.tracker.active_position();
        let changed = self.tracker.report_viewport_position(scroll_offset, boundaries);
        if changed {
            tracing::debug!(
                offset = scroll_offset,
                from = %self.tracker.outline().sections()[previous].id(),
                to = %self.tracker.active_section_id(),
                "active section changed"
            );
        }
        changed
    }

    #[must_use]
    pub fn table_of_contents(&self) -> Vec<TocEntry> {
        let active = self.tracker.active_position();
        self.tracker
            .outline()
            .iter()
            .map(|section| TocEntry {
                id: section.id().clone(),
                title: section.title().to_string(),
                subsections: section.subsections().to_vec(),
                is_active: section.order() == active,
            })
            .collect()
    }

    #[must_use]
    pub fn progress(&self) -> ReadingProgress {
        ReadingProgress {
            position: self.tracker.active_position() + 1,
            total: self.tracker.outline().len(),
            fraction: self.tracker.progress(),
        }
    }
}
