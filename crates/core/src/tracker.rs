//! Reading-progress tracking.
//!
//! Maps a viewport scroll offset onto exactly one "active" section. Geometry is
//! passed in on every report so the tracker holds no reference to a rendering
//! context and can be driven from tests.

use crate::model::{SectionBoundary, SectionId, SectionOutline, TrackerSettings};

/// Single-writer state machine holding the active section of a playbook.
///
/// The active id is always a member of the outline: it starts at the first
/// section and positions that match no section leave it unchanged.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    outline: SectionOutline,
    settings: TrackerSettings,
    active: usize,
}

impl SectionTracker {
    #[must_use]
    pub fn new(outline: SectionOutline) -> Self {
        Self::with_settings(outline, TrackerSettings::default())
    }

    #[must_use]
    pub fn with_settings(outline: SectionOutline, settings: TrackerSettings) -> Self {
        Self {
            outline,
            settings,
            active: 0,
        }
    }

    #[must_use]
    pub fn outline(&self) -> &SectionOutline {
        &self.outline
    }

    #[must_use]
    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    /// Currently active section id.
    #[must_use]
    pub fn active_section_id(&self) -> &SectionId {
        self.outline.sections()[self.active].id()
    }

    /// Zero-based document position of the active section.
    #[must_use]
    pub fn active_position(&self) -> usize {
        self.active
    }

    /// Reports the current scroll offset together with the current layout.
    ///
    /// Sections are tested in document order; the first whose extent contains
    /// `scroll_offset + lookahead` becomes active. Boundaries for unknown ids or
    /// with degenerate geometry are skipped. When nothing matches, the previous
    /// active section is kept.
    ///
    /// Returns `true` if the active section changed.
    pub fn report_viewport_position(
        &mut self,
        scroll_offset: f64,
        boundaries: &[SectionBoundary],
    ) -> bool {
        let Some(next) = self.locate(scroll_offset, boundaries) else {
            return false;
        };
        let changed = next != self.active;
        self.active = next;
        changed
    }

    /// Pure lookup behind `report_viewport_position`.
    #[must_use]
    pub fn locate(&self, scroll_offset: f64, boundaries: &[SectionBoundary]) -> Option<usize> {
        if !scroll_offset.is_finite() {
            return None;
        }
        let probe = scroll_offset + self.settings.lookahead();

        self.outline.iter().position(|section| {
            // First boundary reported for an id wins.
            boundaries
                .iter()
                .find(|b| &b.id == section.id())
                .is_some_and(|b| b.contains(probe))
        })
    }

    /// Fraction of the outline read so far, counting the active section as read.
    #[must_use]
    pub fn progress(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let ratio = (self.active + 1) as f64 / self.outline.len() as f64;
        ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;

    fn id(raw: &str) -> SectionId {
        SectionId::new(raw).unwrap()
    }

    fn outline(ids: &[&str]) -> SectionOutline {
        SectionOutline::new(
            ids.iter()
                .map(|raw| Section::new(id(raw), raw.to_uppercase()).unwrap()),
        )
        .unwrap()
    }

    /// Contiguous layout starting at `top`, each section `height` tall.
    fn stacked(ids: &[&str], top: f64, height: f64) -> Vec<SectionBoundary> {
        ids.iter()
            .enumerate()
            .map(|(i, raw)| {
                #[allow(clippy::cast_precision_loss)]
                let offset = top + height * i as f64;
                SectionBoundary::new(id(raw), offset, height)
            })
            .collect()
    }

    #[test]
    fn starts_on_first_section() {
        let tracker = SectionTracker::new(outline(&["a", "b", "c"]));
        assert_eq!(tracker.active_section_id(), &id("a"));
        assert_eq!(tracker.active_position(), 0);
    }

    #[test]
    fn lookahead_activates_section_before_its_top() {
        let ids = ["a", "b"];
        let mut tracker = SectionTracker::new(outline(&ids));
        let geometry = stacked(&ids, 0.0, 500.0);

        // 401 + 100 lands past the end of `a`.
        assert!(tracker.report_viewport_position(401.0, &geometry));
        assert_eq!(tracker.active_section_id(), &id("b"));
    }

    #[test]
    fn shared_edge_resolves_to_earlier_section() {
        let ids = ["a", "b"];
        let mut tracker = SectionTracker::new(outline(&ids));
        let geometry = stacked(&ids, 0.0, 500.0);

        tracker.report_viewport_position(400.0, &geometry);
        assert_eq!(tracker.active_section_id(), &id("a"));
    }

    #[test]
    fn monotonic_scroll_visits_each_section_once_in_order() {
        let ids = ["a", "b", "c"];
        let mut tracker = SectionTracker::new(outline(&ids));
        let geometry = stacked(&ids, 600.0, 800.0);

        let mut visited = vec![tracker.active_section_id().clone()];
        let mut offset = 0.0;
        while offset <= 3000.0 {
            tracker.report_viewport_position(offset, &geometry);
            let current = tracker.active_section_id();
            if visited.last() != Some(current) {
                visited.push(current.clone());
            }
            offset += 25.0;
        }

        assert_eq!(visited, vec![id("a"), id("b"), id("c")]);
    }

    #[test]
    fn positions_outside_all_sections_keep_last_active() {
        let ids = ["a", "b"];
        let mut tracker = SectionTracker::new(outline(&ids));
        let geometry = stacked(&ids, 1000.0, 200.0);

        // Above the first section.
        assert!(!tracker.report_viewport_position(0.0, &geometry));
        assert_eq!(tracker.active_section_id(), &id("a"));

        tracker.report_viewport_position(1150.0, &geometry);
        assert_eq!(tracker.active_section_id(), &id("b"));

        // Below the last section.
        assert!(!tracker.report_viewport_position(10_000.0, &geometry));
        assert_eq!(tracker.active_section_id(), &id("b"));
    }

    #[test]
    fn scrolling_back_up_reverts() {
        let ids = ["a", "b"];
        let mut tracker = SectionTracker::new(outline(&ids));
        let geometry = stacked(&ids, 0.0, 500.0);

        tracker.report_viewport_position(600.0, &geometry);
        assert_eq!(tracker.active_section_id(), &id("b"));
        tracker.report_viewport_position(0.0, &geometry);
        assert_eq!(tracker.active_section_id(), &id("a"));
    }

    #[test]
    fn unknown_and_degenerate_boundaries_are_ignored() {
        let mut tracker = SectionTracker::new(outline(&["a", "b"]));
        let geometry = vec![
            SectionBoundary::new(id("foreign"), 0.0, 10_000.0),
            SectionBoundary::new(id("a"), 0.0, 0.0),
            SectionBoundary::new(id("b"), f64::NAN, 100.0),
        ];

        assert!(!tracker.report_viewport_position(0.0, &geometry));
        assert_eq!(tracker.active_section_id(), &id("a"));
        assert!(!tracker.report_viewport_position(f64::NAN, &geometry));
    }

    #[test]
    fn document_order_wins_over_boundary_order() {
        let mut tracker = SectionTracker::new(outline(&["a", "b"]));
        // Overlapping geometry, reported in reverse order.
        let geometry = vec![
            SectionBoundary::new(id("b"), 0.0, 1000.0),
            SectionBoundary::new(id("a"), 0.0, 1000.0),
        ];
        tracker.report_viewport_position(500.0, &geometry);
        assert_eq!(tracker.active_section_id(), &id("a"));
    }

    #[test]
    fn active_id_is_always_known_for_arbitrary_offsets() {
        let ids = ["a", "b", "c"];
        let mut tracker = SectionTracker::new(outline(&ids));
        let geometry = stacked(&ids, 300.0, 250.0);

        for step in -20..200 {
            tracker.report_viewport_position(f64::from(step) * 13.7, &geometry);
            assert!(tracker.outline().contains(tracker.active_section_id()));
        }
    }

    #[test]
    fn progress_counts_active_section() {
        let ids = ["a", "b", "c", "d"];
        let mut tracker = SectionTracker::new(outline(&ids));
        assert!((tracker.progress() - 0.25).abs() < 1e-9);

        tracker.report_viewport_position(1000.0, &stacked(&ids, 0.0, 500.0));
        assert_eq!(tracker.active_section_id(), &id("c"));
        assert!((tracker.progress() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn custom_lookahead_is_applied() {
        let ids = ["a", "b"];
        let mut tracker = SectionTracker::with_settings(
            outline(&ids),
            TrackerSettings::new(0.0).unwrap(),
        );
        let geometry = stacked(&ids, 0.0, 500.0);

        tracker.report_viewport_position(450.0, &geometry);
        assert_eq!(tracker.active_section_id(), &id("a"));
        tracker.report_viewport_position(501.0, &geometry);
        assert_eq!(tracker.active_section_id(), &id("b"));
    }
}
