use thiserror::Error;

use crate::model::ids::SectionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionError {
    #[error("section title cannot be empty")]
    EmptyTitle,

    #[error("subsection title cannot be empty")]
    EmptySubsection,

    #[error("an outline needs at least one section")]
    EmptyOutline,

    #[error("duplicate section id: {0}")]
    DuplicateId(SectionId),
}

//
// ─── SECTION ───────────────────────────────────────────────────────────────────
//

/// A named region of the playbook, positioned in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    title: String,
    order: usize,
    subsections: Vec<String>,
}

impl Section {
    /// Creates a section with no subsections.
    ///
    /// The document order is assigned when the section joins a `SectionOutline`.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::EmptyTitle` if the title is blank.
    pub fn new(id: SectionId, title: impl Into<String>) -> Result<Self, SectionError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(SectionError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            order: 0,
            subsections: Vec::new(),
        })
    }

    /// Attaches ordered subsection titles.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::EmptySubsection` if any title is blank.
    pub fn with_subsections<I, S>(mut self, subsections: I) -> Result<Self, SectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut titles = Vec::new();
        for title in subsections {
            let title = title.into().trim().to_string();
            if title.is_empty() {
                return Err(SectionError::EmptySubsection);
            }
            titles.push(title);
        }
        self.subsections = titles;
        Ok(self)
    }

    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Zero-based position in the document.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    #[must_use]
    pub fn subsections(&self) -> &[String] {
        &self.subsections
    }
}

//
// ─── OUTLINE ───────────────────────────────────────────────────────────────────
//

/// The fixed, ordered list of sections making up a playbook.
///
/// Always non-empty, ids are unique, and each section's `order` equals its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutline {
    sections: Vec<Section>,
}

impl SectionOutline {
    /// Builds an outline; insertion order becomes document order.
    ///
    /// # Errors
    ///
    /// Returns `SectionError::EmptyOutline` for an empty list and
    /// `SectionError::DuplicateId` if two sections share an id.
    pub fn new(sections: impl IntoIterator<Item = Section>) -> Result<Self, SectionError> {
        let mut ordered: Vec<Section> = Vec::new();
        for (order, mut section) in sections.into_iter().enumerate() {
            if ordered.iter().any(|s| s.id == section.id) {
                return Err(SectionError::DuplicateId(section.id));
            }
            section.order = order;
            ordered.push(section);
        }

        if ordered.is_empty() {
            return Err(SectionError::EmptyOutline);
        }

        Ok(Self { sections: ordered })
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// First section in document order.
    #[must_use]
    pub fn first(&self) -> &Section {
        // Non-empty by construction.
        &self.sections[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    #[must_use]
    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| &s.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &SectionId) -> bool {
        self.position(id).is_some()
    }
}

//
// ─── GEOMETRY ──────────────────────────────────────────────────────────────────
//

/// Layout of one section at the time of a scroll report.
///
/// Supplied by the rendering layer; the core never measures anything itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBoundary {
    pub id: SectionId,
    pub top_offset: f64,
    pub height: f64,
}

impl SectionBoundary {
    #[must_use]
    pub fn new(id: SectionId, top_offset: f64, height: f64) -> Self {
        Self {
            id,
            top_offset,
            height,
        }
    }

    /// Whether the geometry can ever match a probe position.
    ///
    /// Zero-height, negative-height and non-finite boundaries never match.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.top_offset.is_finite() && self.height.is_finite() && self.height > 0.0
    }

    /// Inclusive containment test: `top <= probe <= top + height`.
    #[must_use]
    pub fn contains(&self, probe: f64) -> bool {
        self.is_well_formed()
            && probe >= self.top_offset
            && probe <= self.top_offset + self.height
    }
}
