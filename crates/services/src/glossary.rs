use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GlossaryError {
    #[error("glossary term cannot be empty")]
    EmptyTerm,
    #[error("glossary term {term:?} must start with a letter")]
    NonAlphabeticTerm { term: String },
    #[error("definition for {term:?} cannot be empty")]
    EmptyDefinition { term: String },
    #[error("duplicate glossary term: {term:?}")]
    DuplicateTerm { term: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
}

/// Static term lookup, grouped by upper-case initial letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glossary {
    by_letter: BTreeMap<char, Vec<GlossaryEntry>>,
}

impl Glossary {
    /// # Errors
    ///
    /// Returns `GlossaryError` for blank terms or definitions, terms that do not
    /// start with a letter, and terms repeated case-insensitively.
    pub fn new(entries: impl IntoIterator<Item = GlossaryEntry>) -> Result<Self, GlossaryError> {
        let mut by_letter: BTreeMap<char, Vec<GlossaryEntry>> = BTreeMap::new();

        for entry in entries {
            let term = entry.term.trim().to_string();
            let definition = entry.definition.trim().to_string();
            let Some(first) = term.chars().next() else {
                return Err(GlossaryError::EmptyTerm);
            };
            if !first.is_alphabetic() {
                return Err(GlossaryError::NonAlphabeticTerm { term });
            }
            if definition.is_empty() {
                return Err(GlossaryError::EmptyDefinition { term });
            }

            let letter = first.to_uppercase().next().unwrap_or(first);
            let bucket = by_letter.entry(letter).or_default();
            if bucket.iter().any(|e| e.term.eq_ignore_ascii_case(&term)) {
                return Err(GlossaryError::DuplicateTerm { term });
            }
            bucket.push(GlossaryEntry { term, definition });
        }

        for bucket in by_letter.values_mut() {
            bucket.sort_by_key(|e| e.term.to_lowercase());
        }

        Ok(Self { by_letter })
    }

    /// Letters that have at least one term, in alphabetical order.
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.by_letter.keys().copied().collect()
    }

    #[must_use]
    pub fn by_letter(&self, letter: char) -> &[GlossaryEntry] {
        let key = letter.to_uppercase().next().unwrap_or(letter);
        self.by_letter.get(&key).map_or(&[], Vec::as_slice)
    }

    /// Exact, case-insensitive term lookup.
    #[must_use]
    pub fn lookup(&self, term: &str) -> Option<&GlossaryEntry> {
        let term = term.trim();
        let letter = term.chars().next()?;
        self.by_letter(letter)
            .iter()
            .find(|e| e.term.to_lowercase() == term.to_lowercase())
    }

    /// Case-insensitive substring search over terms and definitions.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&GlossaryEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.iter()
            .filter(|e| {
                e.term.to_lowercase().contains(&needle)
                    || e.definition.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GlossaryEntry> {
        self.by_letter.values().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_letter.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_letter.is_empty()
    }
}
