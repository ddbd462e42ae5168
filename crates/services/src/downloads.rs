use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DownloadError {
    #[error("download title cannot be empty")]
    EmptyTitle,
    #[error("download format cannot be empty for {title:?}")]
    EmptyFormat { title: String },
}

/// A downloadable companion file listed at the end of the playbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResource {
    title: String,
    description: String,
    format: String,
    size: String,
}

impl DownloadResource {
    /// # Errors
    ///
    /// Returns `DownloadError` if the title or format is blank.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        format: impl Into<String>,
        size: impl Into<String>,
    ) -> Result<Self, DownloadError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(DownloadError::EmptyTitle);
        }
        let format = format.into().trim().to_string();
        if format.is_empty() {
            return Err(DownloadError::EmptyFormat { title });
        }
        Ok(Self {
            title,
            description: description.into().trim().to_string(),
            format,
            size: size.into().trim().to_string(),
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Suggested file name: lower-cased title with whitespace runs replaced by `-`.
    #[must_use]
    pub fn file_name(&self) -> String {
        let stem = self
            .title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("{stem}.{}", self.format.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_slugifies_title() {
        let d = DownloadResource::new("Complete  Playbook PDF", "", "PDF", "2.4 MB").unwrap();
        assert_eq!(d.file_name(), "complete-playbook-pdf.pdf");
    }

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(
            DownloadResource::new(" ", "", "PDF", "").unwrap_err(),
            DownloadError::EmptyTitle
        );
        assert!(matches!(
            DownloadResource::new("Checklist", "", "", "").unwrap_err(),
            DownloadError::EmptyFormat { .. }
        ));
    }
}
