//! Error kinds surfaced to whoever drives a search.

use thiserror::Error;

/// Everything that can end a user interaction early.
///
/// None of these are fatal: the session stays usable for the next query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The startup catalog read or parse failed.
    #[error("failed to load catalog from {source_name}: {message}")]
    CatalogLoadFailed { source_name: String, message: String },

    /// The submitted query was blank after trimming.
    #[error("empty search query")]
    EmptyQuery,

    /// A search arrived before the catalog finished loading.
    #[error("catalog is not loaded yet")]
    CatalogNotReady,

    /// The zone identifier is not a known IANA zone.
    #[error("cannot format local time for zone '{zone}'")]
    TimeFormattingFailed { zone: String },
}

impl SearchError {
    pub fn load_failed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CatalogLoadFailed {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Message shown in the results panel.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::CatalogLoadFailed { .. } => {
                "Failed to load travel data. Please try again later.".to_string()
            }
            Self::EmptyQuery => "Please enter a search term.".to_string(),
            Self::CatalogNotReady => "Travel data is not loaded yet. Please try again.".to_string(),
            Self::TimeFormattingFailed { .. } => "Local time unavailable.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(SearchError::EmptyQuery.user_message(), "Please enter a search term.");
        assert!(SearchError::CatalogNotReady.user_message().contains("not loaded yet"));
        let err = SearchError::load_failed("catalog.json", "no such file");
        assert!(err.user_message().starts_with("Failed to load travel data"));
    }

    #[test]
    fn test_display_keeps_details() {
        let err = SearchError::load_failed("catalog.json", "expected value at line 1");
        let text = err.to_string();
        assert!(text.contains("catalog.json"));
        assert!(text.contains("line 1"));
    }
}
