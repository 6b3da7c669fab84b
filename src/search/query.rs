//! Normalized search query.

use crate::error::SearchError;
use std::fmt;

/// A trimmed, lower-cased, non-empty query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Normalize raw user input. Blank input is rejected before any search runs.
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive containment of the query in `text`.
    pub fn found_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes() {
        assert_eq!(Query::parse("  Bora Bora \n").unwrap().as_str(), "bora bora");
    }

    #[test]
    fn test_blank_is_rejected() {
        assert_eq!(Query::parse(""), Err(SearchError::EmptyQuery));
        assert_eq!(Query::parse(" \t "), Err(SearchError::EmptyQuery));
    }

    #[test]
    fn test_found_in() {
        let q = Query::parse("KYOTO").unwrap();
        assert!(q.found_in("Kyoto, Japan"));
        assert!(!q.found_in("Tokyo, Japan"));
    }
}
