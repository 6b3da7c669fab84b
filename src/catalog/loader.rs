//! Catalog sources: a local JSON file or a single HTTP GET.
//!
//! Discovery order when no source is given:
//!   ./travel_recommendation_api.json → <config dir>/travelbloom/travel_recommendation_api.json

use super::types::Catalog;
use crate::error::SearchError;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// File name the widget has always fetched.
pub const DEFAULT_CATALOG_FILE: &str = "travel_recommendation_api.json";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the catalog document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// Interpret a user-supplied location: http(s) URLs are fetched, anything
    /// else is a path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Pick the first existing default location, or the working-directory
    /// file if none exists (loading it will then fail visibly).
    pub fn discover() -> Self {
        let candidates = Self::default_paths();
        for path in &candidates {
            if path.is_file() {
                debug!(path = %path.display(), "discovered catalog file");
                return Self::File(path.clone());
            }
        }
        Self::File(candidates.into_iter().next().unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE)))
    }

    fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(DEFAULT_CATALOG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("travelbloom").join(DEFAULT_CATALOG_FILE));
        }
        paths
    }

    /// Read and parse the document. One attempt, no retry.
    pub fn load(&self) -> Result<Catalog, SearchError> {
        let text = match self {
            Self::File(path) => fs::read_to_string(path)
                .map_err(|e| SearchError::load_failed(self.to_string(), e.to_string()))?,
            Self::Url(url) => fetch(url)?,
        };

        let catalog = Catalog::from_json(&text)
            .map_err(|e| SearchError::load_failed(self.to_string(), e.to_string()))?;

        if !catalog.has_sections() {
            warn!(source = %self, "catalog document has no keys, searches stay unavailable");
        }
        info!(
            source = %self,
            cities = catalog.cities().len(),
            temples = catalog.temples().len(),
            beaches = catalog.beaches().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

fn fetch(url: &str) -> Result<String, SearchError> {
    // ureq reports non-2xx statuses as errors too
    let response = ureq::get(url)
        .set("User-Agent", concat!("TravelBloom/", env!("CARGO_PKG_VERSION")))
        .timeout(FETCH_TIMEOUT)
        .call()
        .map_err(|e| SearchError::load_failed(url, e.to_string()))?;

    response
        .into_string()
        .map_err(|e| SearchError::load_failed(url, e.to_string()))
}
