//! Runtime configuration shared by the CLI and the server.

use crate::catalog::CatalogSource;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
/// UX pacing between "searching" and showing results.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: CatalogSource,
    pub host: String,
    pub port: u16,
    /// Slept before each search in server and interactive modes.
    pub search_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::discover(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            search_delay: Duration::from_millis(DEFAULT_SEARCH_DELAY_MS),
        }
    }
}

impl AppConfig {
    /// Explicit catalog location, or discovery when `None`.
    pub fn with_catalog(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            self.catalog = CatalogSource::parse(raw);
        }
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
