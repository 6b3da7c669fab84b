//! TravelBloom destination search.
//!
//! Loads a static catalog of cities, temples and beaches, routes a free-text
//! query to the relevant buckets, matches by substring and annotates every
//! hit with a best-effort IANA time zone.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod server;
pub mod session;
pub mod timezone;
pub mod view;

pub use catalog::{Catalog, CatalogSource, Category, City, Destination};
pub use error::SearchError;
pub use search::{perform_search, KeywordRouter, Query, SearchResult};
pub use session::{QueryState, SearchSession};
pub use view::ResultCard;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
