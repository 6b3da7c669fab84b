//! Destination catalog: data model and loading.
//!
//! The catalog is read once from a static JSON document and never mutated
//! afterwards; a reload replaces it wholesale.

pub mod loader;
pub mod types;

pub use loader::{CatalogSource, DEFAULT_CATALOG_FILE};
pub use types::{Catalog, CatalogDocument, Category, City, Destination};
