//! Keyword router: which buckets a query is worth scanning.
//!
//! Plain substring checks against a fixed trigger table. A query may
//! activate several buckets, or none.

use super::query::Query;
use crate::catalog::Category;

const CITY_TRIGGERS: &[&str] = &[
    "countr", "city", "australia", "japan", "brazil", "sydney", "tokyo", "melbourne", "kyoto",
    "rio", "sao paulo",
];

const TEMPLE_TRIGGERS: &[&str] = &["temple", "angkor", "taj", "mahal", "cambodia", "india"];

const BEACH_TRIGGERS: &[&str] = &["beach", "bora", "copacabana", "polynesia", "brazil"];

/// Trigger table, one row per bucket in evaluation order.
#[derive(Debug, Clone)]
pub struct KeywordRouter {
    routes: Vec<(Category, Vec<String>)>,
}

impl Default for KeywordRouter {
    fn default() -> Self {
        Self::new(vec![
            (Category::City, CITY_TRIGGERS),
            (Category::Temple, TEMPLE_TRIGGERS),
            (Category::Beach, BEACH_TRIGGERS),
        ])
    }
}

impl KeywordRouter {
    /// Build a router from a custom table. Triggers are lower-cased.
    pub fn new(table: Vec<(Category, &[&str])>) -> Self {
        let routes = table
            .into_iter()
            .map(|(category, triggers)| {
                (category, triggers.iter().map(|t| t.to_lowercase()).collect())
            })
            .collect();
        Self { routes }
    }

    /// Triggers registered for one bucket.
    pub fn triggers(&self, category: Category) -> &[String] {
        self.routes
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, t)| t.as_slice())
            .unwrap_or(&[])
    }

    /// Buckets whose triggers occur in the query, in table order.
    pub fn route(&self, query: &Query) -> Vec<Category> {
        let q = query.as_str();
        self.routes
            .iter()
            .filter(|(_, triggers)| triggers.iter().any(|t| q.contains(t.as_str())))
            .map(|(category, _)| *category)
            .collect()
    }
}
