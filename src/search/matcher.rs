//! Substring matching within a single bucket.

use super::query::Query;
use super::SearchResult;
use crate::catalog::{Catalog, Category, Destination};

/// Hits from one bucket, in catalog order.
///
/// Cities match on their name, description or owning country; temples and
/// beaches on name or description only.
pub fn match_bucket(catalog: &Catalog, category: Category, query: &Query) -> Vec<SearchResult> {
    match category {
        Category::City => catalog
            .cities()
            .iter()
            .filter(|city| {
                query.found_in(&city.destination.name)
                    || query.found_in(&city.country)
                    || query.found_in(&city.destination.description)
            })
            .map(SearchResult::from_city)
            .collect(),
        Category::Temple => match_landmarks(catalog.temples(), category, query),
        Category::Beach => match_landmarks(catalog.beaches(), category, query),
    }
}

fn match_landmarks(items: &[Destination], category: Category, query: &Query) -> Vec<SearchResult> {
    items
        .iter()
        .filter(|d| query.found_in(&d.name) || query.found_in(&d.description))
        .map(|d| SearchResult::from_landmark(d, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fixtures;

    fn q(raw: &str) -> Query {
        Query::parse(raw).unwrap()
    }

    #[test]
    fn test_city_matches_country_name() {
        let hits = match_bucket(&fixtures::catalog(), Category::City, &q("australia"));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].name, "Melbourne, Australia");
        assert_eq!(hits[1].time_zone, "Australia/Sydney");
    }

    #[test]
    fn test_matches_description_case_insensitively() {
        let hits = match_bucket(&fixtures::catalog(), Category::Temple, &q("MARBLE"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, Category::Temple);
        assert_eq!(hits[0].time_zone, "Asia/Kolkata");
    }

    #[test]
    fn test_bucket_is_not_leaked() {
        // Kyoto's description mentions temples, but only the city bucket holds it
        let temples = match_bucket(&fixtures::catalog(), Category::Temple, &q("historic"));
        assert!(temples.is_empty());
        let cities = match_bucket(&fixtures::catalog(), Category::City, &q("historic"));
        assert_eq!(cities[0].name, "Kyoto, Japan");
    }

    #[test]
    fn test_landmark_has_no_country() {
        let hits = match_bucket(&fixtures::catalog(), Category::Beach, &q("lagoon island"));
        assert!(hits.is_empty());
        let hits = match_bucket(&fixtures::catalog(), Category::Beach, &q("island"));
        assert!(hits[0].country.is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let hits = match_bucket(&Catalog::default(), Category::City, &q("tokyo"));
        assert!(hits.is_empty());
    }
}
