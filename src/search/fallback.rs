//! Unfiltered scan used when routing and matching found nothing.

use super::SearchResult;
use crate::catalog::{Catalog, Category};

/// Maximum number of entries a fallback scan returns.
pub const FALLBACK_LIMIT: usize = 6;

/// First [`FALLBACK_LIMIT`] entries across cities, temples, then beaches.
pub fn scan_all(catalog: &Catalog) -> Vec<SearchResult> {
    let cities = catalog.cities().iter().map(SearchResult::from_city);
    let temples = catalog
        .temples()
        .iter()
        .map(|d| SearchResult::from_landmark(d, Category::Temple));
    let beaches = catalog
        .beaches()
        .iter()
        .map(|d| SearchResult::from_landmark(d, Category::Beach));

    cities.chain(temples).chain(beaches).take(FALLBACK_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{City, Destination};

    fn dest(name: &str) -> Destination {
        Destination {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_truncates_to_limit() {
        let catalog = crate::search::fixtures::catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(scan_all(&catalog).len(), FALLBACK_LIMIT);
    }

    #[test]
    fn test_small_catalog_spans_buckets_in_order() {
        let catalog = Catalog::new(
            vec![City { destination: dest("Tokyo, Japan"), country: "Japan".into() }],
            vec![dest("Angkor Wat, Cambodia")],
            vec![dest("Bora Bora"), dest("Copacabana Beach, Brazil")],
        );
        let results = scan_all(&catalog);
        let kinds: Vec<Category> = results.iter().map(|r| r.category).collect();
        assert_eq!(
            kinds,
            [Category::City, Category::Temple, Category::Beach, Category::Beach]
        );
        assert_eq!(results[2].time_zone, "UTC");
        assert_eq!(results[3].time_zone, "America/Sao_Paulo");
    }

    #[test]
    fn test_empty_catalog_yields_nothing() {
        assert!(scan_all(&Catalog::default()).is_empty());
    }
}
