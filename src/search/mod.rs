//! Search pipeline.
//!
//! Flow:  query → router (which buckets) → matcher (substring filter)
//!        → fallback scan when nothing matched → time-zone annotated results

pub mod fallback;
pub mod matcher;
pub mod query;
pub mod router;

pub use fallback::{scan_all, FALLBACK_LIMIT};
pub use matcher::match_bucket;
pub use query::Query;
pub use router::KeywordRouter;

use crate::catalog::{Catalog, Category, City, Destination};
use crate::timezone;
use serde::Serialize;
use tracing::debug;

/// A catalog entry annotated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub category: Category,
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Owning country, cities only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// IANA zone, `"UTC"` when unknown. Never empty.
    pub time_zone: String,
}

impl SearchResult {
    pub fn from_city(city: &City) -> Self {
        let d = &city.destination;
        Self {
            category: Category::City,
            name: d.name.clone(),
            description: d.description.clone(),
            image_url: d.image_url.clone(),
            country: Some(city.country.clone()),
            time_zone: timezone::zone_for_country(&city.country).to_string(),
        }
    }

    /// Temples and beaches carry no country; the zone is guessed from the name.
    pub fn from_landmark(destination: &Destination, category: Category) -> Self {
        Self {
            category,
            name: destination.name.clone(),
            description: destination.description.clone(),
            image_url: destination.image_url.clone(),
            country: None,
            time_zone: timezone::zone_for_location(&destination.name).to_string(),
        }
    }
}

/// Run the full pipeline over a loaded catalog.
pub fn perform_search(catalog: &Catalog, router: &KeywordRouter, query: &Query) -> Vec<SearchResult> {
    let buckets = router.route(query);
    debug!(query = %query, ?buckets, "routed query");

    let results: Vec<SearchResult> = buckets
        .iter()
        .flat_map(|category| match_bucket(catalog, *category, query))
        .collect();

    if results.is_empty() {
        debug!(query = %query, "no direct matches, using fallback scan");
        return scan_all(catalog);
    }
    results
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::catalog::Catalog;

    pub const CATALOG_JSON: &str = r#"{
        "countries": [
            { "name": "Australia", "cities": [
                { "name": "Sydney, Australia", "description": "A vibrant city known for its iconic landmarks.", "imageUrl": "sydney.jpg" },
                { "name": "Melbourne, Australia", "description": "A cultural hub famous for its art and coffee.", "imageUrl": "melbourne.jpg" }
            ]},
            { "name": "Japan", "cities": [
                { "name": "Tokyo, Japan", "description": "A city blending tradition and modern technology.", "imageUrl": "tokyo.jpg" },
                { "name": "Kyoto, Japan", "description": "Known for its historic temples and gardens.", "imageUrl": "kyoto.jpg" }
            ]},
            { "name": "Brazil", "cities": [
                { "name": "Rio de Janeiro, Brazil", "description": "A lively city known for its beaches and carnival.", "imageUrl": "rio.jpg" },
                { "name": "São Paulo, Brazil", "description": "The financial hub with diverse culture.", "imageUrl": "saopaulo.jpg" }
            ]}
        ],
        "temples": [
            { "name": "Angkor Wat, Cambodia", "description": "A vast temple complex and UNESCO World Heritage site.", "imageUrl": "angkor.jpg" },
            { "name": "Taj Mahal, India", "description": "An iconic marble mausoleum, a symbol of love.", "imageUrl": "taj.jpg" }
        ],
        "beaches": [
            { "name": "Bora Bora, French Polynesia", "description": "An island with turquoise beach waters and overwater bungalows.", "imageUrl": "bora.jpg" },
            { "name": "Copacabana Beach, Brazil", "description": "A famous beach in Rio de Janeiro.", "imageUrl": "copacabana.jpg" }
        ]
    }"#;

    pub fn catalog() -> Catalog {
        Catalog::from_json(CATALOG_JSON).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(raw: &str) -> Vec<SearchResult> {
        let query = Query::parse(raw).unwrap();
        perform_search(&fixtures::catalog(), &KeywordRouter::default(), &query)
    }

    fn names(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_country_query_returns_its_cities() {
        let results = search("Japan");
        assert_eq!(names(&results), ["Tokyo, Japan", "Kyoto, Japan"]);
        assert!(results.iter().all(|r| r.category == Category::City));
        assert!(results.iter().all(|r| r.time_zone == "Asia/Tokyo"));
        assert_eq!(results[0].country.as_deref(), Some("Japan"));
    }

    #[test]
    fn test_beach_query_stays_in_bucket() {
        let results = search("beach");
        assert_eq!(names(&results), ["Bora Bora, French Polynesia", "Copacabana Beach, Brazil"]);
        assert!(results.iter().all(|r| r.category == Category::Beach));
        assert_eq!(results[0].time_zone, "Pacific/Tahiti");
        assert!(results[0].country.is_none());
    }

    #[test]
    fn test_multi_bucket_query_keeps_group_order() {
        // "brazil" triggers both the city and the beach group
        let results = search("brazil");
        assert_eq!(
            names(&results),
            ["Rio de Janeiro, Brazil", "São Paulo, Brazil", "Copacabana Beach, Brazil"]
        );
        assert_eq!(results[2].category, Category::Beach);
        assert!(results.iter().all(|r| r.time_zone == "America/Sao_Paulo"));
    }

    #[test]
    fn test_temple_query() {
        let results = search("  TEMPLE ");
        assert_eq!(names(&results), ["Angkor Wat, Cambodia"]);
        assert_eq!(results[0].time_zone, "Asia/Phnom_Penh");
    }

    #[test]
    fn test_triggered_but_unmatched_falls_back() {
        // "countries" triggers the city group but no city mentions it
        let results = search("countries");
        assert_eq!(results.len(), FALLBACK_LIMIT);
        assert!(results.iter().all(|r| r.category == Category::City));
    }

    #[test]
    fn test_untriggered_query_falls_back() {
        let results = search("zzz");
        assert_eq!(results.len(), 6);
        assert_eq!(results[0].name, "Sydney, Australia");
    }

    #[test]
    fn test_result_json_shape() {
        let results = search("sydney");
        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["type"], "city");
        assert_eq!(json["imageUrl"], "sydney.jpg");
        assert_eq!(json["timeZone"], "Australia/Sydney");
        assert_eq!(json["country"], "Australia");

        let beach = serde_json::to_value(&search("bora")[0]).unwrap();
        assert!(beach.get("country").is_none());
    }
}
