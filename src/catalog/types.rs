//! Core catalog types.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Destination bucket. Also the `type` tag carried by search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    City,
    Temple,
    Beach,
}

impl Category {
    /// Evaluation order used by both the matcher and the fallback scan.
    pub const ALL: [Category; 3] = [Category::City, Category::Temple, Category::Beach];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Temple => "temple",
            Self::Beach => "beach",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry as it appears in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Opaque image reference, passed through to the view.
    #[serde(default)]
    pub image_url: String,
}

/// A city together with the name of the country that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub destination: Destination,
    pub country: String,
}

// ─── Wire format ────────────────────────────────────────────────

/// `null` reads as an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Only called for keys that are present: `Some` even when the value is `null`.
fn present_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    null_as_empty(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cities: Vec<Destination>,
}

/// The static document as served.
///
/// Absent keys stay `None`; a key holding `null` reads as an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogDocument {
    #[serde(default, deserialize_with = "present_list")]
    pub countries: Option<Vec<CountryEntry>>,
    #[serde(default, deserialize_with = "present_list")]
    pub temples: Option<Vec<Destination>>,
    #[serde(default, deserialize_with = "present_list")]
    pub beaches: Option<Vec<Destination>>,
    #[serde(flatten)]
    pub other: HashMap<String, IgnoredAny>,
}

impl CatalogDocument {
    /// Number of top-level keys the document carried, known or not.
    pub fn key_count(&self) -> usize {
        [self.countries.is_some(), self.temples.is_some(), self.beaches.is_some()]
            .iter()
            .filter(|present| **present)
            .count()
            + self.other.len()
    }
}

// ─── Catalog ────────────────────────────────────────────────────

/// Loaded destinations, one ordered list per bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    cities: Vec<City>,
    temples: Vec<Destination>,
    beaches: Vec<Destination>,
    /// Top-level keys of the source document. Zero means nothing usable was loaded.
    sections: usize,
}

impl Catalog {
    pub fn new(cities: Vec<City>, temples: Vec<Destination>, beaches: Vec<Destination>) -> Self {
        Self {
            cities,
            temples,
            beaches,
            sections: Category::ALL.len(),
        }
    }

    /// False for a document like `{}` that carried no keys at all.
    pub fn has_sections(&self) -> bool {
        self.sections > 0
    }

    /// Parse a catalog document from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(text)?;
        Ok(Self::from(doc))
    }

    /// Cities in document order (countries first, then cities within each).
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn temples(&self) -> &[Destination] {
        &self.temples
    }

    pub fn beaches(&self) -> &[Destination] {
        &self.beaches
    }

    /// Number of entries in one bucket.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::City => self.cities.len(),
            Category::Temple => self.temples.len(),
            Category::Beach => self.beaches.len(),
        }
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<CatalogDocument> for Catalog {
    fn from(doc: CatalogDocument) -> Self {
        let sections = doc.key_count();
        let cities = doc
            .countries
            .unwrap_or_default()
            .into_iter()
            .flat_map(|country| {
                let owner = country.name;
                country.cities.into_iter().map(move |destination| City {
                    destination,
                    country: owner.clone(),
                })
            })
            .collect();

        Self {
            cities,
            temples: doc.temples.unwrap_or_default(),
            beaches: doc.beaches.unwrap_or_default(),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "countries": [
                { "name": "Japan", "cities": [
                    { "name": "Tokyo, Japan", "description": "Capital.", "imageUrl": "tokyo.jpg" },
                    { "name": "Kyoto, Japan", "description": "Old capital.", "imageUrl": "kyoto.jpg" }
                ]}
            ],
            "temples": [ { "name": "Taj Mahal, India", "description": "Marble.", "imageUrl": "taj.jpg" } ],
            "beaches": []
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.count(Category::City), 2);
        assert_eq!(catalog.cities()[1].country, "Japan");
        assert_eq!(catalog.cities()[1].destination.image_url, "kyoto.jpg");
        assert_eq!(catalog.temples()[0].name, "Taj Mahal, India");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_missing_keys_are_empty() {
        let catalog = Catalog::from_json(r#"{ "temples": [ { "name": "Angkor Wat" } ] }"#).unwrap();
        assert!(catalog.cities().is_empty());
        assert!(catalog.beaches().is_empty());
        assert_eq!(catalog.temples()[0].description, "");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_null_lists_are_empty() {
        let catalog = Catalog::from_json(
            r#"{ "temples": null, "beaches": [ { "name": "Bora Bora" } ], "countries": null }"#,
        )
        .unwrap();
        assert!(catalog.temples().is_empty());
        assert!(catalog.cities().is_empty());
        assert_eq!(catalog.beaches().len(), 1);
        assert!(catalog.has_sections());
    }

    #[test]
    fn test_null_cities_are_empty() {
        let catalog = Catalog::from_json(
            r#"{ "countries": [
                { "name": "Nowhere", "cities": null },
                { "name": "Japan", "cities": [ { "name": "Tokyo, Japan" } ] }
            ] }"#,
        )
        .unwrap();
        assert_eq!(catalog.cities().len(), 1);
        assert_eq!(catalog.cities()[0].country, "Japan");
    }

    #[test]
    fn test_empty_document_has_no_sections() {
        assert!(!Catalog::from_json("{}").unwrap().has_sections());
        assert!(Catalog::from_json(r#"{ "temples": [] }"#).unwrap().has_sections());
        assert!(Catalog::from_json(r#"{ "version": 2 }"#).unwrap().has_sections());
    }

    #[test]
    fn test_country_without_cities() {
        let catalog = Catalog::from_json(r#"{ "countries": [ { "name": "Nowhere" } ] }"#).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Temple).unwrap(), "\"temple\"");
        assert_eq!(Category::Beach.to_string(), "beach");
    }
}
