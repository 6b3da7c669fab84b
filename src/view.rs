//! Presentation mapping for search results.
//!
//! Kept apart from the search pipeline: the pipeline yields plain
//! [`SearchResult`]s and this module decides how they look.

use crate::search::SearchResult;
use crate::timezone;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Shown when a destination's own image fails to load.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.pexels.com/photos/1285625/pexels-photo-1285625.jpeg?auto=compress&cs=tinysrgb&w=400";

const DEFAULT_ICON: &str = "fas fa-map-marker-alt";
const DEFAULT_COLOR: &str = "#666";

const TYPE_STYLES: &[(&str, &str, &str)] = &[
    ("city", "fas fa-city", "#2c5aa0"),
    ("temple", "fas fa-place-of-worship", "#8b5a2b"),
    ("beach", "fas fa-umbrella-beach", "#20b2aa"),
];

pub fn type_icon(kind: &str) -> &'static str {
    TYPE_STYLES
        .iter()
        .find(|(k, _, _)| *k == kind)
        .map(|(_, icon, _)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

pub fn type_color(kind: &str) -> &'static str {
    TYPE_STYLES
        .iter()
        .find(|(k, _, _)| *k == kind)
        .map(|(_, _, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

/// Everything a result card needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultCard {
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: String,
    pub color: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub image_url: String,
    pub fallback_image_url: String,
    pub time_zone: String,
    /// "hh:mm AM" in the destination's zone.
    pub local_time: String,
}

impl ResultCard {
    pub fn new(result: &SearchResult, now: DateTime<Utc>) -> Self {
        let kind = result.category.as_str();
        Self {
            kind: kind.to_string(),
            icon: type_icon(kind).to_string(),
            color: type_color(kind).to_string(),
            name: result.name.clone(),
            description: result.description.clone(),
            country: result.country.clone(),
            image_url: result.image_url.clone(),
            fallback_image_url: FALLBACK_IMAGE_URL.to_string(),
            time_zone: result.time_zone.clone(),
            local_time: timezone::local_time(&result.time_zone, now),
        }
    }
}

/// Cards for a whole result list, all stamped with the same instant.
pub fn cards(results: &[SearchResult], now: DateTime<Utc>) -> Vec<ResultCard> {
    results.iter().map(|r| ResultCard::new(r, now)).collect()
}

/// Headline and hint for an empty result list.
pub fn no_results_message(query: &str) -> (String, &'static str) {
    (
        format!("No results found for \"{}\"", query),
        "Try searching for \"beaches\", \"temples\", or \"countries\"",
    )
}

/// Plain-text rendering for the terminal.
pub fn render_text(query: &str, cards: &[ResultCard]) -> String {
    let mut out = String::new();

    if cards.is_empty() {
        let (headline, hint) = no_results_message(query);
        out.push_str(&format!("  {}\n  {}\n", headline, hint));
        return out;
    }

    out.push_str(&format!("  {} result(s) for \"{}\"\n", cards.len(), query));
    out.push_str("  ────────────────────────────────────────────\n");
    for card in cards {
        out.push_str(&format!("  [{}] {}\n", card.kind.to_uppercase(), card.name));
        if let Some(country) = &card.country {
            out.push_str(&format!("        {}\n", country));
        }
        if !card.description.is_empty() {
            out.push_str(&format!("        {}\n", card.description));
        }
        out.push_str(&format!("        Local Time: {} ({})\n", card.local_time, card.time_zone));
    }
    out
}
