//! Time zone lookup for catalog entries and local-time formatting.
//!
//! This is a heuristic bounded to the catalog's own countries, not a
//! geocoder. Anything unrecognised resolves to UTC.

use crate::error::SearchError;
use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// Zone used when nothing matches.
pub const DEFAULT_ZONE: &str = "UTC";

/// Exact country name → zone.
const COUNTRY_ZONES: &[(&str, &str)] = &[
    ("Australia", "Australia/Sydney"),
    ("Japan", "Asia/Tokyo"),
    ("Brazil", "America/Sao_Paulo"),
    ("Cambodia", "Asia/Phnom_Penh"),
    ("India", "Asia/Kolkata"),
    ("French Polynesia", "Pacific/Tahiti"),
];

/// Substrings checked in order against free-text location names.
const LOCATION_ZONES: &[(&str, &str)] = &[
    ("Cambodia", "Asia/Phnom_Penh"),
    ("India", "Asia/Kolkata"),
    ("French Polynesia", "Pacific/Tahiti"),
    ("Brazil", "America/Sao_Paulo"),
];

/// en-US style "hh:mm AM".
const CLOCK_FORMAT: &str = "%I:%M %p";

/// Zone for an exact (case-sensitive) country name.
pub fn zone_for_country(country: &str) -> &'static str {
    COUNTRY_ZONES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, zone)| *zone)
        .unwrap_or(DEFAULT_ZONE)
}

/// Zone for a location string such as "Angkor Wat, Cambodia".
pub fn zone_for_location(location: &str) -> &'static str {
    LOCATION_ZONES
        .iter()
        .find(|(needle, _)| location.contains(needle))
        .map(|(_, zone)| *zone)
        .unwrap_or(DEFAULT_ZONE)
}

/// Format `now` as wall-clock time in `zone`.
pub fn try_local_time(zone: &str, now: DateTime<Utc>) -> Result<String, SearchError> {
    let tz: Tz = zone.parse().map_err(|_| SearchError::TimeFormattingFailed {
        zone: zone.to_string(),
    })?;
    Ok(now.with_timezone(&tz).format(CLOCK_FORMAT).to_string())
}

/// Like [`try_local_time`], but an unknown zone falls back to the system's
/// local time instead of failing.
pub fn local_time(zone: &str, now: DateTime<Utc>) -> String {
    try_local_time(zone, now).unwrap_or_else(|e| {
        debug!(error = %e, "falling back to system local time");
        now.with_timezone(&Local).format(CLOCK_FORMAT).to_string()
    })
}
