// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Artist (or band) information from Blitzr.
///
/// Blitzr identifiers are opaque strings (e.g. `AR89798789798787`), not
/// RFC 4122 uuids, and are absent from some autocomplete payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    #[serde(default)]
    pub uuid: Option<String>,
    /// Artist name.
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Civil name, when distinct from the stage name.
    #[serde(default)]
    pub real_name: Option<String>,
    /// Location string (city/country) as returned by the API.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Release (album, single, live recording...) information from Blitzr.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Release {
    #[serde(default)]
    pub uuid: Option<String>,
    /// Release title.
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    /// Format summary (e.g. "album", "single", "live").
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Minimal artist reference embedded in other resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistRef {
    #[serde(default)]
    pub uuid: Option<String>,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Minimal release reference embedded in other resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseRef {
    #[serde(default)]
    pub uuid: Option<String>,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Track information from Blitzr.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: Option<u32>,
    /// Position on the release.
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub artist: Option<ArtistRef>,
    #[serde(default)]
    pub release: Option<ReleaseRef>,
}

/// Label information from Blitzr.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Label {
    #[serde(default)]
    pub uuid: Option<String>,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Live event information from Blitzr.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    /// Event date (`YYYY-MM-DD`, sometimes with a time component).
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Editorial biography for an artist or label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Biography {
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    /// Provenance of the text, when Blitzr aggregates it from elsewhere.
    #[serde(default)]
    pub source: Option<String>,
}

/// Short editorial summary for an artist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    #[serde(default)]
    pub summary: Option<String>,
}

/// External website link attached to an artist or label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Website {
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
}

/// Equivalence of a Blitzr resource in an external service catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceSource {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Purchasable product (cd, lp, mp3, merch) from a shop partner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub merchant: Option<String>,
}

/// Genre/scene tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Search response envelope returned when `extras` is enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// Total number of matches across all pages.
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}
