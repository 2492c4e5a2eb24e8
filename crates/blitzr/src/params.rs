// SPDX-License-Identifier: GPL-3.0-or-later

//! Request-side parameter types.
//!
//! Blitzr identifies artists, releases, labels and events either by an
//! opaque uuid or by a slug; [`Ident`] carries whichever the caller has.
//! The option structs follow the builder style used elsewhere in this
//! workspace: construct with `new`/`default`, chain setters, pass by value.

use chrono::NaiveDate;

pub(crate) type Params = Vec<(String, String)>;

/// Identifier for a resource addressed by uuid or slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ident {
    Uuid(String),
    Slug(String),
}

impl Ident {
    pub fn uuid(uuid: impl Into<String>) -> Self {
        Ident::Uuid(uuid.into())
    }

    pub fn slug(slug: impl Into<String>) -> Self {
        Ident::Slug(slug.into())
    }

    pub(crate) fn append_to(&self, params: &mut Params) {
        match self {
            Ident::Uuid(uuid) => params.push(("uuid".into(), uuid.clone())),
            Ident::Slug(slug) => params.push(("slug".into(), slug.clone())),
        }
    }
}

/// Extra sections that can be inlined into an artist lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistExtra {
    Aliases,
    Websites,
    Biography,
    LastReleases,
    NextEvents,
    Relations,
}

impl ArtistExtra {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtistExtra::Aliases => "aliases",
            ArtistExtra::Websites => "websites",
            ArtistExtra::Biography => "biography",
            ArtistExtra::LastReleases => "last_releases",
            ArtistExtra::NextEvents => "next_events",
            ArtistExtra::Relations => "relations",
        }
    }
}

/// Extra sections that can be inlined into a label lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelExtra {
    Biography,
    Websites,
    Artists,
    LastReleases,
    Relations,
}

impl LabelExtra {
    pub fn as_str(self) -> &'static str {
        match self {
            LabelExtra::Biography => "biography",
            LabelExtra::Websites => "websites",
            LabelExtra::Artists => "artists",
            LabelExtra::LastReleases => "last_releases",
            LabelExtra::Relations => "relations",
        }
    }
}

/// Options for [`BlitzrClient::artist`](crate::BlitzrClient::artist).
#[derive(Debug, Clone, Default)]
pub struct ArtistOptions {
    pub extras: Vec<ArtistExtra>,
    /// Limit for list-valued extras (last_releases, next_events; max 10).
    pub extras_limit: Option<u32>,
}

impl ArtistOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extra(mut self, extra: ArtistExtra) -> Self {
        self.extras.push(extra);
        self
    }

    pub fn extras_limit(mut self, limit: u32) -> Self {
        self.extras_limit = Some(limit);
        self
    }

    pub(crate) fn append_to(&self, params: &mut Params) {
        if !self.extras.is_empty() {
            let joined = self
                .extras
                .iter()
                .map(|extra| extra.as_str())
                .collect::<Vec<_>>()
                .join(",");
            params.push(("extras".into(), joined));
        }
        if let Some(limit) = self.extras_limit {
            params.push(("extras_limit".into(), limit.to_string()));
        }
    }
}

/// Options for [`BlitzrClient::label`](crate::BlitzrClient::label).
#[derive(Debug, Clone, Default)]
pub struct LabelOptions {
    pub extras: Vec<LabelExtra>,
    pub extras_limit: Option<u32>,
}

impl LabelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extra(mut self, extra: LabelExtra) -> Self {
        self.extras.push(extra);
        self
    }

    pub fn extras_limit(mut self, limit: u32) -> Self {
        self.extras_limit = Some(limit);
        self
    }

    pub(crate) fn append_to(&self, params: &mut Params) {
        if !self.extras.is_empty() {
            let joined = self
                .extras
                .iter()
                .map(|extra| extra.as_str())
                .collect::<Vec<_>>()
                .join(",");
            params.push(("extras".into(), joined));
        }
        if let Some(limit) = self.extras_limit {
            params.push(("extras_limit".into(), limit.to_string()));
        }
    }
}

/// Options for biography lookups.
#[derive(Debug, Clone, Default)]
pub struct BiographyOptions {
    /// Preferred language, when available (`fr` | `en`). Artist only.
    pub lang: Option<String>,
    /// Request HTML markup instead of plain text.
    pub html_format: bool,
    /// Urlencoded format for links embedded in the text.
    pub url_scheme: Option<String>,
}

impl BiographyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn html_format(mut self, html: bool) -> Self {
        self.html_format = html;
        self
    }

    pub fn url_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.url_scheme = Some(scheme.into());
        self
    }

    pub(crate) fn append_to(&self, params: &mut Params) {
        if let Some(lang) = &self.lang {
            params.push(("lang".into(), lang.clone()));
        }
        // format=html only when requested; plain text is the API default.
        if self.html_format {
            params.push(("format".into(), "html".into()));
        }
        if let Some(scheme) = &self.url_scheme {
            params.push(("url_scheme".into(), scheme.clone()));
        }
    }
}

/// Release type filter (`artist_releases`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    Official,
    Unofficial,
    All,
}

impl ReleaseType {
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseType::Official => "official",
            ReleaseType::Unofficial => "unofficial",
            ReleaseType::All => "all",
        }
    }
}

/// Release format filter (`artist_releases`, `label_releases`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseFormat {
    Album,
    Single,
    Live,
    All,
}

impl ReleaseFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseFormat::Album => "album",
            ReleaseFormat::Single => "single",
            ReleaseFormat::Live => "live",
            ReleaseFormat::All => "all",
        }
    }
}

/// Filters for an artist discography listing.
#[derive(Debug, Clone, Default)]
pub struct ReleaseQuery {
    pub release_type: Option<ReleaseType>,
    pub format: Option<ReleaseFormat>,
    /// Include releases where the artist is credited rather than main.
    pub credited: bool,
}

impl ReleaseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn release_type(mut self, release_type: ReleaseType) -> Self {
        self.release_type = Some(release_type);
        self
    }

    pub fn format(mut self, format: ReleaseFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn credited(mut self, credited: bool) -> Self {
        self.credited = credited;
        self
    }

    pub(crate) fn append_to(&self, params: &mut Params) {
        if let Some(release_type) = self.release_type {
            params.push(("type".into(), release_type.as_str().into()));
        }
        if let Some(format) = self.format {
            params.push(("format".into(), format.as_str().into()));
        }
        params.push(("credited".into(), bool_str(self.credited).into()));
    }
}

/// Event search filters. City and country code are mutually exclusive
/// upstream; latitude/longitude pair with `radius` (km).
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub country_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub venue: Option<String>,
    pub tag: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub radius: Option<u32>,
}

impl EventQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    pub fn geopoint(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn date_start(mut self, date: NaiveDate) -> Self {
        self.date_start = Some(date);
        self
    }

    pub fn date_end(mut self, date: NaiveDate) -> Self {
        self.date_end = Some(date);
        self
    }

    pub fn radius(mut self, radius_km: u32) -> Self {
        self.radius = Some(radius_km);
        self
    }

    pub(crate) fn append_to(&self, params: &mut Params) {
        if let Some(code) = &self.country_code {
            params.push(("country_code".into(), code.clone()));
        }
        if let Some(latitude) = self.latitude {
            params.push(("latitude".into(), latitude.to_string()));
        }
        if let Some(longitude) = self.longitude {
            params.push(("longitude".into(), longitude.to_string()));
        }
        if let Some(city) = &self.city {
            params.push(("city".into(), city.clone()));
        }
        if let Some(venue) = &self.venue {
            params.push(("venue".into(), venue.clone()));
        }
        if let Some(tag) = &self.tag {
            params.push(("tag".into(), tag.clone()));
        }
        if let Some(date) = self.date_start {
            params.push(("date_start".into(), date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.date_end {
            params.push(("date_end".into(), date.format("%Y-%m-%d").to_string()));
        }
        if let Some(radius) = self.radius {
            params.push(("radius".into(), radius.to_string()));
        }
    }
}

/// City search parameters (query or geolocation).
#[derive(Debug, Clone)]
pub struct CityQuery {
    pub query: Option<String>,
    pub autocomplete: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Default for CityQuery {
    fn default() -> Self {
        Self {
            query: None,
            autocomplete: true,
            latitude: None,
            longitude: None,
        }
    }
}

impl CityQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn geopoint(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    pub fn autocomplete(mut self, autocomplete: bool) -> Self {
        self.autocomplete = autocomplete;
        self
    }

    pub(crate) fn append_to(&self, params: &mut Params) {
        if let Some(query) = &self.query {
            params.push(("query".into(), query.clone()));
        }
        params.push(("autocomplete".into(), bool_str(self.autocomplete).into()));
        if let Some(latitude) = self.latitude {
            params.push(("latitude".into(), latitude.to_string()));
        }
        if let Some(longitude) = self.longitude {
            params.push(("longitude".into(), longitude.to_string()));
        }
    }
}

/// Full-text search parameters for artist/label/release/track search.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,
    /// Free-form `field:value` filters, comma-joined upstream.
    pub filters: Vec<String>,
    /// Predictive search on partial queries.
    pub autocomplete: bool,
    /// Ask for the `{total, results}` envelope; required for
    /// [`SearchPager::total`](crate::SearchPager::total).
    pub extras: bool,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: Vec::new(),
            autocomplete: false,
            extras: true,
        }
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filters.push(filter.into());
        self
    }

    pub fn autocomplete(mut self, autocomplete: bool) -> Self {
        self.autocomplete = autocomplete;
        self
    }

    pub fn extras(mut self, extras: bool) -> Self {
        self.extras = extras;
        self
    }

    pub(crate) fn append_to(&self, params: &mut Params) {
        params.push(("query".into(), self.query.clone()));
        if !self.filters.is_empty() {
            params.push(("filters".into(), self.filters.join(",")));
        }
        params.push(("autocomplete".into(), bool_str(self.autocomplete).into()));
        params.push(("extras".into(), bool_str(self.extras).into()));
    }
}

/// Product type for shop endpoints; part of the URL path, not the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    Cd,
    Lp,
    Mp3,
    Merch,
}

impl ProductType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Cd => "cd",
            ProductType::Lp => "lp",
            ProductType::Mp3 => "mp3",
            ProductType::Merch => "merch",
        }
    }
}

pub(crate) fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
