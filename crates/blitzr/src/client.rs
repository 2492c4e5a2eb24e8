// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::{BlitzrError, Result};
use crate::models::{
    Artist, Biography, City, Country, Event, Label, Product, Release, ServiceSource, Summary, Tag,
    Track, Website,
};
use crate::pager::{Pager, SearchPager};
use crate::params::{
    bool_str, ArtistOptions, BiographyOptions, CityQuery, EventQuery, Ident, LabelOptions, Params,
    ProductType, ReleaseFormat, ReleaseQuery, SearchQuery,
};
use crate::rate_limiter::RateLimiter;

const BLITZR_API_BASE: &str = "https://api.blitzr.com";
const USER_AGENT: &str = concat!(
    "blitzr-rs/",
    env!("CARGO_PKG_VERSION"),
    " ( https://api.blitzr.com/doc )"
);

/// Blitzr API client.
///
/// Every call is a GET against the Blitzr REST API with the configured
/// API key appended as the `key` query parameter.
#[derive(Debug, Clone)]
pub struct BlitzrClient {
    client: Client,
    api_key: String,
    base_url: String,
    rate_limiter: Option<RateLimiter>,
}

impl BlitzrClient {
    /// Create a client with default settings and the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> BlitzrClientBuilder {
        BlitzrClientBuilder::default()
    }

    // ---- Artists ----------------------------------------------------

    /// Look up an artist by uuid or slug.
    ///
    /// # Example
    /// ```no_run
    /// # use blitzr::{BlitzrClient, Ident, ArtistOptions};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = BlitzrClient::new("my-api-key")?;
    /// let artist = client
    ///     .artist(Ident::slug("eminem"), ArtistOptions::new())
    ///     .await?;
    /// println!("{:?}", artist.real_name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn artist(&self, id: Ident, options: ArtistOptions) -> Result<Artist> {
        let mut params = Params::new();
        id.append_to(&mut params);
        options.append_to(&mut params);
        self.get("artist/", &params).await
    }

    /// List the known aliases of an artist.
    pub async fn artist_aliases(&self, id: Ident) -> Result<Vec<Artist>> {
        let mut params = Params::new();
        id.append_to(&mut params);
        self.get("artist/aliases/", &params).await
    }

    /// Page through the bands an artist has been a member of.
    pub fn artist_bands(&self, id: Ident) -> Pager<'_, Artist> {
        let mut params = Params::new();
        id.append_to(&mut params);
        Pager::new(self, "artist/bands/", params)
    }

    /// Fetch an artist's biography.
    pub async fn artist_biography(&self, id: Ident, options: BiographyOptions) -> Result<Biography> {
        let mut params = Params::new();
        id.append_to(&mut params);
        options.append_to(&mut params);
        self.get("artist/biography/", &params).await
    }

    /// Page through an artist's upcoming events.
    pub fn artist_events(&self, id: Ident) -> Pager<'_, Event> {
        let mut params = Params::new();
        id.append_to(&mut params);
        Pager::new(self, "artist/events/", params)
    }

    /// Page through the members of a band.
    pub fn artist_members(&self, id: Ident) -> Pager<'_, Artist> {
        let mut params = Params::new();
        id.append_to(&mut params);
        Pager::new(self, "artist/members/", params)
    }

    /// Page through artists related to this one.
    pub fn artist_related(&self, id: Ident) -> Pager<'_, Artist> {
        let mut params = Params::new();
        id.append_to(&mut params);
        Pager::new(self, "artist/related/", params)
    }

    /// Page through an artist's discography.
    ///
    /// # Example
    /// ```no_run
    /// # use blitzr::{BlitzrClient, Ident, ReleaseQuery, ReleaseFormat};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = BlitzrClient::new("my-api-key")?;
    /// let mut releases = client.artist_releases(
    ///     Ident::slug("eminem"),
    ///     ReleaseQuery::new().format(ReleaseFormat::Album),
    /// );
    /// while let Some(release) = releases.try_next().await? {
    ///     println!("{}", release.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn artist_releases(&self, id: Ident, query: ReleaseQuery) -> Pager<'_, Release> {
        let mut params = Params::new();
        id.append_to(&mut params);
        query.append_to(&mut params);
        Pager::new(self, "artist/releases/", params)
    }

    /// Page through artists similar to this one.
    ///
    /// `filters` are free-form `field:value` pairs (available: location).
    pub fn artist_similar(&self, id: Ident, filters: &[String]) -> Pager<'_, Artist> {
        let mut params = Params::new();
        id.append_to(&mut params);
        if !filters.is_empty() {
            params.push(("filters".into(), filters.join(",")));
        }
        Pager::new(self, "artist/similars/", params)
    }

    /// Fetch an artist's one-paragraph summary.
    pub async fn artist_summary(&self, id: Ident) -> Result<Summary> {
        let mut params = Params::new();
        id.append_to(&mut params);
        self.get("artist/summary/", &params).await
    }

    /// List an artist's official websites.
    pub async fn artist_websites(&self, id: Ident) -> Result<Vec<Website>> {
        let mut params = Params::new();
        id.append_to(&mut params);
        self.get("artist/websites/", &params).await
    }

    // ---- Events -----------------------------------------------------

    /// Look up an event by uuid or slug.
    pub async fn event(&self, id: Ident) -> Result<Event> {
        let mut params = Params::new();
        id.append_to(&mut params);
        self.get("event/", &params).await
    }

    /// Page through events matching geographic and date filters.
    pub fn events(&self, query: EventQuery) -> Pager<'_, Event> {
        let mut params = Params::new();
        query.append_to(&mut params);
        Pager::new(self, "events/", params)
    }

    // ---- Harmonia ---------------------------------------------------

    /// Resolve an artist from an external service identifier.
    pub async fn harmonia_artist(&self, service_name: &str, service_id: &str) -> Result<Artist> {
        self.get("harmonia/artist/", &service_params(service_name, service_id))
            .await
    }

    /// Resolve a release from an external service identifier.
    pub async fn harmonia_release(&self, service_name: &str, service_id: &str) -> Result<Release> {
        self.get("harmonia/release/", &service_params(service_name, service_id))
            .await
    }

    /// Resolve a label from an external service identifier.
    pub async fn harmonia_label(&self, service_name: &str, service_id: &str) -> Result<Label> {
        self.get("harmonia/label/", &service_params(service_name, service_id))
            .await
    }

    /// Match tracks from an external source identifier.
    ///
    /// With `strict` the API guesses the single best result; without it
    /// all matches come back.
    pub async fn harmonia_search_by_source(
        &self,
        source_name: &str,
        source_id: &str,
        source_filters: &[String],
        strict: bool,
    ) -> Result<Vec<Track>> {
        let mut params = vec![
            ("source_name".to_string(), source_name.to_string()),
            ("source_id".to_string(), source_id.to_string()),
        ];
        if !source_filters.is_empty() {
            params.push(("source_filters".into(), source_filters.join(",")));
        }
        params.push(("strict".into(), bool_str(strict).into()));
        self.get("harmonia/searchbysource/", &params).await
    }

    // ---- Labels -----------------------------------------------------

    /// Look up a label by uuid or slug.
    pub async fn label(&self, id: Ident, options: LabelOptions) -> Result<Label> {
        let mut params = Params::new();
        id.append_to(&mut params);
        options.append_to(&mut params);
        self.get("label/", &params).await
    }

    /// Page through the artists signed to a label.
    pub fn label_artists(&self, id: Ident) -> Pager<'_, Artist> {
        let mut params = Params::new();
        id.append_to(&mut params);
        Pager::new(self, "label/artists/", params)
    }

    /// Fetch a label's biography. The `lang` option is ignored upstream.
    pub async fn label_biography(&self, id: Ident, options: BiographyOptions) -> Result<Biography> {
        let mut params = Params::new();
        id.append_to(&mut params);
        options.append_to(&mut params);
        self.get("label/biography/", &params).await
    }

    /// Page through a label's releases.
    pub fn label_releases(&self, id: Ident, format: Option<ReleaseFormat>) -> Pager<'_, Release> {
        let mut params = Params::new();
        id.append_to(&mut params);
        if let Some(format) = format {
            params.push(("format".into(), format.as_str().into()));
        }
        Pager::new(self, "label/releases/", params)
    }

    /// Page through labels similar to this one.
    pub fn label_similar(&self, id: Ident) -> Pager<'_, Label> {
        let mut params = Params::new();
        id.append_to(&mut params);
        Pager::new(self, "label/similars/", params)
    }

    /// List a label's official websites.
    pub async fn label_websites(&self, id: Ident) -> Result<Vec<Website>> {
        let mut params = Params::new();
        id.append_to(&mut params);
        self.get("label/websites/", &params).await
    }

    // ---- Radio ------------------------------------------------------

    /// Tracks drawn from an artist's discography.
    pub async fn radio_artist(&self, id: Ident, limit: u32) -> Result<Vec<Track>> {
        let mut params = Params::new();
        id.append_to(&mut params);
        params.push(("limit".into(), limit.to_string()));
        self.get("radio/artist/", &params).await
    }

    /// Tracks drawn from the discographies of similar artists.
    pub async fn radio_artist_similar(&self, id: Ident, limit: u32) -> Result<Vec<Track>> {
        let mut params = Params::new();
        id.append_to(&mut params);
        params.push(("limit".into(), limit.to_string()));
        self.get("radio/artist/similar/", &params).await
    }

    /// Tracks drawn from a label's catalog.
    pub async fn radio_label(&self, id: Ident, limit: u32) -> Result<Vec<Track>> {
        let mut params = Params::new();
        id.append_to(&mut params);
        params.push(("limit".into(), limit.to_string()));
        self.get("radio/label/", &params).await
    }

    /// Tracks drawn from a tag's catalog.
    pub async fn radio_tag(&self, slug: &str, limit: u32) -> Result<Vec<Track>> {
        let params = vec![
            ("slug".to_string(), slug.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        self.get("radio/tag/", &params).await
    }

    // ---- Releases ---------------------------------------------------

    /// Look up a release by uuid or slug.
    pub async fn release(&self, id: Ident) -> Result<Release> {
        let mut params = Params::new();
        id.append_to(&mut params);
        self.get("release/", &params).await
    }

    /// List the release's identifiers in external services.
    pub async fn release_sources(&self, id: Ident) -> Result<Vec<ServiceSource>> {
        let mut params = Params::new();
        id.append_to(&mut params);
        self.get("release/sources/", &params).await
    }

    // ---- Search -----------------------------------------------------

    /// Search artists by query and filters.
    ///
    /// # Example
    /// ```no_run
    /// # use blitzr::{BlitzrClient, SearchQuery};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = BlitzrClient::new("my-api-key")?;
    /// let mut results = client.search_artists(SearchQuery::new("emine").autocomplete(true));
    /// println!("{} matches", results.total().await?);
    /// while let Some(artist) = results.try_next().await? {
    ///     println!("{}", artist.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn search_artists(&self, query: SearchQuery) -> SearchPager<'_, Artist> {
        SearchPager::new(self, "search/artist/", query)
    }

    /// Search labels by query and filters.
    pub fn search_labels(&self, query: SearchQuery) -> SearchPager<'_, Label> {
        SearchPager::new(self, "search/label/", query)
    }

    /// Search releases by query and filters.
    pub fn search_releases(&self, query: SearchQuery) -> SearchPager<'_, Release> {
        SearchPager::new(self, "search/release/", query)
    }

    /// Search tracks by query and filters. Autocomplete is not supported
    /// upstream for tracks and is ignored.
    pub fn search_tracks(&self, query: SearchQuery) -> SearchPager<'_, Track> {
        SearchPager::new(self, "search/track/", query)
    }

    /// Page through cities matching a query or geolocation.
    pub fn search_city(&self, query: CityQuery) -> Pager<'_, City> {
        let mut params = Params::new();
        query.append_to(&mut params);
        Pager::new(self, "search/city/", params)
    }

    /// Page through countries matching a country code.
    pub fn search_country(&self, country_code: &str) -> Pager<'_, Country> {
        let params = vec![("country_code".to_string(), country_code.to_string())];
        Pager::new(self, "search/country/", params)
    }

    // ---- Shop -------------------------------------------------------

    /// Products related to an artist (cd, lp, mp3 or merch).
    pub async fn shop_artist(&self, product: ProductType, id: Ident) -> Result<Vec<Product>> {
        let mut params = Params::new();
        id.append_to(&mut params);
        self.get(&format!("buy/artist/{}/", product.as_str()), &params)
            .await
    }

    /// Products related to a label (cd, lp or merch).
    pub async fn shop_label(&self, product: ProductType, id: Ident) -> Result<Vec<Product>> {
        let mut params = Params::new();
        id.append_to(&mut params);
        self.get(&format!("buy/label/{}/", product.as_str()), &params)
            .await
    }

    /// Products related to a release (cd, lp or mp3).
    pub async fn shop_release(&self, product: ProductType, id: Ident) -> Result<Vec<Product>> {
        let mut params = Params::new();
        id.append_to(&mut params);
        self.get(&format!("buy/release/{}/", product.as_str()), &params)
            .await
    }

    /// Products related to a track.
    pub async fn shop_track(&self, uuid: &str) -> Result<Vec<Product>> {
        let params = vec![("uuid".to_string(), uuid.to_string())];
        self.get("buy/track/", &params).await
    }

    // ---- Tags -------------------------------------------------------

    /// Look up a tag by slug.
    pub async fn tag(&self, slug: &str) -> Result<Tag> {
        let params = vec![("slug".to_string(), slug.to_string())];
        self.get("tag/", &params).await
    }

    /// Page through the artists carrying a tag.
    pub fn tag_artists(&self, slug: &str) -> Pager<'_, Artist> {
        let params = vec![("slug".to_string(), slug.to_string())];
        Pager::new(self, "tag/artists/", params)
    }

    /// Page through the releases carrying a tag.
    pub fn tag_releases(&self, slug: &str) -> Pager<'_, Release> {
        let params = vec![("slug".to_string(), slug.to_string())];
        Pager::new(self, "tag/releases/", params)
    }

    // ---- Tracks -----------------------------------------------------

    /// Look up a track by uuid.
    pub async fn track(&self, uuid: &str) -> Result<Track> {
        let params = vec![("uuid".to_string(), uuid.to_string())];
        self.get("track/", &params).await
    }

    /// List the track's identifiers in external services.
    pub async fn track_sources(&self, uuid: &str) -> Result<Vec<ServiceSource>> {
        let params = vec![("uuid".to_string(), uuid.to_string())];
        self.get("track/sources/", &params).await
    }

    /// Internal method to perform a GET with the API key appended.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.acquire().await;
        }

        let mut url = Url::parse(&format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint
        ))
        .map_err(|e| BlitzrError::InvalidResponse(e.to_string()))?;

        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
            pairs.append_pair("key", &self.api_key);
        }

        trace!(target: "blitzr", "GET {}", endpoint);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!(target: "blitzr", endpoint, "response status: {}", status);

        if status.is_server_error() {
            return Err(BlitzrError::Server {
                status: status.as_u16(),
            });
        }

        if status.is_client_error() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BlitzrError::Client {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| BlitzrError::InvalidResponse(format!("failed to parse response: {}", e)))
    }
}

fn service_params(service_name: &str, service_id: &str) -> Params {
    vec![
        ("service_name".to_string(), service_name.to_string()),
        ("service_id".to_string(), service_id.to_string()),
    ]
}

/// Builder for configuring a Blitzr client.
#[derive(Debug, Default)]
pub struct BlitzrClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    rate_limit_interval: Option<Duration>,
}

impl BlitzrClientBuilder {
    /// Set the API key. Required.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set request timeout duration (default 30s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enforce a minimum interval between requests. Off by default.
    pub fn rate_limit_interval(mut self, interval: Duration) -> Self {
        self.rate_limit_interval = Some(interval);
        self
    }

    /// Build the Blitzr client.
    pub fn build(self) -> Result<BlitzrClient> {
        let api_key = match self.api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                return Err(BlitzrError::Configuration("api_key is missing".to_string()));
            }
        };

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(Duration::from_secs(30)))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(BlitzrClient {
            client,
            api_key,
            base_url: self
                .base_url
                .unwrap_or_else(|| BLITZR_API_BASE.to_string()),
            rate_limiter: self.rate_limit_interval.map(RateLimiter::new),
        })
    }
}
