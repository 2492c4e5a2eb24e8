// SPDX-License-Identifier: GPL-3.0-or-later

//! Client for the Blitzr music-metadata API.
//!
//! Construct a [`BlitzrClient`] with an API key and call its per-resource
//! methods: artists, releases, tracks, labels, events, tags, search,
//! radio and shop. Single-resource lookups return typed structs; list
//! endpoints return a [`Pager`] (or [`SearchPager`] for search, which
//! also knows the total match count) that fetches pages lazily.
//!
//! ```no_run
//! use blitzr::{ArtistOptions, BlitzrClient, Ident, ReleaseQuery};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BlitzrClient::new("my-api-key")?;
//!
//! let eminem = client
//!     .artist(Ident::slug("eminem"), ArtistOptions::new())
//!     .await?;
//! println!("{:?}", eminem.real_name);
//!
//! let mut releases = client.artist_releases(Ident::slug("eminem"), ReleaseQuery::new());
//! while let Some(release) = releases.try_next().await? {
//!     println!("{}", release.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
#[cfg(test)]
mod client_tests;
pub mod error;
pub mod models;
pub mod pager;
pub mod params;
pub mod rate_limiter;

pub use client::{BlitzrClient, BlitzrClientBuilder};
pub use error::{BlitzrError, Result};
pub use models::{
    Artist, ArtistRef, Biography, City, Country, Event, Label, Product, Release, ReleaseRef,
    SearchResults, ServiceSource, Summary, Tag, Track, Venue, Website,
};
pub use pager::{Pager, SearchPager};
pub use params::{
    ArtistExtra, ArtistOptions, BiographyOptions, CityQuery, EventQuery, Ident, LabelExtra,
    LabelOptions, ProductType, ReleaseFormat, ReleaseQuery, ReleaseType, SearchQuery,
};
