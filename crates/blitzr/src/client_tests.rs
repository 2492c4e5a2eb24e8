// SPDX-License-Identifier: GPL-3.0-or-later

#[cfg(test)]
mod tests {
    use crate::{
        ArtistExtra, ArtistOptions, BiographyOptions, BlitzrClient, BlitzrError, CityQuery,
        EventQuery, Ident, ProductType, ReleaseQuery, SearchQuery,
    };
    use chrono::NaiveDate;
    use futures::TryStreamExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const API_KEY: &str = "test-key";
    const EMINEM_UUID: &str = "AR89798789798787";

    fn client_for(server: &MockServer) -> BlitzrClient {
        BlitzrClient::builder()
            .api_key(API_KEY)
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    fn artist_body() -> serde_json::Value {
        serde_json::json!({
            "uuid": EMINEM_UUID,
            "name": "Eminem",
            "slug": "eminem",
            "real_name": "Marshall Bruce Mathers III",
            "location": "Detroit, US",
            "tags": ["hip hop", "rap"]
        })
    }

    fn release_body(name: &str) -> serde_json::Value {
        serde_json::json!({
            "uuid": format!("RE-{name}"),
            "name": name,
            "slug": name.to_lowercase().replace(' ', "-"),
            "year": 2014,
            "format": "album",
            "artists": [{ "uuid": EMINEM_UUID, "name": "Eminem", "slug": "eminem" }]
        })
    }

    fn track_body(title: &str) -> serde_json::Value {
        serde_json::json!({
            "uuid": format!("TR-{title}"),
            "title": title,
            "duration": 287,
            "artist": { "name": "Eminem", "slug": "eminem" }
        })
    }

    #[test]
    fn test_missing_api_key_is_a_configuration_error() {
        let result = BlitzrClient::builder().build();
        assert!(matches!(result, Err(BlitzrError::Configuration(_))));

        let result = BlitzrClient::new("  ");
        assert!(matches!(result, Err(BlitzrError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_api_key_is_appended_to_every_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artist/"))
            .and(query_param("key", API_KEY))
            .and(query_param("slug", "eminem"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artist_body()))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let artist = client
            .artist(Ident::slug("eminem"), ArtistOptions::new())
            .await
            .unwrap();

        assert_eq!(artist.name, "Eminem");
        assert_eq!(
            artist.real_name.as_deref(),
            Some("Marshall Bruce Mathers III")
        );
    }

    #[tokio::test]
    async fn test_artist_lookup_by_uuid_with_extras() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artist/"))
            .and(query_param("uuid", EMINEM_UUID))
            .and(query_param("extras", "aliases,last_releases"))
            .and(query_param("extras_limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artist_body()))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let options = ArtistOptions::new()
            .extra(ArtistExtra::Aliases)
            .extra(ArtistExtra::LastReleases)
            .extras_limit(5);
        let artist = client
            .artist(Ident::uuid(EMINEM_UUID), options)
            .await
            .unwrap();

        assert_eq!(artist.uuid.as_deref(), Some(EMINEM_UUID));
    }

    #[tokio::test]
    async fn test_artist_biography_html_format() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artist/biography/"))
            .and(query_param("slug", "eminem"))
            .and(query_param("lang", "en"))
            .and(query_param("format", "html"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "biography": "<p>Marshall Bruce Mathers III...</p>",
                "lang": "en"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let biography = client
            .artist_biography(
                Ident::slug("eminem"),
                BiographyOptions::new().lang("en").html_format(true),
            )
            .await
            .unwrap();

        assert_eq!(biography.lang.as_deref(), Some("en"));
        assert!(biography.biography.unwrap().starts_with("<p>"));
    }

    #[tokio::test]
    async fn test_pager_fetches_until_short_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artist/releases/"))
            .and(query_param("start", "0"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                release_body("The Vinyl LPs"),
                release_body("MNEP"),
            ])))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/artist/releases/"))
            .and(query_param("start", "2"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([release_body("Phenomenal")])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let releases = client
            .artist_releases(Ident::slug("eminem"), ReleaseQuery::new())
            .limit(2)
            .collect()
            .await
            .unwrap();

        assert_eq!(releases.len(), 3);
        assert_eq!(releases[0].name, "The Vinyl LPs");
        assert_eq!(releases[2].name, "Phenomenal");

        // The short second page ends the listing; no third fetch.
        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
    }

    #[tokio::test]
    async fn test_pager_full_then_empty_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tag/artists/"))
            .and(query_param("start", "0"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([artist_body(), artist_body()])))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/tag/artists/"))
            .and(query_param("start", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let mut pager = client.tag_artists("rap").limit(2);

        let first = pager.next_page().await.unwrap();
        assert_eq!(first.map(|page| page.len()), Some(2));

        let second = pager.next_page().await.unwrap();
        assert!(second.is_none());

        // Exhausted pagers answer without another request.
        let third = pager.next_page().await.unwrap();
        assert!(third.is_none());
        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
    }

    #[tokio::test]
    async fn test_pager_empty_listing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artist/bands/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let bands = client
            .artist_bands(Ident::slug("eminem"))
            .collect()
            .await
            .unwrap();

        assert!(bands.is_empty());
    }

    #[tokio::test]
    async fn test_pager_try_next_exhausts_after_short_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/label/artists/"))
            .and(query_param("start", "0"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([artist_body()])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        // Page size 10, one item: one fetch then exhaustion.
        let mut pager = client.label_artists(Ident::slug("shady-records"));
        let first = pager.try_next().await.unwrap();
        assert_eq!(first.map(|artist| artist.name), Some("Eminem".to_string()));
        let second = pager.try_next().await.unwrap();
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn test_pager_into_stream() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tag/releases/"))
            .and(query_param("start", "0"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                release_body("Encore"),
                release_body("Relapse"),
            ])))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/tag/releases/"))
            .and(query_param("start", "2"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([release_body("Recovery")])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let releases: Vec<_> = client
            .tag_releases("rap")
            .limit(2)
            .into_stream()
            .try_collect()
            .await
            .unwrap();

        assert_eq!(releases.len(), 3);
        assert_eq!(releases[2].name, "Recovery");
    }

    #[tokio::test]
    async fn test_search_artists_total_and_results() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/artist/"))
            .and(query_param("query", "emine"))
            .and(query_param("autocomplete", "true"))
            .and(query_param("extras", "true"))
            .and(query_param("start", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total": 80,
                "results": [artist_body()]
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let mut results = client.search_artists(SearchQuery::new("emine").autocomplete(true));

        assert_eq!(results.total().await.unwrap(), 80);

        // total() buffered the first page; the short page also ended the
        // listing, so draining the pager needs no further request.
        let first = results.try_next().await.unwrap();
        assert_eq!(first.map(|artist| artist.name), Some("Eminem".to_string()));
        let second = results.try_next().await.unwrap();
        assert!(second.is_none());

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[tokio::test]
    async fn test_search_pager_pages_through_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/release/"))
            .and(query_param("start", "0"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total": 2,
                "results": [release_body("Encore")]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/search/release/"))
            .and(query_param("start", "1"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total": 2,
                "results": [release_body("Relapse")]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/search/release/"))
            .and(query_param("start", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total": 2,
                "results": []
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let releases = client
            .search_releases(SearchQuery::new("e"))
            .limit(1)
            .collect()
            .await
            .unwrap();

        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].name, "Encore");
        assert_eq!(releases[1].name, "Relapse");
    }

    #[tokio::test]
    async fn test_search_without_extras_is_a_bare_array() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/track/"))
            .and(query_param("extras", "false"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([track_body("Lose Yourself")])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let mut results = client.search_tracks(SearchQuery::new("lose").extras(false));

        let error = results.total().await.unwrap_err();
        assert!(matches!(error, BlitzrError::Configuration(_)));

        let first = results.try_next().await.unwrap();
        assert_eq!(
            first.and_then(|track| track.title),
            Some("Lose Yourself".to_string())
        );
    }

    #[tokio::test]
    async fn test_search_city_parameters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/city/"))
            .and(query_param("query", "detro"))
            .and(query_param("autocomplete", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "name": "Detroit",
                "country_code": "US",
                "latitude": 42.331,
                "longitude": -83.045
            }])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let cities = client
            .search_city(CityQuery::new("detro"))
            .collect()
            .await
            .unwrap();

        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].country_code.as_deref(), Some("US"));
    }

    #[tokio::test]
    async fn test_events_query_serialises_dates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/events/"))
            .and(query_param("country_code", "FR"))
            .and(query_param("date_start", "2017-06-01"))
            .and(query_param("date_end", "2017-06-30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "uuid": "EV123",
                "name": "Eminem live",
                "date": "2017-06-12",
                "venue": { "name": "Stade de France", "city": "Paris", "country_code": "FR" }
            }])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let query = EventQuery::new()
            .country_code("FR")
            .date_start(NaiveDate::from_ymd_opt(2017, 6, 1).unwrap())
            .date_end(NaiveDate::from_ymd_opt(2017, 6, 30).unwrap());
        let events = client.events(query).collect().await.unwrap();

        assert_eq!(events.len(), 1);
        let venue = events[0].venue.as_ref().unwrap();
        assert_eq!(venue.city.as_deref(), Some("Paris"));
    }

    #[tokio::test]
    async fn test_radio_artist_sends_limit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/radio/artist/"))
            .and(query_param("slug", "eminem"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                track_body("Lose Yourself"),
                track_body("Stan"),
                track_body("Mockingbird"),
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let tracks = client.radio_artist(Ident::slug("eminem"), 3).await.unwrap();

        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[1].title.as_deref(), Some("Stan"));
    }

    #[tokio::test]
    async fn test_shop_product_type_is_a_path_segment() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/buy/artist/cd/"))
            .and(query_param("slug", "eminem"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "name": "The Marshall Mathers LP (CD)",
                "url": "https://shop.example/p/123",
                "price": "9.99",
                "currency": "EUR"
            }])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let products = client
            .shop_artist(ProductType::Cd, Ident::slug("eminem"))
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].currency.as_deref(), Some("EUR"));
    }

    #[tokio::test]
    async fn test_harmonia_search_by_source() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/harmonia/searchbysource/"))
            .and(query_param("source_name", "spotify"))
            .and(query_param("source_id", "12345"))
            .and(query_param("strict", "true"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([track_body("Lose Yourself")])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let tracks = client
            .harmonia_search_by_source("spotify", "12345", &[], true)
            .await
            .unwrap();

        assert_eq!(tracks.len(), 1);
    }

    #[tokio::test]
    async fn test_track_sources() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/track/sources/"))
            .and(query_param("uuid", "TR-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "service": "spotify", "id": "12345", "url": "https://open.spotify.com/track/12345" },
                { "service": "deezer", "id": "67890" }
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let sources = client.track_sources("TR-123").await.unwrap();

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].service.as_deref(), Some("spotify"));
        assert!(sources[1].url.is_none());
    }

    #[tokio::test]
    async fn test_client_error_carries_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artist/"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"error":"artist not found"}"#),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let error = client
            .artist(Ident::slug("nobody"), ArtistOptions::new())
            .await
            .unwrap_err();

        match error {
            BlitzrError::Client { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("artist not found"));
            }
            other => panic!("expected client error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_mapping() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/release/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let error = client.release(Ident::slug("mnep")).await.unwrap_err();

        assert!(matches!(error, BlitzrError::Server { status: 503 }));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tag/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let error = client.tag("rap").await.unwrap_err();

        assert!(matches!(error, BlitzrError::InvalidResponse(_)));
    }
}
