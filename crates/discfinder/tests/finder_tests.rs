//! End-to-end searches against local HTTP responders.

#![cfg(feature = "fetch")]

use discfinder::{
    CourseFinder, DeniedLocation, FinderConfigBuilder, FixedLocation, ResultSlot, SourceKind,
    error::FinderError,
    seed_courses,
    sources::{
        BoundingBox, Coordinates, SourceError, test_data,
        testing::{UNUSED_URL, serve},
    },
};
use pretty_assertions::assert_eq;

const ST_LOUIS: Coordinates = Coordinates::new(38.627, -90.199);

/// 111 km is one degree either side of (10, 20).
const ONE_DEGREE_FILTER: &str = "%289%2C19%2C11%2C21%29";

fn overpass_config(overpass_url: &str, nominatim_url: &str) -> FinderConfigBuilder {
    FinderConfigBuilder::overpass()
        .overpass_url(overpass_url)
        .nominatim_url(nominatim_url)
        .fallback_center(Coordinates::new(10.0, 20.0))
        .user_agent("discfinder-tests")
}

fn overpass_finder(overpass_url: &str, nominatim_url: &str) -> CourseFinder {
    CourseFinder::new(overpass_config(overpass_url, nominatim_url).build()).unwrap()
}

fn places_finder(places_url: &str, radius_km: f64) -> CourseFinder {
    let config = FinderConfigBuilder::places("test-key")
        .places_url(places_url)
        .nominatim_url(UNUSED_URL)
        .radius_km(radius_km)
        .user_agent("discfinder-tests")
        .build();
    CourseFinder::new(config).unwrap()
}

#[tokio::test]
async fn test_near_normalizes_and_dedupes() {
    let (url, server) = serve(vec![("200 OK", test_data::OVERPASS_RESPONSE)]).await;
    let finder = overpass_finder(&url, UNUSED_URL);

    let fetched = finder.near(ST_LOUIS).await.unwrap();

    assert_eq!(fetched.source, SourceKind::OpenStreetMap);
    let names: Vec<&str> = fetched.courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Riverside DGC",
            "Carrollton Park DGC",
            "Unnamed Disc Golf Course",
            "Queeny Park DGC",
        ]
    );
    assert!(fetched.courses.iter().all(|c| !c.top_pick));

    let requests = server.await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("sport"));
}

#[tokio::test]
async fn test_fallback_retries_once_at_fallback_center() {
    let (url, server) = serve(vec![
        ("503 Service Unavailable", "{}"),
        ("200 OK", test_data::OVERPASS_RESPONSE),
    ])
    .await;
    let config = overpass_config(&url, UNUSED_URL).radius_km(111.0).build();
    let finder = CourseFinder::new(config).unwrap();

    let fetched = finder.near_with_fallback(ST_LOUIS).await.unwrap();
    assert_eq!(fetched.len(), 4);

    let requests = server.await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(
        requests[1].contains(ONE_DEGREE_FILTER),
        "retry was: {}",
        requests[1]
    );
}

#[tokio::test]
async fn test_fallback_failure_reports_original_error() {
    let (url, server) = serve(vec![
        ("503 Service Unavailable", "{}"),
        ("500 Internal Server Error", "{}"),
    ])
    .await;
    let finder = overpass_finder(&url, UNUSED_URL);

    let err = finder.near_with_fallback(ST_LOUIS).await.unwrap_err();
    assert!(matches!(
        err,
        FinderError::Network(SourceError::Status { status: 503, .. })
    ));
    assert_eq!(server.await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_place_geocodes_then_searches() {
    let (nominatim, geocode_server) = serve(vec![("200 OK", test_data::NOMINATIM_RESPONSE)]).await;
    let (overpass, overpass_server) = serve(vec![("200 OK", test_data::OVERPASS_RESPONSE)]).await;
    let finder = overpass_finder(&overpass, &nominatim);

    let fetched = finder.place("St. Louis").await.unwrap();
    assert_eq!(fetched.len(), 4);

    let geocode = geocode_server.await.unwrap();
    assert!(geocode[0].contains("q=St.+Louis"));
    assert_eq!(overpass_server.await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_place_is_not_found() {
    let (nominatim, _server) = serve(vec![("200 OK", "[]")]).await;
    let finder = overpass_finder(UNUSED_URL, &nominatim);

    let err = finder.place("Atlantis").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Not found: Atlantis");
}

#[tokio::test]
async fn test_place_without_usable_position_is_not_found() {
    let body = r#"[{"place_id": 7, "lat": "", "lon": "-90.19", "display_name": "Nowhere"}]"#;
    let (nominatim, _server) = serve(vec![("200 OK", body)]).await;
    let finder = overpass_finder(UNUSED_URL, &nominatim);

    let err = finder.place("Nowhere").await.unwrap_err();
    assert!(err.is_not_found(), "got {err}");
}

#[tokio::test]
async fn test_denied_location_makes_no_request() {
    let finder = overpass_finder(UNUSED_URL, UNUSED_URL);

    let err = finder.near_location(&DeniedLocation).await.unwrap_err();
    assert!(matches!(err, FinderError::PermissionDenied(_)));
}

#[tokio::test]
async fn test_near_location_uses_reported_position() {
    let (url, server) = serve(vec![("200 OK", test_data::OVERPASS_RESPONSE)]).await;
    let config = overpass_config(&url, UNUSED_URL).radius_km(111.0).build();
    let finder = CourseFinder::new(config).unwrap();

    let here = FixedLocation(Coordinates::new(10.0, 20.0));
    let fetched = finder.near_location(&here).await.unwrap();
    assert_eq!(fetched.len(), 4);

    let requests = server.await.unwrap();
    assert!(requests[0].contains(ONE_DEGREE_FILTER));
}

#[tokio::test]
async fn test_places_provider() {
    let (url, server) = serve(vec![("200 OK", test_data::PLACES_RESPONSE)]).await;
    let finder = places_finder(&url, 10.0);

    let fetched = finder.near(ST_LOUIS).await.unwrap();

    assert_eq!(fetched.source, SourceKind::Places);
    assert_eq!(fetched.len(), 3);
    let top: Vec<&str> = fetched
        .courses
        .iter()
        .filter(|c| c.top_pick)
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(top, ["ChIJ-creve-coeur"]);

    let requests = server.await.unwrap();
    assert!(requests[0].contains("radius=10000&"));
    assert!(requests[0].contains("keyword=disc+golf"));
}

#[tokio::test]
async fn test_places_denied_is_network_error() {
    let (url, _server) = serve(vec![("200 OK", test_data::PLACES_DENIED_RESPONSE)]).await;
    let finder = places_finder(&url, 10.0);

    let err = finder.near(ST_LOUIS).await.unwrap_err();
    assert!(err.is_network());
    assert!(err.to_string().contains("REQUEST_DENIED"));
}

#[tokio::test]
async fn test_slot_keeps_seed_for_empty_viewport() {
    let (url, _server) = serve(vec![(
        "200 OK",
        r#"{"status": "ZERO_RESULTS", "results": []}"#,
    )])
    .await;
    let finder = places_finder(&url, 10.0);
    let slot = ResultSlot::new();

    let bounds = BoundingBox::new(38.5, -90.5, 38.8, -90.0);
    assert!(slot.load(finder.viewport(&bounds)).await.unwrap());
    assert_eq!(slot.visible(), seed_courses().to_vec());
    assert_eq!(slot.source(), SourceKind::Curated);
}

#[tokio::test]
async fn test_slot_drops_superseded_search() {
    let (url, _server) = serve(vec![("200 OK", test_data::OVERPASS_RESPONSE)]).await;
    let finder = overpass_finder(&url, UNUSED_URL);
    let slot = ResultSlot::new();

    let first = slot.begin();
    let fetched = finder.near(ST_LOUIS).await.unwrap();
    let _second = slot.begin();

    assert!(!slot.apply(first, fetched));
    assert_eq!(slot.visible(), seed_courses().to_vec());
}

#[tokio::test]
async fn test_explicit_radius_overrides_config() {
    let (url, server) = serve(vec![
        ("200 OK", test_data::PLACES_RESPONSE),
        ("200 OK", test_data::PLACES_RESPONSE),
    ])
    .await;
    let finder = places_finder(&url, 5.0);
    assert_eq!(finder.config().radius_km, 5.0);

    finder.near(ST_LOUIS).await.unwrap();
    finder.near_within(ST_LOUIS, 20.0).await.unwrap();

    let requests = server.await.unwrap();
    assert!(requests[0].contains("radius=5000&"), "was: {}", requests[0]);
    assert!(requests[1].contains("radius=20000&"), "was: {}", requests[1]);
}

#[tokio::test]
async fn test_bad_radius_is_rejected_before_any_request() {
    let finder = overpass_finder(UNUSED_URL, UNUSED_URL);

    for radius in [-50.0, 0.0, f64::NAN] {
        let err = finder.near_within(ST_LOUIS, radius).await.unwrap_err();
        assert!(
            matches!(err, FinderError::InvalidParameter(_)),
            "radius {radius} gave {err}"
        );
    }
}
