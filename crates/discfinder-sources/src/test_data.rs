//! Canned provider responses for tests.
//!
//! The bodies mirror what each service really returns, including the awkward parts:
//! duplicate ways and nodes for one course, elements without names, tags that are not
//! numbers and records with no usable geometry.

use crate::raw::{GeocodeCandidate, OsmElement, OverpassResponse, PlaceResult, PlacesResponse};

/// Overpass answer for the St. Louis area.
pub const OVERPASS_RESPONSE: &str = r#"{
  "version": 0.6,
  "generator": "Overpass API",
  "elements": [
    {
      "type": "way",
      "id": 48211001,
      "center": {"lat": 38.5573, "lon": -90.9969},
      "tags": {"sport": "disc_golf", "name": "Riverside DGC", "addr:city": "Washington, MO", "holes": "18"}
    },
    {
      "type": "node",
      "id": 9921002,
      "lat": 38.5569,
      "lon": -90.9981,
      "tags": {"sport": "disc_golf", "name": "Riverside DGC", "addr:city": "Washington, MO"}
    },
    {
      "type": "way",
      "id": 48211003,
      "center": {"lat": 38.7428, "lon": -90.3784},
      "tags": {"sport": "disc_golf", "name": "Carrollton Park DGC", "addr:town": "Bridgeton, MO", "holes": "9"}
    },
    {
      "type": "relation",
      "id": 771004,
      "tags": {"sport": "disc_golf", "holes": "eighteen"}
    },
    {
      "type": "node",
      "id": 9921005,
      "lat": 38.6531,
      "lon": -90.5126,
      "tags": {"sport": "disc_golf", "name": "Queeny Park DGC", "addr:village": "Ballwin", "disc_golf:holes": "24"}
    }
  ]
}"#;

/// Places nearby-search answer.
pub const PLACES_RESPONSE: &str = r#"{
  "html_attributions": [],
  "status": "OK",
  "results": [
    {
      "place_id": "ChIJ-creve-coeur",
      "name": "Creve Coeur Lake Park Disc Golf",
      "vicinity": "13725 Marine Ave, Maryland Heights",
      "geometry": {"location": {"lat": 38.7163, "lng": -90.4887}},
      "rating": 4.7,
      "user_ratings_total": 412
    },
    {
      "place_id": "ChIJ-logan",
      "name": "Logan University Disc Golf",
      "vicinity": "Chesterfield",
      "geometry": {"location": {"lat": 38.6459, "lng": -90.5313}},
      "rating": 4.6,
      "user_ratings_total": 12
    },
    {
      "name": "Backyard Baskets"
    }
  ]
}"#;

/// Places answer with a provider-level failure.
pub const PLACES_DENIED_RESPONSE: &str =
    r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid.", "results": []}"#;

/// Nominatim answer for `"St. Louis"`.
pub const NOMINATIM_RESPONSE: &str = r#"[
  {
    "place_id": 2830127,
    "lat": "38.6280278",
    "lon": "-90.1910154",
    "display_name": "St. Louis, Missouri, United States",
    "name": "St. Louis",
    "address": {"city": "St. Louis", "state": "Missouri"}
  },
  {
    "place_id": 2830128,
    "lat": "38.6361",
    "lon": "-90.3254",
    "display_name": "St. Louis County, Missouri, United States"
  }
]"#;

#[must_use]
pub fn overpass_elements() -> Vec<OsmElement> {
    serde_json::from_str::<OverpassResponse>(OVERPASS_RESPONSE)
        .expect("overpass fixture is valid JSON")
        .elements
}

#[must_use]
pub fn place_results() -> Vec<PlaceResult> {
    serde_json::from_str::<PlacesResponse>(PLACES_RESPONSE)
        .expect("places fixture is valid JSON")
        .results
}

#[must_use]
pub fn geocode_candidates() -> Vec<GeocodeCandidate> {
    serde_json::from_str(NOMINATIM_RESPONSE).expect("nominatim fixture is valid JSON")
}
