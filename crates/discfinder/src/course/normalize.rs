//! Raw upstream records into [`CourseItem`]s.
//!
//! Normalization never fails. Each field an upstream record lacks, or carries in an
//! unusable form, is replaced by the documented default. A numeric tag counts only
//! if it parses to a finite number.

use discfinder_sources::{
    Coordinates, GeocodeAddress, GeocodeCandidate, OsmElement, PlaceResult, RawRecord,
};

use super::{
    CourseItem, DEFAULT_DIFFICULTY, DEFAULT_HOLES, DEFAULT_NAME, DEFAULT_RATING, SourceKind,
    UNKNOWN_CITY, map_url,
};

/// OSM address tags consulted for the city, most specific first.
const OSM_CITY_TAGS: [&str; 5] = [
    "addr:city",
    "addr:town",
    "addr:village",
    "addr:suburb",
    "is_in:city",
];

/// OSM tags that may carry the hole count.
const OSM_HOLES_TAGS: [&str; 2] = ["holes", "disc_golf:holes"];

/// Places results at or above both thresholds are flagged as top picks.
const TOP_PICK_MIN_RATING: f64 = 4.5;
const TOP_PICK_MIN_REVIEWS: u32 = 50;

/// Normalize one raw record. `index` is its position in the fetch result and is
/// only used when the record has no identifier of its own.
#[must_use]
pub fn normalize(record: &RawRecord, index: usize) -> CourseItem {
    match record {
        RawRecord::Osm(element) => normalize_osm(element, index),
        RawRecord::Place(place) => normalize_place(place, index),
        RawRecord::Geocode(candidate) => normalize_geocode(candidate, index),
    }
}

/// Normalize a whole fetch result, indexing records by position.
pub fn normalize_all<I>(records: I) -> Vec<CourseItem>
where
    I: IntoIterator,
    I::Item: Into<RawRecord>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| normalize(&record.into(), index))
        .collect()
}

#[must_use]
pub fn normalize_osm(element: &OsmElement, index: usize) -> CourseItem {
    let id = element
        .id
        .map_or_else(|| format!("osm-{index}"), |id| format!("{}/{id}", element.kind));
    let name = non_blank(element.tag("name")).unwrap_or(DEFAULT_NAME);
    let city = OSM_CITY_TAGS
        .iter()
        .find_map(|key| non_blank(element.tag(key)))
        .unwrap_or(UNKNOWN_CITY);
    let holes = OSM_HOLES_TAGS
        .iter()
        .find_map(|key| non_blank(element.tag(key)))
        .map_or(DEFAULT_HOLES, parse_holes);

    build(
        id,
        name,
        city,
        holes,
        DEFAULT_RATING,
        false,
        SourceKind::OpenStreetMap,
        element.position(),
    )
}

#[must_use]
pub fn normalize_place(place: &PlaceResult, index: usize) -> CourseItem {
    let id = non_blank(place.place_id.as_deref())
        .map_or_else(|| format!("place-{index}"), ToString::to_string);
    let name = non_blank(place.name.as_deref()).unwrap_or(DEFAULT_NAME);
    let city = non_blank(place.vicinity.as_deref())
        .and_then(locality_from_vicinity)
        .or_else(|| non_blank(place.formatted_address.as_deref()).and_then(locality_from_address))
        .unwrap_or(UNKNOWN_CITY);
    let rating = place
        .rating
        .filter(|r| r.is_finite() && (0.0..=5.0).contains(r));
    let top_pick = rating.is_some_and(|r| r >= TOP_PICK_MIN_RATING)
        && place.user_ratings_total.unwrap_or(0) >= TOP_PICK_MIN_REVIEWS;

    build(
        id,
        name,
        city,
        DEFAULT_HOLES,
        rating.unwrap_or(DEFAULT_RATING),
        top_pick,
        SourceKind::Places,
        place.position(),
    )
}

#[must_use]
pub fn normalize_geocode(candidate: &GeocodeCandidate, index: usize) -> CourseItem {
    let id = candidate.place_id.map_or_else(
        || format!("nominatim-{index}"),
        |id| format!("nominatim-{id}"),
    );
    let name = non_blank(candidate.name.as_deref())
        .or_else(|| {
            candidate
                .display_name
                .as_deref()
                .and_then(|d| non_blank(d.split(',').next()))
        })
        .unwrap_or(DEFAULT_NAME);
    let city = candidate
        .address
        .as_ref()
        .and_then(GeocodeAddress::locality)
        .map_or(UNKNOWN_CITY, str::trim);

    build(
        id,
        name,
        city,
        DEFAULT_HOLES,
        DEFAULT_RATING,
        false,
        SourceKind::Nominatim,
        candidate.position(),
    )
}

/// Hole count from a tag value.
///
/// Accepts a finite, whole, positive number (`"9"`, `" 27 "`, `"18.0"`). Anything
/// else, including `"0"`, yields [`DEFAULT_HOLES`] so the count stays positive.
#[must_use]
pub fn parse_holes(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 && n >= 1.0 && n <= f64::from(u32::MAX) => {
            n as u32
        }
        _ => DEFAULT_HOLES,
    }
}

#[allow(clippy::too_many_arguments)]
fn build(
    id: String,
    name: &str,
    city: &str,
    holes: u32,
    rating: f64,
    top_pick: bool,
    source: SourceKind,
    position: Option<Coordinates>,
) -> CourseItem {
    CourseItem {
        id,
        name: name.to_string(),
        city: city.to_string(),
        difficulty: DEFAULT_DIFFICULTY,
        rating,
        holes,
        description: source.default_description().to_string(),
        top_pick,
        map_url: map_url(name, city, position),
        lat: position.map(|p| p.lat),
        lon: position.map(|p| p.lon),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// `"13725 Marine Ave, Maryland Heights"` -> `"Maryland Heights"`.
fn locality_from_vicinity(vicinity: &str) -> Option<&str> {
    non_blank(vicinity.rsplit(',').next())
}

/// `"1 Main St, Springfield, IL 62701, USA"` -> `"Springfield"`.
///
/// Street-first addresses put the locality second; shorter addresses are taken whole
/// from their last part.
fn locality_from_address(address: &str) -> Option<&str> {
    let parts: Vec<&str> = address
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    match parts.as_slice() {
        [] => None,
        [only] => Some(*only),
        [_, second, _, ..] => Some(*second),
        [.., last] => Some(*last),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use discfinder_sources::{OsmKind, test_data};

    use super::*;

    fn osm(tags: &[(&str, &str)]) -> OsmElement {
        OsmElement {
            kind: OsmKind::Node,
            id: None,
            lat: None,
            lon: None,
            center: None,
            tags: tags
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_missing_name_gets_placeholder() {
        let item = normalize_osm(&osm(&[("sport", "disc_golf")]), 0);
        assert_eq!(item.name, DEFAULT_NAME);

        let item = normalize_osm(&osm(&[("name", "   ")]), 0);
        assert_eq!(item.name, DEFAULT_NAME);
    }

    #[test]
    fn test_holes_parse_else_default() {
        assert_eq!(normalize_osm(&osm(&[("holes", "9")]), 0).holes, 9);
        assert_eq!(normalize_osm(&osm(&[("holes", "eighteen")]), 0).holes, 18);
        assert_eq!(normalize_osm(&osm(&[]), 0).holes, 18);
        assert_eq!(normalize_osm(&osm(&[("disc_golf:holes", "24")]), 0).holes, 24);
    }

    #[test]
    fn test_parse_holes_edges() {
        assert_eq!(parse_holes(" 27 "), 27);
        assert_eq!(parse_holes("18.0"), 18);
        assert_eq!(parse_holes("9.5"), DEFAULT_HOLES);
        assert_eq!(parse_holes("0"), DEFAULT_HOLES);
        assert_eq!(parse_holes("-3"), DEFAULT_HOLES);
        assert_eq!(parse_holes("inf"), DEFAULT_HOLES);
        assert_eq!(parse_holes("NaN"), DEFAULT_HOLES);
        assert_eq!(parse_holes(""), DEFAULT_HOLES);
    }

    #[test]
    fn test_city_resolution_order() {
        let item = normalize_osm(&osm(&[("addr:town", "Ballwin"), ("addr:city", "Chesterfield")]), 0);
        assert_eq!(item.city, "Chesterfield");

        let item = normalize_osm(&osm(&[("addr:village", "Wildwood")]), 0);
        assert_eq!(item.city, "Wildwood");

        let item = normalize_osm(&osm(&[]), 0);
        assert_eq!(item.city, UNKNOWN_CITY);
    }

    #[test]
    fn test_osm_ids_and_coordinates() {
        let elements = test_data::overpass_elements();
        let items: Vec<_> = elements
            .iter()
            .enumerate()
            .map(|(i, e)| normalize_osm(e, i))
            .collect();

        assert_eq!(items[0].id, "way/48211001");
        assert_eq!(items[0].lat, Some(38.5573));
        assert_eq!(items[0].map_url, "https://www.google.com/maps?q=38.5573,-90.9969");
        assert_eq!(items[1].id, "node/9921002");

        // relation without geometry or name
        let orphan = &items[3];
        assert_eq!(orphan.name, DEFAULT_NAME);
        assert_eq!(orphan.coordinates(), None);
        assert!(orphan.map_url.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert_eq!(orphan.holes, 18);

        for item in &items {
            assert!(!item.top_pick);
            assert_eq!(item.rating, DEFAULT_RATING);
            assert_eq!(item.difficulty, DEFAULT_DIFFICULTY);
            assert_eq!(item.description, "Imported from OpenStreetMap");
        }
    }

    #[test]
    fn test_osm_id_falls_back_to_index() {
        let item = normalize_osm(&osm(&[("name", "Pocket Park")]), 7);
        assert_eq!(item.id, "osm-7");
    }

    #[test]
    fn test_places_normalization() {
        let items = normalize_all(test_data::place_results());

        let creve = &items[0];
        assert_eq!(creve.id, "ChIJ-creve-coeur");
        assert_eq!(creve.city, "Maryland Heights");
        assert_eq!(creve.rating, 4.7);
        assert!(creve.top_pick, "high rating and many reviews");

        let logan = &items[1];
        assert_eq!(logan.city, "Chesterfield");
        assert!(!logan.top_pick, "too few reviews");

        let bare = &items[2];
        assert_eq!(bare.id, "place-2");
        assert_eq!(bare.city, UNKNOWN_CITY);
        assert_eq!(bare.rating, DEFAULT_RATING);
        assert_eq!(bare.description, "Found via Google Places");
        assert_eq!(bare.holes, 18);
    }

    #[test]
    fn test_places_out_of_range_rating() {
        let place = PlaceResult {
            rating: Some(f64::NAN),
            user_ratings_total: Some(1000),
            ..Default::default()
        };
        let item = normalize_place(&place, 0);
        assert_eq!(item.rating, DEFAULT_RATING);
        assert!(!item.top_pick);
    }

    #[test]
    fn test_formatted_address_locality() {
        assert_eq!(
            locality_from_address("1 Main St, Springfield, IL 62701, USA"),
            Some("Springfield")
        );
        assert_eq!(locality_from_address("Springfield, IL"), Some("IL"));
        assert_eq!(locality_from_address("Springfield"), Some("Springfield"));
        assert_eq!(locality_from_address(" , "), None);
    }

    #[test]
    fn test_geocode_normalization() {
        let items = normalize_all(test_data::geocode_candidates());
        assert_eq!(items[0].id, "nominatim-2830127");
        assert_eq!(items[0].name, "St. Louis");
        assert_eq!(items[0].city, "St. Louis");
        assert_eq!(items[1].name, "St. Louis County");
        assert_eq!(items[1].city, UNKNOWN_CITY);
        assert_eq!(items[1].description, "Found via Nominatim");
        assert!(items[1].coordinates().is_some());
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let element = test_data::overpass_elements().remove(2);
        let direct = normalize_osm(&element, 2);
        let dispatched = normalize(&RawRecord::Osm(element), 2);
        assert_eq!(direct, dispatched);
        assert_eq!(dispatched.holes, 9);
        assert_eq!(dispatched.city, "Bridgeton, MO");
    }
}
