//! Default public endpoints.

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_PLACES_URL: &str = "https://maps.googleapis.com/maps/api/place";

pub const DEFAULT_USER_AGENT: &str = concat!("discfinder/", env!("CARGO_PKG_VERSION"));
