//! The canonical course record and the conversions that produce it.

use std::{fmt, str::FromStr};

use discfinder_sources::Coordinates;
use url::form_urlencoded::byte_serialize;

mod normalize;
pub mod seed;

pub use normalize::{
    normalize, normalize_all, normalize_geocode, normalize_osm, normalize_place, parse_holes,
};

/// Name given to a course whose upstream record has none.
pub const DEFAULT_NAME: &str = "Unnamed Disc Golf Course";
/// City given to a course whose upstream record has no usable address.
pub const UNKNOWN_CITY: &str = "Unknown";
/// Geodata sources never rate courses; fetched courses get this rating.
pub const DEFAULT_RATING: f64 = 4.0;
pub const DEFAULT_HOLES: u32 = 18;
pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty::Intermediate;

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError(pub String);

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty '{}'", self.0)
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// Where a course record came from.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// The built-in curated list.
    Curated,
    OpenStreetMap,
    Places,
    Nominatim,
}

impl SourceKind {
    /// Description given to a course that arrived without one.
    #[must_use]
    pub const fn default_description(self) -> &'static str {
        match self {
            Self::Curated => "Curated course",
            Self::OpenStreetMap => "Imported from OpenStreetMap",
            Self::Places => "Found via Google Places",
            Self::Nominatim => "Found via Nominatim",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Curated => "curated",
            Self::OpenStreetMap => "openstreetmap",
            Self::Places => "places",
            Self::Nominatim => "nominatim",
        };
        f.write_str(s)
    }
}

/// A disc golf course in source-agnostic form.
///
/// Built fresh by every fetch and never modified afterwards; a new search replaces
/// the whole list.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct CourseItem {
    /// Unique within one fetch result, not across sources.
    pub id: String,
    pub name: String,
    pub city: String,
    pub difficulty: Difficulty,
    /// 0 to 5.
    pub rating: f64,
    pub holes: u32,
    pub description: String,
    /// Editorial recommendation. Always false for geodata results.
    pub top_pick: bool,
    pub map_url: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl CourseItem {
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    /// Key under which two records count as the same course.
    #[must_use]
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.name, &self.city)
    }
}

impl fmt::Display for CourseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} holes, {}, {:.1}",
            self.name, self.city, self.holes, self.difficulty, self.rating
        )
    }
}

/// External map link for a course.
///
/// Coordinates give a pin; without them the link is a text search for
/// `"name, city"`.
#[must_use]
pub fn map_url(name: &str, city: &str, coordinates: Option<Coordinates>) -> String {
    match coordinates {
        Some(c) => format!("https://www.google.com/maps?q={},{}", c.lat, c.lon),
        None => {
            let query: String = byte_serialize(format!("{name}, {city}").as_bytes()).collect();
            format!("https://www.google.com/maps/search/?api=1&query={query}")
        }
    }
}
