use std::{collections::BTreeMap, fmt};

use serde::Deserialize;

use crate::geo::Coordinates;

/// Top-level Overpass JSON document. Only `elements` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OsmElement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsmKind {
    Node,
    Way,
    Relation,
    #[serde(other)]
    Other,
}

impl fmt::Display for OsmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
            Self::Other => "element",
        };
        f.write_str(s)
    }
}

/// Centre point Overpass attaches to ways and relations with `out center`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OsmCenter {
    pub lat: f64,
    pub lon: f64,
}

/// A single tagged OSM element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OsmElement {
    #[serde(rename = "type")]
    pub kind: OsmKind,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<OsmCenter>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl OsmElement {
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Node coordinates if present, otherwise the `center` of a way/relation.
    #[must_use]
    pub fn position(&self) -> Option<Coordinates> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => self.center.map(|c| Coordinates::new(c.lat, c.lon)),
        }
        .filter(Coordinates::is_finite)
    }
}

/// Tag predicate selecting disc golf features in a region query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    pub key: String,
    pub value: String,
}

impl Facet {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// `leisure=disc_golf`
    #[must_use]
    pub fn leisure() -> Self {
        Self::new("leisure", "disc_golf")
    }

    /// `sport=disc_golf`
    #[must_use]
    pub fn sport() -> Self {
        Self::new("sport", "disc_golf")
    }
}

impl Default for Facet {
    fn default() -> Self {
        Self::sport()
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[\"{}\"=\"{}\"]", self.key, self.value)
    }
}
