use std::fmt::Write as _;

use reqwest::Client;
use tracing::{info, instrument};
use url::Url;

use super::{parse_endpoint, read_json};
use crate::{
    Result,
    geo::BoundingBox,
    raw::{Facet, OsmElement, OverpassResponse},
};

/// Server-side timeout declared in every query. The client does not enforce it.
pub const OVERPASS_TIMEOUT_SECS: u32 = 25;

/// Overpass QL selecting every node, way and relation matching `facet` inside `bbox`.
///
/// Ways and relations come back with a `center` so every element has a position.
#[must_use]
pub fn region_query(bbox: &BoundingBox, facet: &Facet) -> String {
    let filter = bbox.overpass_filter();
    let mut query = format!("[out:json][timeout:{OVERPASS_TIMEOUT_SECS}];(");
    for kind in ["node", "way", "relation"] {
        let _ = write!(query, "{kind}{facet}{filter};");
    }
    query.push_str(");out center tags;");
    query
}

/// Client for an Overpass API interpreter endpoint.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Client,
    endpoint: Url,
}

impl OverpassClient {
    pub fn new(client: Client, endpoint: &str) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: parse_endpoint(endpoint)?,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch every element matching `facet` inside `bbox`.
    #[instrument(name = "Overpass region query", skip(self), level = "info")]
    pub async fn query_region(&self, bbox: &BoundingBox, facet: &Facet) -> Result<Vec<OsmElement>> {
        let query = region_query(bbox, facet);
        let response = self
            .client
            .post(self.endpoint.clone())
            .form(&[("data", query.as_str())])
            .send()
            .await?;
        let body: OverpassResponse = read_json(response).await?;
        info!(elements = body.elements.len(), "Overpass query complete");
        Ok(body.elements)
    }
}
