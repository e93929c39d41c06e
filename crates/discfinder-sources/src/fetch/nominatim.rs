use reqwest::Client;
use tracing::{info, instrument, warn};
use url::Url;

use super::{parse_endpoint, read_json};
use crate::{Result, SourceError, geo::Coordinates, raw::GeocodeCandidate};

/// Client for a Nominatim `/search` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    endpoint: Url,
}

impl NominatimClient {
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

    /// Up to `limit` candidates for free text, best match first.
    #[instrument(name = "Nominatim search", skip(self), level = "info")]
    pub async fn search(&self, text: &str, limit: usize) -> Result<Vec<GeocodeCandidate>> {
        let limit = limit.max(1).to_string();
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("q", text),
                ("format", "json"),
                ("limit", limit.as_str()),
                ("addressdetails", "1"),
            ])
            .send()
            .await?;
        let candidates: Vec<GeocodeCandidate> = read_json(response).await?;
        info!(candidates = candidates.len(), "Nominatim search complete");
        Ok(candidates)
    }

    /// Resolve a place name to the coordinates of its single best match.
    ///
    /// Only the first candidate is considered; there is no disambiguation.
    #[instrument(name = "Geocode place name", skip(self), level = "info")]
    pub async fn geocode(&self, text: &str) -> Result<Coordinates> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SourceError::NotFound(String::new()));
        }

        let candidates = self.search(text, 1).await?;
        let Some(best) = candidates.into_iter().next() else {
            warn!(text, "No geocode candidates");
            return Err(SourceError::NotFound(text.to_string()));
        };

        best.position()
            .ok_or(SourceError::InvalidCoordinates {
                lat: best.lat,
                lon: best.lon,
            })
    }
}
