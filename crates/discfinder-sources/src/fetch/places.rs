use reqwest::Client;
use tracing::{info, instrument, warn};
use url::Url;

use super::{parse_endpoint, read_json};
use crate::{
    Result, SourceError,
    geo::{BoundingBox, Coordinates, SearchRadius, clamp_provider_radius},
    raw::{PlaceResult, PlacesResponse},
};

/// Client for a Google Places-style web service.
///
/// The API key is sent as the `key` query parameter and never logged.
#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    nearby_url: Url,
    text_url: Url,
    api_key: String,
}

impl std::fmt::Debug for PlacesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesClient")
            .field("nearby_url", &self.nearby_url)
            .field("text_url", &self.text_url)
            .finish_non_exhaustive()
    }
}

impl PlacesClient {
    pub fn new(client: Client, base: &str, api_key: impl Into<String>) -> Result<Self> {
        let url = parse_endpoint(base)?;
        let root = url.as_str().trim_end_matches('/');
        Ok(Self {
            client,
            nearby_url: Url::parse(&format!("{root}/nearbysearch/json"))?,
            text_url: Url::parse(&format!("{root}/textsearch/json"))?,
            api_key: api_key.into(),
        })
    }

    /// Places within `radius` of `center` matching `keyword`.
    ///
    /// The radius is always sent in metres and clamped to the provider window.
    #[instrument(name = "Places nearby search", skip(self), level = "info")]
    pub async fn nearby(
        &self,
        center: Coordinates,
        radius: SearchRadius,
        keyword: &str,
    ) -> Result<Vec<PlaceResult>> {
        let location = center.to_string();
        let radius = format!("{:.0}", clamp_provider_radius(radius.meters()));
        let request = self.client.get(self.nearby_url.clone()).query(&[
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("keyword", keyword),
            ("key", self.api_key.as_str()),
        ]);
        execute(request).await
    }

    /// Free-text search, e.g. `"disc golf in Springfield"`.
    #[instrument(name = "Places text search", skip(self), level = "info")]
    pub async fn text_search(&self, query: &str) -> Result<Vec<PlaceResult>> {
        let request = self
            .client
            .get(self.text_url.clone())
            .query(&[("query", query), ("key", self.api_key.as_str())]);
        execute(request).await
    }

    /// Nearby search covering a map viewport: centre of the box, radius to its corner.
    #[instrument(name = "Places viewport search", skip(self), level = "info")]
    pub async fn viewport(&self, bounds: &BoundingBox, keyword: &str) -> Result<Vec<PlaceResult>> {
        let radius = SearchRadius::Meters(bounds.half_diagonal_meters());
        self.nearby(bounds.center(), radius, keyword).await
    }
}

async fn execute(request: reqwest::RequestBuilder) -> Result<Vec<PlaceResult>> {
    let body: PlacesResponse = read_json(request.send().await?).await?;
    if !body.is_success() {
        warn!(status = %body.status, "Places provider rejected the request");
        return Err(SourceError::ProviderStatus {
            status: body.status,
            message: body.error_message,
        });
    }
    info!(results = body.results.len(), status = %body.status, "Places search complete");
    Ok(body.results)
}
