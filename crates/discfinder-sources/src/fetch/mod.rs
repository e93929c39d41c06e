//! HTTP clients for the upstream geodata providers.
//!
//! Every call issues exactly one request and never retries. A non-success HTTP
//! status becomes [`SourceError::Status`], a transport failure
//! [`SourceError::Http`], and a body that does not decode [`SourceError::Decode`].
//! Recovery is the caller's business.

mod nominatim;
mod overpass;
mod places;

pub use nominatim::NominatimClient;
pub use overpass::{OVERPASS_TIMEOUT_SECS, OverpassClient, region_query};
pub use places::PlacesClient;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::{Result, SourceError};

/// Build the shared HTTP client. Nominatim rejects requests without a user agent.
pub fn http_client(user_agent: &str) -> Result<Client> {
    Ok(Client::builder().user_agent(user_agent).build()?)
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    Ok(Url::parse(endpoint.trim_end_matches('/'))?)
}

/// Check the status and decode the body as JSON.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }
    let body = response.bytes().await?;
    debug!(bytes = body.len(), "Response body received");
    Ok(serde_json::from_slice(&body)?)
}
