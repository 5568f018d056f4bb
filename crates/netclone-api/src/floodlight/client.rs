// Floodlight REST HTTP client
//
// Wraps `reqwest::Client` with controller URL construction, status checking,
// and JSON decoding. Endpoint methods (switches, devices, topology) live in
// separate files as inherent methods to keep this module focused on
// transport mechanics.

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the Floodlight controller's REST API.
///
/// Performs exactly one request per call. Memoization lives one layer up,
/// in [`ControllerSnapshot`](crate::ControllerSnapshot).
#[derive(Debug, Clone)]
pub struct FloodlightClient {
    http: reqwest::Client,
    base_url: Url,
}

impl FloodlightClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// The `base_url` is the REST root of the controller, e.g.
    /// `http://10.0.0.5:8080`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for a REST path such as `/wm/device/`.
    ///
    /// Any path prefix already present on the base URL is preserved.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let full = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        trace!(bytes = body.len(), "response body received");

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
