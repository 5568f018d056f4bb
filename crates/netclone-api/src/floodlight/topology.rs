// Topology service endpoint

use tracing::debug;

use crate::error::Error;
use crate::floodlight::client::FloodlightClient;
use crate::floodlight::models::RawLink;

impl FloodlightClient {
    /// List every switch-to-switch link discovered by the topology service.
    ///
    /// `GET /wm/topology/links/json`
    pub async fn list_links(&self) -> Result<Vec<RawLink>, Error> {
        let url = self.api_url("/wm/topology/links/json")?;
        debug!("listing switch links");
        self.get(url).await
    }
}
