// Switch endpoint

use tracing::debug;

use crate::error::Error;
use crate::floodlight::client::FloodlightClient;
use crate::floodlight::models::RawSwitch;

impl FloodlightClient {
    /// List every switch currently connected to the controller.
    ///
    /// `GET /wm/core/controller/switches/json`
    pub async fn list_switches(&self) -> Result<Vec<RawSwitch>, Error> {
        let url = self.api_url("/wm/core/controller/switches/json")?;
        debug!("listing switches");
        self.get(url).await
    }
}
