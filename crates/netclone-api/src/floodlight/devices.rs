// Device manager endpoint
//
// Floodlight's device manager tracks every MAC it has learned, including
// entries with no current attachment point. Filtering happens in core.

use tracing::debug;

use crate::error::Error;
use crate::floodlight::client::FloodlightClient;
use crate::floodlight::models::{DeviceListing, RawDevice};

impl FloodlightClient {
    /// List every known end-host device.
    ///
    /// `GET /wm/device/`
    pub async fn list_devices(&self) -> Result<Vec<RawDevice>, Error> {
        let url = self.api_url("/wm/device/")?;
        debug!("listing devices");
        let listing: DeviceListing = self.get(url).await?;
        Ok(listing.into_devices())
    }
}
