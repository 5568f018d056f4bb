// Memoized controller snapshot
//
// A short-lived view of one controller: each collection is fetched at most
// once and then served from memory until `invalidate()` is called. Build a
// fresh snapshot per reconstruction rather than sharing one process-wide.

use tokio::sync::OnceCell;
use tracing::debug;

use crate::error::Error;
use crate::floodlight::FloodlightClient;
use crate::floodlight::models::{RawDevice, RawLink, RawSwitch, RawTopology};

/// Compute-once cache over the three Floodlight collections.
///
/// Concurrent callers of the same accessor share a single in-flight request.
/// A failed fetch leaves its cell empty, so the next call issues a new
/// request; nothing is retried automatically.
#[derive(Debug)]
pub struct ControllerSnapshot {
    client: FloodlightClient,
    switches: OnceCell<Vec<RawSwitch>>,
    devices: OnceCell<Vec<RawDevice>>,
    links: OnceCell<Vec<RawLink>>,
}

impl ControllerSnapshot {
    pub fn new(client: FloodlightClient) -> Self {
        Self {
            client,
            switches: OnceCell::new(),
            devices: OnceCell::new(),
            links: OnceCell::new(),
        }
    }

    pub async fn fetch_switches(&self) -> Result<&[RawSwitch], Error> {
        self.switches
            .get_or_try_init(|| self.client.list_switches())
            .await
            .map(Vec::as_slice)
    }

    pub async fn fetch_devices(&self) -> Result<&[RawDevice], Error> {
        self.devices
            .get_or_try_init(|| self.client.list_devices())
            .await
            .map(Vec::as_slice)
    }

    pub async fn fetch_links(&self) -> Result<&[RawLink], Error> {
        self.links
            .get_or_try_init(|| self.client.list_links())
            .await
            .map(Vec::as_slice)
    }

    /// Fetch all three collections concurrently.
    ///
    /// Fails with the first error encountered; collections that did arrive
    /// stay cached.
    pub async fn fetch_all(&self) -> Result<RawTopology, Error> {
        let (switches, devices, links) = tokio::try_join!(
            self.fetch_switches(),
            self.fetch_devices(),
            self.fetch_links()
        )?;

        debug!(
            switches = switches.len(),
            devices = devices.len(),
            links = links.len(),
            "controller snapshot complete"
        );

        Ok(RawTopology {
            switches: switches.to_vec(),
            devices: devices.to_vec(),
            links: links.to_vec(),
        })
    }

    /// Drop every cached collection so the next accessor call refetches.
    pub fn invalidate(&mut self) {
        self.switches.take();
        self.devices.take();
        self.links.take();
    }
}
