// ── Snapshot orchestration ──
//
// Glue between the snapshot client and the pure reconstructor. A fresh
// snapshot is built per call so nothing is cached across reconstructions.

use tracing::{debug, info};

use netclone_api::{ControllerSnapshot, FloodlightClient};

use crate::config::ControllerConfig;
use crate::error::CoreError;
use crate::model::Graph;
use crate::reconstruct::reconstruct;

/// Build a short-lived snapshot for the configured controller.
pub fn open_snapshot(config: &ControllerConfig) -> Result<ControllerSnapshot, CoreError> {
    let client = FloodlightClient::new(config.url.clone(), &config.transport())?;
    Ok(ControllerSnapshot::new(client))
}

/// Fetch one snapshot from the controller and reconstruct its topology.
pub async fn clone_topology(config: &ControllerConfig) -> Result<Graph, CoreError> {
    info!(url = %config.url, "cloning controller topology");

    let snapshot = open_snapshot(config)?;
    let raw = snapshot.fetch_all().await?;

    debug!(
        switches = raw.switches.len(),
        devices = raw.devices.len(),
        links = raw.links.len(),
        "snapshot fetched"
    );

    reconstruct(&raw, &config.options)
}
