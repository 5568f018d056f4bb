// ── Runtime connection configuration ──
//
// Describes *how* to reach a controller and how to reconstruct its
// snapshot. Never touches disk: `netclone-config` or the CLI builds one
// and hands it in.

use std::time::Duration;

use netclone_api::{TlsMode, TransportConfig};
use url::Url;

use crate::reconstruct::ReconstructOptions;

/// Configuration for cloning a single controller's topology.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Controller REST root (e.g., `http://10.0.0.5:8080`).
    pub url: Url,
    /// TLS verification strategy for HTTPS controllers.
    pub tls: TlsMode,
    /// Per-request deadline.
    pub timeout: Duration,
    /// Reconstruction knobs.
    pub options: ReconstructOptions,
}

impl ControllerConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            tls: TlsMode::default(),
            timeout: Duration::from_secs(30),
            options: ReconstructOptions::default(),
        }
    }

    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: self.tls.clone(),
            timeout: self.timeout,
        }
    }
}
