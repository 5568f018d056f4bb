// netclone-api: Async Rust client for the Floodlight controller REST API

pub mod error;
pub mod floodlight;
pub mod snapshot;
pub mod transport;

pub use error::Error;
pub use floodlight::FloodlightClient;
pub use floodlight::models::{AttachmentPoint, RawDevice, RawLink, RawSwitch, RawTopology};
pub use snapshot::ControllerSnapshot;
pub use transport::{TlsMode, TransportConfig};
