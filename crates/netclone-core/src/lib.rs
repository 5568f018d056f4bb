//! Topology reconstruction for SDN controller snapshots.
//!
//! Turns the three loosely-correlated collections a Floodlight controller
//! reports (switches, end-host devices, inter-switch links) into one
//! consistent labeled graph that an emulator can instantiate:
//!
//! - **[`reconstruct()`]**: Pure transformation from a [`RawTopology`] to a
//!   [`Graph`]. Every identifier is routed through [`Identity`], every
//!   endpoint is resolved through a [`Resolver`], and any inconsistency aborts
//!   the whole reconstruction instead of yielding a partial graph.
//!
//! - **[`clone_topology()`]**: Fetches a fresh [`ControllerSnapshot`] per
//!   [`ControllerConfig`] and reconstructs it.
//!
//! - **[`TopologyBuilder`]**: The emulator boundary. [`Graph::build_into`]
//!   replays a graph as `add_switch` / `add_host` / `add_link` calls;
//!   [`MininetScript`] renders those calls as a runnable Mininet script.
//!
//! [`RawTopology`]: netclone_api::RawTopology
//! [`ControllerSnapshot`]: netclone_api::ControllerSnapshot

pub mod config;
pub mod controller;
pub mod emulator;
pub mod error;
pub mod model;
pub mod reconstruct;
pub mod resolver;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::ControllerConfig;
pub use controller::{clone_topology, open_snapshot};
pub use emulator::{MininetScript, SwitchAttrs, TopologyBuilder};
pub use error::CoreError;
pub use model::{Edge, Graph, Identity, Node, NodeKind, normalize};
pub use reconstruct::{HostLabeling, ReconstructOptions, reconstruct, reconstruct_from};
pub use resolver::Resolver;

// Raw snapshot types, so consumers need not depend on the API crate directly.
pub use netclone_api::{AttachmentPoint, RawDevice, RawLink, RawSwitch, RawTopology, TlsMode};
