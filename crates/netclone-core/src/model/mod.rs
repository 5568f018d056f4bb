// ── Domain model ──
//
// Canonical graph types produced by reconstruction. Everything here is
// created fresh per reconstruction and never mutated afterwards.

pub mod graph;
pub mod identity;

pub use graph::{Edge, Graph, Node, NodeKind};
pub use identity::{Identity, normalize};
