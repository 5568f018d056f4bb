// ── Graph domain types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::identity::Identity;

/// Node kind, carried explicitly so consumers never parse labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    Switch,
    Host,
}

/// A reconstructed vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// `s<n>` for switches, `h<n>` for hosts. Unique within one graph.
    pub label: String,
    pub kind: NodeKind,
    /// Normalized datapath id (switch) or canonical MAC (host).
    pub identity: Identity,
}

impl Node {
    pub fn switch(label: impl Into<String>, identity: Identity) -> Self {
        Self {
            label: label.into(),
            kind: NodeKind::Switch,
            identity,
        }
    }

    pub fn host(label: impl Into<String>, identity: Identity) -> Self {
        Self {
            label: label.into(),
            kind: NodeKind::Host,
            identity,
        }
    }

    pub fn is_switch(&self) -> bool {
        matches!(self.kind, NodeKind::Switch)
    }

    pub fn is_host(&self) -> bool {
        matches!(self.kind, NodeKind::Host)
    }
}

/// A reconstructed link between two labeled nodes.
///
/// Switch links carry both ports. Host attachments have no source port:
/// the host side of the link is left for the emulator to number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source_label: String,
    pub destination_label: String,
    pub source_port: Option<u32>,
    pub destination_port: Option<u32>,
}

impl Edge {
    pub fn switch_link(
        source_label: impl Into<String>,
        source_port: u32,
        destination_label: impl Into<String>,
        destination_port: u32,
    ) -> Self {
        Self {
            source_label: source_label.into(),
            destination_label: destination_label.into(),
            source_port: Some(source_port),
            destination_port: Some(destination_port),
        }
    }

    pub fn host_attachment(
        host_label: impl Into<String>,
        switch_label: impl Into<String>,
        switch_port: u32,
    ) -> Self {
        Self {
            source_label: host_label.into(),
            destination_label: switch_label.into(),
            source_port: None,
            destination_port: Some(switch_port),
        }
    }

    pub fn is_host_attachment(&self) -> bool {
        self.source_port.is_none()
    }
}

/// The reconstructed topology: switches first, then hosts, each in
/// snapshot order; switch links first, then host attachments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn node(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.label == label)
    }

    pub fn switches(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_switch())
    }

    pub fn hosts(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_host())
    }

    /// Labels adjacent to `label`, in edge order. Parallel links repeat.
    pub fn neighbours(&self, label: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter_map(|e| {
                if e.source_label == label {
                    Some(e.destination_label.as_str())
                } else if e.destination_label == label {
                    Some(e.source_label.as_str())
                } else {
                    None
                }
            })
            .collect()
    }
}
