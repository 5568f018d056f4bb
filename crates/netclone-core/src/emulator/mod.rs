// ── Emulator boundary ──
//
// A reconstructed graph is replayed against any emulator topology builder
// as a fixed sequence of calls: every switch, then every host, then every
// edge, each in graph order.

mod mininet;

use std::collections::HashMap;

use crate::error::CoreError;
use crate::model::Graph;

pub use mininet::MininetScript;

/// Switch attributes handed to the emulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchAttrs<'a> {
    /// Normalized datapath id, so the emulated switch keeps the original's.
    pub dpid: &'a str,
}

/// An external topology builder (Mininet `Topo`, a test recorder, ...).
pub trait TopologyBuilder {
    /// Whatever the builder uses to refer to a created node.
    type Handle;

    fn add_switch(&mut self, label: &str, attrs: &SwitchAttrs<'_>) -> Self::Handle;

    fn add_host(&mut self, label: &str) -> Self::Handle;

    fn add_link(
        &mut self,
        a: &Self::Handle,
        b: &Self::Handle,
        port_a: Option<u32>,
        port_b: Option<u32>,
    );
}

impl Graph {
    /// Replay this graph against `builder`.
    ///
    /// Fails only if an edge names a label absent from the node set, which
    /// `reconstruct` never produces.
    pub fn build_into<B: TopologyBuilder>(&self, builder: &mut B) -> Result<(), CoreError> {
        let mut handles: HashMap<&str, B::Handle> = HashMap::with_capacity(self.nodes.len());

        for node in self.switches() {
            let attrs = SwitchAttrs {
                dpid: node.identity.as_str(),
            };
            handles.insert(&node.label, builder.add_switch(&node.label, &attrs));
        }
        for node in self.hosts() {
            handles.insert(&node.label, builder.add_host(&node.label));
        }

        for edge in &self.edges {
            let lookup = |label: &str| {
                handles
                    .get(label)
                    .ok_or_else(|| CoreError::UnresolvedEndpoint {
                        identifier: label.to_owned(),
                        record: format!(
                            "edge {} -> {}",
                            edge.source_label, edge.destination_label
                        ),
                    })
            };
            let a = lookup(&edge.source_label)?;
            let b = lookup(&edge.destination_label)?;
            builder.add_link(a, b, edge.source_port, edge.destination_port);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Edge, Identity, Node};
    use pretty_assertions::assert_eq;

    /// Records every builder call as a string.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl TopologyBuilder for Recorder {
        type Handle = String;

        fn add_switch(&mut self, label: &str, attrs: &SwitchAttrs<'_>) -> String {
            self.calls.push(format!("switch {label} dpid={}", attrs.dpid));
            label.to_uppercase()
        }

        fn add_host(&mut self, label: &str) -> String {
            self.calls.push(format!("host {label}"));
            label.to_uppercase()
        }

        fn add_link(&mut self, a: &String, b: &String, port_a: Option<u32>, port_b: Option<u32>) {
            self.calls
                .push(format!("link {a} {b} {port_a:?} {port_b:?}"));
        }
    }

    #[test]
    fn replays_nodes_then_edges() {
        let graph = Graph {
            nodes: vec![
                Node::switch("s1", Identity::new("00:00:00:00:00:00:00:01")),
                Node::switch("s2", Identity::new("00:00:00:00:00:00:00:02")),
                Node::host("h1", Identity::new("aa:bb:cc:dd:ee:ff")),
            ],
            edges: vec![
                Edge::switch_link("s1", 1, "s2", 2),
                Edge::host_attachment("h1", "s2", 3),
            ],
        };

        let mut recorder = Recorder::default();
        graph.build_into(&mut recorder).unwrap();

        assert_eq!(
            recorder.calls,
            vec![
                "switch s1 dpid=0000000000000001",
                "switch s2 dpid=0000000000000002",
                "host h1",
                "link S1 S2 Some(1) Some(2)",
                "link H1 S2 None Some(3)",
            ]
        );
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let graph = Graph {
            nodes: vec![Node::switch("s1", Identity::new("01"))],
            edges: vec![Edge::switch_link("s1", 1, "s7", 1)],
        };

        let err = graph.build_into(&mut Recorder::default()).unwrap_err();
        assert!(matches!(err, CoreError::UnresolvedEndpoint { identifier, .. } if identifier == "s7"));
    }
}
