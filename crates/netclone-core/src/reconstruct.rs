// ── Topology reconstruction ──
//
// Converts the three raw controller collections into one labeled graph.
// Order of operations: switch nodes, host nodes, resolver over both,
// switch-link edges, host-attachment edges. The first failure aborts; no
// partial graph ever leaves this module.

use std::collections::HashSet;
use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, info};

use netclone_api::{RawDevice, RawLink, RawSwitch, RawTopology};

use crate::error::CoreError;
use crate::model::{Edge, Graph, Identity, Node, NodeKind};
use crate::resolver::Resolver;

/// How host labels are derived.
///
/// The two schemes are not label-compatible with each other; pick one per
/// deployment and keep it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum HostLabeling {
    /// `h<n>`, 1-based over included devices in snapshot order.
    #[default]
    Sequential,
    /// `h<last octet of the first IPv4 address>`.
    Ipv4Suffix,
}

/// Reconstruction knobs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructOptions {
    pub host_labeling: HostLabeling,
    /// Also exclude devices with neither an IPv4 nor an IPv6 address.
    ///
    /// Floodlight's device manager learns switch-internal MACs too; those
    /// carry attachment points but never an address.
    pub require_host_address: bool,
}

/// Reconstruct a graph from one controller snapshot.
pub fn reconstruct(
    topology: &RawTopology,
    options: &ReconstructOptions,
) -> Result<Graph, CoreError> {
    reconstruct_from(
        &topology.switches,
        &topology.devices,
        &topology.links,
        options,
    )
}

/// Reconstruct a graph from the three raw collections.
///
/// Pure and deterministic: the same inputs always yield the same graph.
pub fn reconstruct_from(
    switches: &[RawSwitch],
    devices: &[RawDevice],
    links: &[RawLink],
    options: &ReconstructOptions,
) -> Result<Graph, CoreError> {
    let included: Vec<&RawDevice> = devices
        .iter()
        .filter(|d| is_placeable(d, options))
        .collect();

    let mut nodes = switch_nodes(switches)?;
    nodes.extend(host_nodes(&included, options.host_labeling)?);

    let resolver = Resolver::new(&nodes)?;

    let mut edges = switch_link_edges(links, &resolver)?;
    edges.extend(host_attachment_edges(&included, &resolver)?);

    info!(
        switches = switches.len(),
        hosts = included.len(),
        excluded_devices = devices.len() - included.len(),
        edges = edges.len(),
        "topology reconstructed"
    );

    Ok(Graph { nodes, edges })
}

// ── Nodes ──────────────────────────────────────────────────────────

fn is_placeable(device: &RawDevice, options: &ReconstructOptions) -> bool {
    if device.attachment_points.is_empty() {
        debug!(mac = device.primary_mac(), "skipping device without attachment point");
        return false;
    }
    if options.require_host_address && !device.has_address() {
        debug!(mac = device.primary_mac(), "skipping device without address");
        return false;
    }
    true
}

fn switch_nodes(switches: &[RawSwitch]) -> Result<Vec<Node>, CoreError> {
    let mut seen = HashSet::with_capacity(switches.len());
    let mut nodes = Vec::with_capacity(switches.len());

    for (index, raw) in switches.iter().enumerate() {
        let identity = Identity::new(&raw.datapath_id);
        if !seen.insert(identity.clone()) {
            return Err(CoreError::DuplicateIdentity {
                identity: identity.to_string(),
                kind: NodeKind::Switch,
            });
        }
        nodes.push(Node::switch(format!("s{}", index + 1), identity));
    }

    Ok(nodes)
}

fn host_nodes(devices: &[&RawDevice], labeling: HostLabeling) -> Result<Vec<Node>, CoreError> {
    let mut seen = HashSet::with_capacity(devices.len());
    let mut labels = HashSet::with_capacity(devices.len());
    let mut nodes = Vec::with_capacity(devices.len());

    for (index, device) in devices.iter().enumerate() {
        let identity = Identity::new(device.primary_mac());
        if !seen.insert(identity.clone()) {
            return Err(CoreError::DuplicateIdentity {
                identity: identity.to_string(),
                kind: NodeKind::Host,
            });
        }

        let label = match labeling {
            HostLabeling::Sequential => format!("h{}", index + 1),
            HostLabeling::Ipv4Suffix => ipv4_suffix_label(device, &identity)?,
        };
        if !labels.insert(label.clone()) {
            return Err(CoreError::DuplicateLabel {
                label,
                identity: identity.to_string(),
            });
        }

        nodes.push(Node::host(label, identity));
    }

    Ok(nodes)
}

fn ipv4_suffix_label(device: &RawDevice, identity: &Identity) -> Result<String, CoreError> {
    let octet = device
        .ipv4_addresses
        .first()
        .and_then(|ip| ip.trim().parse::<Ipv4Addr>().ok())
        .map(|ip| ip.octets()[3])
        .ok_or_else(|| CoreError::MissingHostAddress {
            identity: identity.to_string(),
        })?;
    Ok(format!("h{octet}"))
}

// ── Edges ──────────────────────────────────────────────────────────

fn describe_link(link: &RawLink) -> String {
    format!(
        "link {}:{} -> {}:{}",
        link.source_datapath_id,
        link.source_port,
        link.destination_datapath_id,
        link.destination_port
    )
}

fn switch_link_edges(links: &[RawLink], resolver: &Resolver<'_>) -> Result<Vec<Edge>, CoreError> {
    links
        .iter()
        .map(|link| {
            let source = resolver.label(&link.source_datapath_id, NodeKind::Switch, || {
                describe_link(link)
            })?;
            let destination =
                resolver.label(&link.destination_datapath_id, NodeKind::Switch, || {
                    describe_link(link)
                })?;
            Ok(Edge::switch_link(
                source,
                link.source_port,
                destination,
                link.destination_port,
            ))
        })
        .collect()
}

fn host_attachment_edges(
    devices: &[&RawDevice],
    resolver: &Resolver<'_>,
) -> Result<Vec<Edge>, CoreError> {
    let mut edges = Vec::new();

    for device in devices {
        let mac = device.primary_mac();
        let host = resolver.label(mac, NodeKind::Host, || format!("device {mac}"))?;

        for point in &device.attachment_points {
            let switch = resolver.label(&point.switch_datapath_id, NodeKind::Switch, || {
                format!("attachment point of device {mac} (port {})", point.port)
            })?;
            edges.push(Edge::host_attachment(host, switch, point.port));
        }
    }

    Ok(edges)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DPID_1: &str = "00:00:00:00:00:00:00:01";
    const DPID_2: &str = "00:00:00:00:00:00:00:02";
    const DPID_3: &str = "00:00:00:00:00:00:00:03";

    fn run(
        switches: &[RawSwitch],
        devices: &[RawDevice],
        links: &[RawLink],
    ) -> Result<Graph, CoreError> {
        reconstruct_from(switches, devices, links, &ReconstructOptions::default())
    }

    fn labels(graph: &Graph) -> Vec<&str> {
        graph.nodes.iter().map(|n| n.label.as_str()).collect()
    }

    // ── Scenarios ───────────────────────────────────────────────────

    #[test]
    fn two_switches_one_link() {
        let graph = run(
            &[RawSwitch::new(DPID_1), RawSwitch::new(DPID_2)],
            &[],
            &[RawLink::new(DPID_1, 1, DPID_2, 2)],
        )
        .unwrap();

        assert_eq!(
            graph.nodes,
            vec![
                Node::switch("s1", Identity::new("0000000000000001")),
                Node::switch("s2", Identity::new("0000000000000002")),
            ]
        );
        assert_eq!(graph.edges, vec![Edge::switch_link("s1", 1, "s2", 2)]);
    }

    #[test]
    fn host_attached_to_switch() {
        let graph = run(
            &[RawSwitch::new(DPID_1)],
            &[RawDevice::new("AA:BB:CC:DD:EE:FF").with_attachment(DPID_1, 3)],
            &[],
        )
        .unwrap();

        assert_eq!(labels(&graph), ["s1", "h1"]);
        assert_eq!(graph.nodes[1].kind, NodeKind::Host);
        assert_eq!(graph.nodes[1].identity.as_str(), "aabbccddeeff");
        assert_eq!(
            graph.edges,
            vec![Edge {
                source_label: "h1".into(),
                destination_label: "s1".into(),
                source_port: None,
                destination_port: Some(3),
            }]
        );
    }

    #[test]
    fn device_without_attachment_is_excluded() {
        let graph = run(
            &[RawSwitch::new(DPID_1)],
            &[
                RawDevice::new("00:00:00:00:00:0a").with_attachment(DPID_1, 1),
                RawDevice::new("00:00:00:00:00:0b"),
                RawDevice::new("00:00:00:00:00:0c").with_attachment(DPID_1, 2),
            ],
            &[],
        )
        .unwrap();

        assert_eq!(labels(&graph), ["s1", "h1", "h2"]);
        assert_eq!(graph.nodes[2].identity.as_str(), "00000000000c");
        assert!(graph.nodes.iter().all(|n| n.identity.as_str() != "00000000000b"));
        assert_eq!(graph.edges.len(), 2);
    }

    #[test]
    fn link_to_unknown_switch_is_unresolved() {
        let err = run(
            &[RawSwitch::new(DPID_2)],
            &[],
            &[RawLink::new(DPID_1, 1, DPID_2, 2)],
        )
        .unwrap_err();

        match err {
            CoreError::UnresolvedEndpoint { identifier, record } => {
                assert_eq!(identifier, DPID_1);
                assert!(record.contains("link"), "record was {record:?}");
            }
            other => panic!("expected UnresolvedEndpoint, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_switch_is_rejected() {
        let err = run(
            &[
                RawSwitch::new(DPID_1),
                RawSwitch::new("0000000000000001"),
            ],
            &[],
            &[],
        )
        .unwrap_err();

        match err {
            CoreError::DuplicateIdentity { identity, kind } => {
                assert_eq!(identity, "0000000000000001");
                assert_eq!(kind, NodeKind::Switch);
            }
            other => panic!("expected DuplicateIdentity, got {other:?}"),
        }
    }

    // ── Edge cases ──────────────────────────────────────────────────

    #[test]
    fn duplicate_host_is_rejected() {
        let err = run(
            &[RawSwitch::new(DPID_1)],
            &[
                RawDevice::new("aa:bb:cc:dd:ee:ff").with_attachment(DPID_1, 1),
                RawDevice::new("AA:BB:CC:DD:EE:FF").with_attachment(DPID_1, 2),
            ],
            &[],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CoreError::DuplicateIdentity { kind: NodeKind::Host, .. }
        ));
    }

    #[test]
    fn duplicate_mac_on_excluded_device_is_ignored() {
        let graph = run(
            &[RawSwitch::new(DPID_1)],
            &[
                RawDevice::new("aa:bb:cc:dd:ee:ff").with_attachment(DPID_1, 1),
                RawDevice::new("aa:bb:cc:dd:ee:ff"),
            ],
            &[],
        )
        .unwrap();

        assert_eq!(labels(&graph), ["s1", "h1"]);
    }

    #[test]
    fn attachment_to_unknown_switch_is_unresolved() {
        let err = run(
            &[RawSwitch::new(DPID_1)],
            &[RawDevice::new("aa:bb:cc:dd:ee:ff").with_attachment(DPID_3, 4)],
            &[],
        )
        .unwrap_err();

        match err {
            CoreError::UnresolvedEndpoint { identifier, record } => {
                assert_eq!(identifier, DPID_3);
                assert!(record.contains("aa:bb:cc:dd:ee:ff"), "record was {record:?}");
            }
            other => panic!("expected UnresolvedEndpoint, got {other:?}"),
        }
    }

    #[test]
    fn secondary_macs_and_addresses_do_not_affect_identity() {
        let mut device = RawDevice::new("AA:BB:CC:DD:EE:FF")
            .with_ipv4("10.0.0.1")
            .with_ipv4("192.168.1.9")
            .with_attachment(DPID_1, 1);
        device.mac_addresses.push("11:22:33:44:55:66".into());

        let graph = run(&[RawSwitch::new(DPID_1)], &[device], &[]).unwrap();

        assert_eq!(graph.nodes[1].identity.as_str(), "aabbccddeeff");
    }

    #[test]
    fn multi_homed_device_keeps_every_attachment() {
        let graph = run(
            &[
                RawSwitch::new(DPID_1),
                RawSwitch::new(DPID_2),
                RawSwitch::new(DPID_3),
            ],
            &[RawDevice::new("aa:bb:cc:dd:ee:ff")
                .with_attachment(DPID_1, 5)
                .with_attachment(DPID_2, 6)
                .with_attachment(DPID_3, 7)],
            &[],
        )
        .unwrap();

        assert_eq!(
            graph.edges,
            vec![
                Edge::host_attachment("h1", "s1", 5),
                Edge::host_attachment("h1", "s2", 6),
                Edge::host_attachment("h1", "s3", 7),
            ]
        );
    }

    #[test]
    fn empty_snapshot_is_empty_graph() {
        let graph = run(&[], &[], &[]).unwrap();
        assert_eq!(graph, Graph::default());
    }

    // ── Options ─────────────────────────────────────────────────────

    #[test]
    fn ipv4_suffix_labels() {
        let options = ReconstructOptions {
            host_labeling: HostLabeling::Ipv4Suffix,
            ..ReconstructOptions::default()
        };
        let graph = reconstruct_from(
            &[RawSwitch::new(DPID_1)],
            &[
                RawDevice::new("00:00:00:00:00:01")
                    .with_ipv4("10.0.0.17")
                    .with_attachment(DPID_1, 1),
                RawDevice::new("00:00:00:00:00:02")
                    .with_ipv4("10.0.0.4")
                    .with_attachment(DPID_1, 2),
            ],
            &[],
            &options,
        )
        .unwrap();

        assert_eq!(labels(&graph), ["s1", "h17", "h4"]);
        assert_eq!(graph.edges[0].source_label, "h17");
    }

    #[test]
    fn ipv4_suffix_collision_is_rejected() {
        let options = ReconstructOptions {
            host_labeling: HostLabeling::Ipv4Suffix,
            ..ReconstructOptions::default()
        };
        let err = reconstruct_from(
            &[RawSwitch::new(DPID_1)],
            &[
                RawDevice::new("00:00:00:00:00:01")
                    .with_ipv4("10.0.0.5")
                    .with_attachment(DPID_1, 1),
                RawDevice::new("00:00:00:00:00:02")
                    .with_ipv4("10.0.1.5")
                    .with_attachment(DPID_1, 2),
            ],
            &[],
            &options,
        )
        .unwrap_err();

        match err {
            CoreError::DuplicateLabel { label, identity } => {
                assert_eq!(label, "h5");
                assert_eq!(identity, "000000000002");
            }
            other => panic!("expected DuplicateLabel, got {other:?}"),
        }
    }

    #[test]
    fn ipv4_suffix_requires_an_address() {
        let options = ReconstructOptions {
            host_labeling: HostLabeling::Ipv4Suffix,
            ..ReconstructOptions::default()
        };
        let err = reconstruct_from(
            &[RawSwitch::new(DPID_1)],
            &[RawDevice::new("00:00:00:00:00:01").with_attachment(DPID_1, 1)],
            &[],
            &options,
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::MissingHostAddress { .. }));
    }

    #[test]
    fn require_host_address_skips_addressless_devices() {
        let options = ReconstructOptions {
            require_host_address: true,
            ..ReconstructOptions::default()
        };
        let graph = reconstruct_from(
            &[RawSwitch::new(DPID_1)],
            &[
                RawDevice::new("00:00:00:00:00:01").with_attachment(DPID_1, 1),
                RawDevice::new("00:00:00:00:00:02")
                    .with_ipv6("fe80::2")
                    .with_attachment(DPID_1, 2),
            ],
            &[],
            &options,
        )
        .unwrap();

        assert_eq!(labels(&graph), ["s1", "h1"]);
        assert_eq!(graph.nodes[1].identity.as_str(), "000000000002");
    }

    #[test]
    fn host_labeling_parses_kebab_case() {
        assert_eq!(
            "ipv4-suffix".parse::<HostLabeling>().ok(),
            Some(HostLabeling::Ipv4Suffix)
        );
        assert_eq!(HostLabeling::Sequential.to_string(), "sequential");
    }

    // ── Properties ──────────────────────────────────────────────────

    /// A mesh of switches with hosts hanging off each, some unattached.
    fn fixture() -> RawTopology {
        let dpid = |n: u32| format!("00:00:00:00:00:00:00:{n:02X}");
        let switches: Vec<RawSwitch> = (1..=6).map(|n| RawSwitch::new(dpid(n))).collect();
        let links: Vec<RawLink> = (1..6)
            .map(|n| RawLink::new(dpid(n), 1, dpid(n + 1), 2))
            .chain(std::iter::once(RawLink::new(dpid(6), 3, dpid(1), 3)))
            .collect();
        let devices: Vec<RawDevice> = (1..=12)
            .map(|n: u32| {
                let device = RawDevice::new(format!("0A:00:00:00:00:{n:02X}"))
                    .with_ipv4(format!("10.0.0.{n}"));
                match n % 4 {
                    0 => device,
                    1 => device
                        .with_attachment(dpid(n % 6 + 1), 10)
                        .with_attachment(dpid((n + 1) % 6 + 1), 11),
                    _ => device.with_attachment(dpid(n % 6 + 1), 10 + n),
                }
            })
            .collect();
        RawTopology {
            switches,
            devices,
            links,
        }
    }

    #[test]
    fn reconstruction_is_deterministic() {
        let raw = fixture();
        let first = reconstruct(&raw, &ReconstructOptions::default()).unwrap();
        for _ in 0..5 {
            assert_eq!(reconstruct(&raw, &ReconstructOptions::default()).unwrap(), first);
        }
    }

    #[test]
    fn labels_and_identities_are_unique() {
        let graph = reconstruct(&fixture(), &ReconstructOptions::default()).unwrap();

        let labels: HashSet<_> = graph.nodes.iter().map(|n| &n.label).collect();
        let identities: HashSet<_> = graph.nodes.iter().map(|n| &n.identity).collect();

        assert_eq!(labels.len(), graph.nodes.len());
        assert_eq!(identities.len(), graph.nodes.len());
    }

    #[test]
    fn every_edge_resolves_to_a_node() {
        let graph = reconstruct(&fixture(), &ReconstructOptions::default()).unwrap();

        for edge in &graph.edges {
            assert!(graph.node(&edge.source_label).is_some(), "{edge:?}");
            assert!(graph.node(&edge.destination_label).is_some(), "{edge:?}");
        }
    }

    #[test]
    fn attachment_counts_match_input() {
        let raw = fixture();
        let graph = reconstruct(&raw, &ReconstructOptions::default()).unwrap();

        let included: Vec<_> = raw
            .devices
            .iter()
            .filter(|d| !d.attachment_points.is_empty())
            .collect();
        assert_eq!(graph.hosts().count(), included.len());

        for (host, device) in graph.hosts().zip(&included) {
            assert_eq!(host.identity, Identity::new(device.primary_mac()));
            let attachments = graph
                .edges
                .iter()
                .filter(|e| e.is_host_attachment() && e.source_label == host.label)
                .count();
            assert_eq!(attachments, device.attachment_points.len());
        }

        let expected_labels: Vec<String> =
            (1..=included.len()).map(|n| format!("h{n}")).collect();
        let host_labels: Vec<String> = graph.hosts().map(|n| n.label.clone()).collect();
        assert_eq!(host_labels, expected_labels);
    }
}
