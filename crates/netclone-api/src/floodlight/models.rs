// Floodlight REST API response types
//
// Raw records as reported by the controller. Nothing here is interpreted:
// identifiers stay in their wire formatting and duplicates are kept. Port
// numbers are the one exception, since Floodlight reports them either as
// JSON integers or as decimal strings depending on the OpenFlow version.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

// ── Ports ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum PortRepr {
    Number(u32),
    Text(String),
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match PortRepr::deserialize(deserializer)? {
        PortRepr::Number(n) => Ok(n),
        PortRepr::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid port number: {s:?}"))),
    }
}

// ── Switch ───────────────────────────────────────────────────────────

/// One connected switch from `/wm/core/controller/switches/json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSwitch {
    /// Delimiter-separated hex datapath id, e.g. `00:00:00:00:00:00:00:01`.
    #[serde(rename = "switchDPID")]
    pub datapath_id: String,
}

impl RawSwitch {
    pub fn new(datapath_id: impl Into<String>) -> Self {
        Self {
            datapath_id: datapath_id.into(),
        }
    }
}

// ── Device ───────────────────────────────────────────────────────────

/// A switch port on which a device was observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentPoint {
    #[serde(rename = "switch")]
    pub switch_datapath_id: String,
    #[serde(deserialize_with = "deserialize_port")]
    pub port: u32,
}

impl AttachmentPoint {
    pub fn new(switch_datapath_id: impl Into<String>, port: u32) -> Self {
        Self {
            switch_datapath_id: switch_datapath_id.into(),
            port,
        }
    }
}

/// One end-host device from `/wm/device/`.
///
/// The first MAC address is canonical. A device with an empty
/// `attachment_points` list has no position in the topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireDevice")]
pub struct RawDevice {
    #[serde(rename = "mac")]
    pub mac_addresses: Vec<String>,
    #[serde(rename = "ipv4")]
    pub ipv4_addresses: Vec<String>,
    #[serde(rename = "ipv6")]
    pub ipv6_addresses: Vec<String>,
    #[serde(rename = "attachmentPoint")]
    pub attachment_points: Vec<AttachmentPoint>,
}

impl RawDevice {
    /// A device with a single MAC and no addresses or attachments.
    pub fn new(mac: impl Into<String>) -> Self {
        Self {
            mac_addresses: vec![mac.into()],
            ipv4_addresses: Vec::new(),
            ipv6_addresses: Vec::new(),
            attachment_points: Vec::new(),
        }
    }

    pub fn with_ipv4(mut self, ip: impl Into<String>) -> Self {
        self.ipv4_addresses.push(ip.into());
        self
    }

    pub fn with_ipv6(mut self, ip: impl Into<String>) -> Self {
        self.ipv6_addresses.push(ip.into());
        self
    }

    pub fn with_attachment(mut self, switch_datapath_id: impl Into<String>, port: u32) -> Self {
        self.attachment_points
            .push(AttachmentPoint::new(switch_datapath_id, port));
        self
    }

    /// The canonical (first) MAC address.
    pub fn primary_mac(&self) -> &str {
        self.mac_addresses.first().map_or("", String::as_str)
    }

    pub fn has_address(&self) -> bool {
        !self.ipv4_addresses.is_empty() || !self.ipv6_addresses.is_empty()
    }
}

/// Wire shape of a device before validation. Floodlight omits empty lists
/// on some releases, so every list defaults to empty here.
#[derive(Deserialize)]
struct WireDevice {
    #[serde(default)]
    mac: Vec<String>,
    #[serde(default)]
    ipv4: Vec<String>,
    #[serde(default)]
    ipv6: Vec<String>,
    #[serde(default, rename = "attachmentPoint")]
    attachment_point: Vec<AttachmentPoint>,
}

impl TryFrom<WireDevice> for RawDevice {
    type Error = String;

    fn try_from(wire: WireDevice) -> Result<Self, Self::Error> {
        if wire.mac.is_empty() {
            return Err("device record has no MAC address".into());
        }
        Ok(Self {
            mac_addresses: wire.mac,
            ipv4_addresses: wire.ipv4,
            ipv6_addresses: wire.ipv6,
            attachment_points: wire.attachment_point,
        })
    }
}

/// `/wm/device/` is wrapped in `{ "devices": [...] }` since Floodlight 1.2;
/// older releases return the bare array.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum DeviceListing {
    Wrapped { devices: Vec<RawDevice> },
    Bare(Vec<RawDevice>),
}

impl DeviceListing {
    pub(crate) fn into_devices(self) -> Vec<RawDevice> {
        match self {
            Self::Wrapped { devices } | Self::Bare(devices) => devices,
        }
    }
}

// ── Link ─────────────────────────────────────────────────────────────

/// One inter-switch adjacency from `/wm/topology/links/json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLink {
    #[serde(rename = "src-switch")]
    pub source_datapath_id: String,
    #[serde(rename = "src-port", deserialize_with = "deserialize_port")]
    pub source_port: u32,
    #[serde(rename = "dst-switch")]
    pub destination_datapath_id: String,
    #[serde(rename = "dst-port", deserialize_with = "deserialize_port")]
    pub destination_port: u32,
    /// `internal` or `external`; informational only.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    /// `bidirectional` or `unidirectional`; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

impl RawLink {
    pub fn new(
        source_datapath_id: impl Into<String>,
        source_port: u32,
        destination_datapath_id: impl Into<String>,
        destination_port: u32,
    ) -> Self {
        Self {
            source_datapath_id: source_datapath_id.into(),
            source_port,
            destination_datapath_id: destination_datapath_id.into(),
            destination_port,
            link_type: None,
            direction: None,
        }
    }
}

// ── Snapshot ─────────────────────────────────────────────────────────

/// The three raw collections of one controller snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTopology {
    pub switches: Vec<RawSwitch>,
    pub devices: Vec<RawDevice>,
    pub links: Vec<RawLink>,
}
