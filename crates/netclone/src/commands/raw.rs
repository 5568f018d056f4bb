//! Handlers that show controller collections as reported, before
//! reconstruction.

use tabled::Tabled;

use netclone_core::{ControllerConfig, CoreError, RawDevice, RawLink, RawSwitch};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct SwitchRow {
    #[tabled(rename = "DPID")]
    dpid: String,
}

impl From<&RawSwitch> for SwitchRow {
    fn from(s: &RawSwitch) -> Self {
        Self {
            dpid: s.datapath_id.clone(),
        }
    }
}

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "IPv4")]
    ipv4: String,
    #[tabled(rename = "IPv6")]
    ipv6: String,
    #[tabled(rename = "Attached To")]
    attachments: String,
}

impl From<&RawDevice> for DeviceRow {
    fn from(d: &RawDevice) -> Self {
        let attachments = if d.attachment_points.is_empty() {
            "-".into()
        } else {
            d.attachment_points
                .iter()
                .map(|ap| format!("{}/{}", ap.switch_datapath_id, ap.port))
                .collect::<Vec<_>>()
                .join(", ")
        };

        Self {
            mac: d.mac_addresses.join(", "),
            ipv4: join_or_dash(&d.ipv4_addresses),
            ipv6: join_or_dash(&d.ipv6_addresses),
            attachments,
        }
    }
}

#[derive(Tabled)]
struct LinkRow {
    #[tabled(rename = "Source DPID")]
    source: String,
    #[tabled(rename = "Port")]
    source_port: u32,
    #[tabled(rename = "Destination DPID")]
    destination: String,
    #[tabled(rename = "Port")]
    destination_port: u32,
    #[tabled(rename = "Type")]
    link_type: String,
}

impl From<&RawLink> for LinkRow {
    fn from(l: &RawLink) -> Self {
        Self {
            source: l.source_datapath_id.clone(),
            source_port: l.source_port,
            destination: l.destination_datapath_id.clone(),
            destination_port: l.destination_port,
            link_type: l.link_type.clone().unwrap_or_else(|| "-".into()),
        }
    }
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".into()
    } else {
        values.join(", ")
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn switches(controller: &ControllerConfig, global: &GlobalOpts) -> Result<(), CliError> {
    let snapshot = netclone_core::open_snapshot(controller)?;
    let switches = snapshot
        .fetch_switches()
        .await
        .map_err(CoreError::from)?;

    let out = output::render_list(global.output_format(), switches, |s| SwitchRow::from(s), |s| {
        s.datapath_id.clone()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn devices(controller: &ControllerConfig, global: &GlobalOpts) -> Result<(), CliError> {
    let snapshot = netclone_core::open_snapshot(controller)?;
    let devices = snapshot.fetch_devices().await.map_err(CoreError::from)?;

    let out = output::render_list(global.output_format(), devices, |d| DeviceRow::from(d), |d| {
        d.primary_mac().to_owned()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn links(controller: &ControllerConfig, global: &GlobalOpts) -> Result<(), CliError> {
    let snapshot = netclone_core::open_snapshot(controller)?;
    let links = snapshot.fetch_links().await.map_err(CoreError::from)?;

    let out = output::render_list(global.output_format(), links, |l| LinkRow::from(l), |l| {
        format!(
            "{}/{} {}/{}",
            l.source_datapath_id, l.source_port, l.destination_datapath_id, l.destination_port
        )
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_row_joins_attachments() {
        let device = RawDevice::new("aa:bb:cc:00:00:01")
            .with_ipv4("10.0.0.1")
            .with_attachment("00:00:00:00:00:00:00:01", 1)
            .with_attachment("00:00:00:00:00:00:00:02", 4);

        let row = DeviceRow::from(&device);

        assert_eq!(row.ipv4, "10.0.0.1");
        assert_eq!(row.ipv6, "-");
        assert_eq!(
            row.attachments,
            "00:00:00:00:00:00:00:01/1, 00:00:00:00:00:00:00:02/4"
        );
    }

    #[test]
    fn unattached_device_shows_dash() {
        let row = DeviceRow::from(&RawDevice::new("aa:bb:cc:00:00:09"));
        assert_eq!(row.attachments, "-");
    }
}
