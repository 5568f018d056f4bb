//! Topology command handler.

use tabled::Tabled;

use netclone_core::{ControllerConfig, Edge, Graph, Node};

use crate::cli::{GlobalOpts, OutputFormat, TopologyArgs};
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct NodeRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Identity")]
    identity: String,
}

impl From<&Node> for NodeRow {
    fn from(n: &Node) -> Self {
        Self {
            label: n.label.clone(),
            kind: n.kind.to_string(),
            identity: n.identity.to_string(),
        }
    }
}

#[derive(Tabled)]
struct EdgeRow {
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Port")]
    source_port: String,
    #[tabled(rename = "Destination")]
    destination: String,
    #[tabled(rename = "Port")]
    destination_port: String,
}

impl From<&Edge> for EdgeRow {
    fn from(e: &Edge) -> Self {
        Self {
            source: e.source_label.clone(),
            source_port: port_cell(e.source_port),
            destination: e.destination_label.clone(),
            destination_port: port_cell(e.destination_port),
        }
    }
}

fn port_cell(port: Option<u32>) -> String {
    port.map_or_else(|| "-".into(), |p| p.to_string())
}

fn edge_id(e: &Edge) -> String {
    format!("{} {}", e.source_label, e.destination_label)
}

// ── Detail view ─────────────────────────────────────────────────────

fn graph_detail(graph: &Graph, color: bool) -> String {
    let switches = graph.switches().count();
    let hosts = graph.hosts().count();

    let mut out = output::heading(
        &format!(
            "{switches} switches, {hosts} hosts, {} edges",
            graph.edges.len()
        ),
        color,
    );

    if !graph.nodes.is_empty() {
        let rows: Vec<NodeRow> = graph.nodes.iter().map(NodeRow::from).collect();
        out.push_str("\n\n");
        out.push_str(&output::render_table(&rows));
    }
    if !graph.edges.is_empty() {
        let rows: Vec<EdgeRow> = graph.edges.iter().map(EdgeRow::from).collect();
        out.push_str("\n\n");
        out.push_str(&output::render_table(&rows));
    }
    out
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &ControllerConfig,
    args: &TopologyArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let graph = netclone_core::clone_topology(controller).await?;
    let fmt = global.output_format();

    let rendered = if args.nodes_only {
        output::render_list(fmt, &graph.nodes, |n| NodeRow::from(n), |n| n.label.clone())?
    } else if args.edges_only {
        output::render_list(fmt, &graph.edges, |e| EdgeRow::from(e), edge_id)?
    } else if matches!(fmt, OutputFormat::Plain) {
        graph
            .nodes
            .iter()
            .map(|n| n.label.clone())
            .chain(graph.edges.iter().map(edge_id))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        let color = output::should_color(&global.color);
        output::render_single(fmt, &graph, |g| graph_detail(g, color), |_| String::new())?
    };

    output::print_output(&rendered, global.quiet);
    Ok(())
}
