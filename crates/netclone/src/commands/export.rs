//! Export command: render the reconstructed topology as a Mininet script.

use netclone_core::{ControllerConfig, MininetScript};

use crate::cli::{ExportArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Split `HOST:PORT` into its parts. IPv6 hosts go in brackets.
fn parse_endpoint(raw: &str) -> Result<(String, u16), CliError> {
    let invalid = |reason: &str| CliError::Validation {
        field: "clone-controller".into(),
        reason: format!("{reason}: {raw}"),
    };

    let (host, port) = raw
        .rsplit_once(':')
        .ok_or_else(|| invalid("expected HOST:PORT"))?;
    let host = host.trim_start_matches('[').trim_end_matches(']');
    if host.is_empty() {
        return Err(invalid("missing host"));
    }
    let port = port.parse::<u16>().map_err(|_| invalid("invalid port"))?;

    Ok((host.to_owned(), port))
}

pub async fn handle(
    controller: &ControllerConfig,
    args: &ExportArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let (host, port) = parse_endpoint(&args.clone_controller)?;

    let graph = netclone_core::clone_topology(controller).await?;
    let script = MininetScript::from_graph(&graph, host, port)?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &script)?;
            if !global.quiet {
                eprintln!(
                    "Wrote {} nodes and {} edges to {}",
                    graph.nodes.len(),
                    graph.edges.len(),
                    path.display()
                );
            }
        }
        None => output::print_output(script.trim_end(), global.quiet),
    }
    Ok(())
}
