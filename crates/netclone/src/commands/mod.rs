//! Command dispatch: bridges CLI args -> core operations -> output formatting.

pub mod config_cmd;
pub mod export;
pub mod raw;
pub mod topology;

use netclone_core::ControllerConfig;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a controller-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    controller: &ControllerConfig,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Topology(args) => topology::handle(controller, &args, global).await,
        Command::Switches => raw::switches(controller, global).await,
        Command::Devices => raw::devices(controller, global).await,
        Command::Links => raw::links(controller, global).await,
        Command::Export(args) => export::handle(controller, &args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
