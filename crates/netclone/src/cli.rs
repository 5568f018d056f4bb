//! Clap derive structures for the `netclone` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// netclone -- clone a live SDN topology into an emulator
#[derive(Debug, Parser)]
#[command(
    name = "netclone",
    version,
    about = "Clone a live SDN controller topology into a Mininet emulation",
    long_about = "Reads switches, end-host devices, and inter-switch links from a\n\
        Floodlight controller's REST API and reconstructs an equivalent\n\
        topology of switches, hosts, and links.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller profile to use
    #[arg(long, short = 'p', env = "NETCLONE_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Controller REST URL, e.g. http://10.0.0.5:8080 (overrides profile)
    #[arg(long, short = 'c', env = "NETCLONE_CONTROLLER", global = true)]
    pub controller: Option<String>,

    /// Output format (defaults to `defaults.output` from config, else table)
    #[arg(long, short = 'o', env = "NETCLONE_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "NETCLONE_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "NETCLONE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Host labeling scheme (overrides profile)
    #[arg(long, global = true)]
    pub host_labeling: Option<HostLabelingArg>,

    /// Exclude devices without any IPv4/IPv6 address (overrides profile)
    #[arg(long, global = true, action = clap::ArgAction::Set)]
    pub require_host_address: Option<bool>,
}

impl GlobalOpts {
    /// The selected output format. Resolved against config before dispatch.
    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or(OutputFormat::Table)
    }
}

// ── Value Enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HostLabelingArg {
    /// h1, h2, ... over attached devices in controller order
    Sequential,
    /// h<last octet of the host's first IPv4 address>
    Ipv4Suffix,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reconstruct and show the controller topology
    #[command(alias = "topo", alias = "t")]
    Topology(TopologyArgs),

    /// List switches as reported by the controller
    #[command(alias = "sw")]
    Switches,

    /// List end-host devices as reported by the controller
    #[command(alias = "dev")]
    Devices,

    /// List inter-switch links as reported by the controller
    Links,

    /// Write a Mininet script that recreates the topology
    Export(ExportArgs),

    /// Inspect configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Subcommand Arguments ─────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TopologyArgs {
    /// Show only nodes (no edges)
    #[arg(long, conflicts_with = "edges_only")]
    pub nodes_only: bool,

    /// Show only edges (no nodes)
    #[arg(long)]
    pub edges_only: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// OpenFlow controller the emulated switches connect to (HOST:PORT)
    #[arg(long, default_value = "127.0.0.1:6653")]
    pub clone_controller: String,

    /// Write the script to a file instead of stdout
    #[arg(long, short = 'O')]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Add or replace a controller profile and make it the default
    Init {
        /// Controller REST URL, e.g. http://10.0.0.5:8080
        controller: String,
    },
    /// Print the configuration file path
    Path,
    /// Show the effective configuration
    Show,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
