//! CLI configuration: thin wrapper around `netclone_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--controller, --timeout, --host-labeling, ...).

use std::time::Duration;

use netclone_core::{ControllerConfig, HostLabeling, TlsMode};

use crate::cli::{GlobalOpts, HostLabelingArg, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use netclone_config::{Config, Profile, config_path, load_config, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

impl From<HostLabelingArg> for HostLabeling {
    fn from(arg: HostLabelingArg) -> Self {
        match arg {
            HostLabelingArg::Sequential => Self::Sequential,
            HostLabelingArg::Ipv4Suffix => Self::Ipv4Suffix,
        }
    }
}

/// Output format: the `--output` flag, else `defaults.output` from config.
pub fn resolve_output(
    flag: Option<OutputFormat>,
    cfg: &Config,
) -> Result<OutputFormat, CliError> {
    if let Some(format) = flag {
        return Ok(format);
    }
    <OutputFormat as clap::ValueEnum>::from_str(&cfg.defaults.output, true).map_err(|reason| {
        CliError::Validation {
            field: "defaults.output".into(),
            reason,
        }
    })
}

/// Build a `ControllerConfig` from the config file, profile, and CLI overrides.
///
/// Flag values take priority over the profile. Without a matching profile
/// the controller URL must come from `--controller`.
pub fn resolve_controller_config(
    cfg: &Config,
    global: &GlobalOpts,
) -> Result<ControllerConfig, CliError> {
    let profile_name = cfg.active_profile_name(global.profile.as_deref());

    let mut config = match cfg.profiles.get(&profile_name) {
        Some(profile) => netclone_config::profile_to_controller_config(profile, &cfg.defaults)?,
        None if global.profile.is_some() => {
            let mut available: Vec<_> = cfg.profiles.keys().cloned().collect();
            available.sort();
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            });
        }
        None => {
            let url_str = global.controller.as_deref().ok_or_else(|| CliError::NoConfig {
                path: config_path().display().to_string(),
            })?;
            let mut config =
                ControllerConfig::new(netclone_config::parse_controller_url(url_str)?);
            config.timeout = Duration::from_secs(cfg.defaults.timeout);
            config
        }
    };

    if let Some(ref url_str) = global.controller {
        config.url = netclone_config::parse_controller_url(url_str)?;
    }
    if global.insecure {
        config.tls = TlsMode::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(labeling) = global.host_labeling {
        config.options.host_labeling = labeling.into();
    }
    if let Some(require) = global.require_host_address {
        config.options.require_host_address = require;
    }

    tracing::debug!(url = %config.url, profile = %profile_name, "resolved controller config");
    Ok(config)
}
