//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, mut cfg: Config, global: &GlobalOpts) -> Result<(), CliError> {
    match &args.command {
        // Keeps other settings of an existing profile
        ConfigCommand::Init { controller } => {
            netclone_config::parse_controller_url(controller)?;

            let name = cfg.active_profile_name(global.profile.as_deref());
            cfg.profiles
                .entry(name.clone())
                .and_modify(|p| p.controller.clone_from(controller))
                .or_insert_with(|| Profile::new(controller.clone()));
            cfg.default_profile = Some(name.clone());

            config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!(
                    "Saved profile '{name}' to {}",
                    config::config_path().display()
                );
            }
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        // Effective config: file merged with NETCLONE_* env vars
        ConfigCommand::Show => {
            let as_toml = toml::to_string_pretty(&cfg)?;
            let out = output::render_single(
                global.output_format(),
                &cfg,
                |_| as_toml.trim_end().to_owned(),
                |c| c.active_profile_name(global.profile.as_deref()),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
