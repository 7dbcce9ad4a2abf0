//! Config subcommand handlers.

use std::path::PathBuf;

use netinv_config::{Config, config_path, load_config, save_config, to_toml};
use netinv_core::{CreateDeviceRequest, sample_devices};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = load_config(global.config.as_deref())?;
            print!("{}", to_toml(&cfg)?);
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", target_path(global).display());
            Ok(())
        }

        ConfigCommand::Init {
            force,
            with_samples,
        } => {
            let path = target_path(global);
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let cfg = initial_config(with_samples);
            save_config(&cfg, &path)?;
            if !global.quiet {
                eprintln!("Wrote {}", path.display());
            }
            Ok(())
        }
    }
}

fn target_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

/// Defaults, optionally with the sample devices written out as seed entries.
fn initial_config(with_samples: bool) -> Config {
    let mut cfg = Config::default();
    if with_samples {
        cfg.inventory.devices = sample_devices()
            .iter()
            .map(CreateDeviceRequest::from)
            .collect();
    }
    cfg
}
