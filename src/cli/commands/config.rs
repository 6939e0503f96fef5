//! Config command implementation.
//!
//! View and create belgianlake configuration files.

use std::path::PathBuf;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{default_config_path, Config};
use crate::error::{LakeError, Result};

/// Run the config command.
pub fn run(cli: &Cli, args: &ConfigArgs, config: &Config) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli, config),
        ConfigAction::Path => show_config_path(cli),
        ConfigAction::Init { force } => init_config(cli, *force),
    }
}

/// Show the effective configuration.
fn show_config(cli: &Cli, config: &Config) -> Result<()> {
    if cli.json {
        let json = serde_json::to_string_pretty(config)?;
        println!("{json}");
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}

/// Path that `--config` or the default location points at.
fn config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => default_config_path(),
    }
}

/// Show configuration file path.
fn show_config_path(cli: &Cli) -> Result<()> {
    let path = config_path(cli)?;
    println!("{}", path.display());
    Ok(())
}

/// Write a default configuration file.
fn init_config(cli: &Cli, force: bool) -> Result<()> {
    let path = config_path(cli)?;
    if path.exists() && !force {
        return Err(LakeError::ConfigError {
            message: format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            ),
        });
    }

    Config::default().save_to(&path)?;
    println!("Created configuration file: {}", path.display());
    Ok(())
}
