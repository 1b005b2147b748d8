//! Config command - inspect and scaffold configuration files.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use invcheck_core::CheckerConfig;

use super::load_config;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a default config file
    Init {
        /// Destination path
        #[arg(default_value = "invcheck.json")]
        path: PathBuf,
    },

    /// Print the active configuration
    Show,
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Init { path } => {
            if path.exists() {
                anyhow::bail!("Config file already exists: {}", path.display());
            }
            CheckerConfig::default().save(Path::new(&path))?;
            println!(
                "{} Default config written to {}",
                style("✓").green(),
                path.display()
            );
            Ok(())
        }
        ConfigCommand::Show => {
            let config = load_config(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}
