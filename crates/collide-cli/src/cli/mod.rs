//! CLI for collide.

mod commands;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use collide_core::config::{self, CollideConfig};
use std::path::PathBuf;

use commands::{run_once, run_serve, run_show_config};

/// Top-level CLI: compare word lists against a reference list.
#[derive(Debug, Parser)]
#[command(name = "collide")]
#[command(about = "collide: count words shared between candidate lists and a reference list", long_about = None)]
pub struct Cli {
    /// Read configuration from this TOML file instead of the XDG config path.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Serve the collision counts over HTTP (GET /).
    Serve {
        /// Listen on this port instead of the configured one.
        #[arg(long)]
        port: Option<u16>,
        /// Log to stderr instead of the state-dir log file.
        #[arg(long)]
        log_stderr: bool,
    },

    /// Compute the collision counts once and print the JSON to stdout.
    Once,

    /// Print the configuration path and effective values.
    Config,
}

impl Cli {
    pub fn wants_stderr_logging(&self) -> bool {
        matches!(self.command, CliCommand::Serve { log_stderr: true, .. })
    }

    fn load_config(&self) -> Result<CollideConfig> {
        match &self.config {
            Some(path) => config::load_from(path),
            None => config::load_or_init(),
        }
    }

    pub async fn run(self) -> Result<()> {
        let cfg = self.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Serve { port, .. } => run_serve(cfg, port).await?,
            CliCommand::Once => run_once(&cfg).await?,
            CliCommand::Config => {
                let path = match &self.config {
                    Some(p) => p.clone(),
                    None => config::config_path()?,
                };
                run_show_config(&path, &cfg)?;
            }
        }

        Ok(())
    }
}
