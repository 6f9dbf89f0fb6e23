//! CLI for resmirror.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use resmirror_core::config;
use resmirror_core::ResourceCoordinate;
use std::path::PathBuf;

use commands::{run_config, run_get, Overrides};

/// Top-level CLI for resmirror.
#[derive(Debug, Parser)]
#[command(name = "resmirror")]
#[command(
    about = "Fetch project/stage/service resources from the configuration service and mirror them to disk",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one or more resources and print their local paths.
    Get {
        /// Resource paths, e.g. `shipyard.yaml` or `jmeter/load.jmx`.
        #[arg(required = true)]
        paths: Vec<String>,

        #[arg(long)]
        project: String,

        #[arg(long)]
        stage: String,

        #[arg(long)]
        service: String,

        /// Only check the local filesystem; never contact the configuration service.
        #[arg(long)]
        local: bool,

        /// Configuration service address (overrides config file).
        #[arg(long, value_name = "URL")]
        configuration_service_url: Option<String>,

        /// Event broker address (overrides config file).
        #[arg(long, value_name = "URL")]
        event_broker_url: Option<String>,

        /// Scheme for a configuration service address given without one.
        #[arg(long)]
        scheme: Option<String>,

        /// Directory to mirror resources under (default: current directory).
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Correlation id recorded in the log.
        #[arg(long)]
        context: Option<String>,

        /// Also print the SHA-256 of each resolved file.
        #[arg(long)]
        checksum: bool,
    },

    /// Show the config file location and the effective options.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Get {
                paths,
                project,
                stage,
                service,
                local,
                configuration_service_url,
                event_broker_url,
                scheme,
                root,
                context,
                checksum,
            } => {
                // Read-only: `get` never writes a config file.
                let cfg = config::load_or_default()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let overrides = Overrides {
                    local,
                    configuration_service_url,
                    event_broker_url,
                    scheme,
                    root,
                };
                let coordinate = ResourceCoordinate::new(project, stage, service);
                run_get(
                    overrides.apply(cfg),
                    coordinate,
                    &paths,
                    context,
                    checksum,
                )?;
            }
            CliCommand::Config => {
                let cfg = config::load_or_init()?;
                run_config(&cfg)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
