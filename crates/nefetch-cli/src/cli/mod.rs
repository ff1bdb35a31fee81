//! CLI for the nefetch dataset mirror.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nefetch_core::config;
use std::path::PathBuf;

use commands::{run_fetch, run_status, run_verify};

/// Top-level CLI for the nefetch dataset mirror.
#[derive(Debug, Parser)]
#[command(name = "nefetch")]
#[command(about = "nefetch: mirror Natural Earth boundary datasets as pretty JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the datasets and write them under the destination directory.
    Fetch {
        /// Only fetch datasets whose local file is absent (default refreshes everything).
        #[arg(long)]
        missing_only: bool,
        /// Destination directory. Must already exist; it is not created.
        #[arg(long, default_value = "data", value_name = "DIR")]
        dest: PathBuf,
    },

    /// Show which dataset files exist locally and their sizes.
    Status {
        /// Destination directory to inspect.
        #[arg(long, default_value = "data", value_name = "DIR")]
        dest: PathBuf,
    },

    /// Check that local dataset files are valid, canonically formatted JSON.
    Verify {
        /// Destination directory to verify.
        #[arg(long, default_value = "data", value_name = "DIR")]
        dest: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { missing_only, dest } => run_fetch(&cfg, &dest, missing_only)?,
            CliCommand::Status { dest } => run_status(&dest),
            CliCommand::Verify { dest } => run_verify(&dest)?,
        }

        Ok(())
    }
}
