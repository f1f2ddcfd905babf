//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::check_runtime::CheckRuntimeArgs;
use crate::cli::commands::show::ShowArgs;
use crate::infrastructure::logging::LogFormat;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "agent-config")]
#[command(about = "Resolve and inspect monitoring agent configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Manifest file to load instead of ./newrelic.yaml and ./newrelic.local.yaml
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    pub log_format: LogFormat,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve and print the full agent configuration
    Show(ShowArgs),

    /// Print resolved feature flags
    Features,

    /// Check the host runtime version against the agent's minimum
    CheckRuntime(CheckRuntimeArgs),
}
