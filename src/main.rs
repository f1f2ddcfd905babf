//! Agent Config CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use agent_config::cli::{commands, Cli, Commands};
use agent_config::infrastructure::env::ProcessEnv;
use agent_config::infrastructure::logging::{LogConfig, LogDestination, LoggerImpl};
use agent_config::{ConfigKey, ConfigResolver, ManifestLoader};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        agent_config::cli::handle_error(err, cli.json);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let manifest = match &cli.manifest {
        Some(path) => ManifestLoader::load_from_file(path),
        None => ManifestLoader::load(),
    }
    .context("Failed to load agent manifest")?;

    let resolver = ConfigResolver::new(ProcessEnv, manifest);

    let log_config = LogConfig {
        format: cli.log_format,
        destination: resolver
            .determine_config(ConfigKey::Log)
            .map(|value| LogDestination::parse(&value.into_text()))
            .unwrap_or_default(),
        ..LogConfig::default()
    };
    let _logger = LoggerImpl::init(&log_config)?;

    match &cli.command {
        Commands::Show(args) => commands::show::execute(&resolver, args, cli.json),
        Commands::Features => commands::features::execute(&resolver, cli.json),
        Commands::CheckRuntime(args) => commands::check_runtime::execute(args, cli.json),
    }
}
