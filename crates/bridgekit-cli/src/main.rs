//! Bridgekit module inspector.
//!
//! Binary name: `bkit`
//!
//! Loads `bridgekit.toml`, registers the bundled sample modules, then
//! dispatches to the requested command.

mod cli;
mod samples;

use clap::Parser;
use clap_complete::generate;

use bridgekit_core::config::load_registry_config;
use bridgekit_observe::tracing_setup::{init_tracing, shutdown_tracing};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.tracing_options())
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need a registry
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "bkit", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_registry_config(&cli.config_dir).await;
    let registry = samples::registry(config)?;
    tracing::debug!(modules = registry.len(), "registry ready");

    let result = match cli.command {
        Commands::List => cli::list::list_modules(&registry, cli.json),
        Commands::Inspect { module } => cli::inspect::inspect_module(&registry, &module, cli.json),
        Commands::Simulate { url } => cli::simulate::simulate(&registry, &url, cli.json).await,
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}
