//! CLI command definitions for the `bkit` binary.

pub mod inspect;
pub mod list;
pub mod simulate;

use std::path::PathBuf;

use bridgekit_observe::tracing_setup::{TracingOptions, filter_for_verbosity};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Inspect native module definitions and simulate their lifecycle.
#[derive(Parser)]
#[command(name = "bkit", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors. Command output is still printed.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Write logs as one JSON object per line.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Directory containing `bridgekit.toml`.
    #[arg(long, global = true, env = "BRIDGEKIT_CONFIG_DIR", default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered modules.
    #[command(alias = "ls")]
    List,

    /// Show the exported surface of one module.
    Inspect {
        /// Module name (e.g. "ExpoUI").
        module: String,
    },

    /// Run every lifecycle event through the registered modules.
    Simulate {
        /// Deep link delivered with the new-intent event.
        #[arg(long, default_value = "bkit://settings")]
        url: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Subscriber settings derived from the global flags.
    pub fn tracing_options(&self) -> TracingOptions {
        TracingOptions {
            default_filter: filter_for_verbosity(self.verbose, self.quiet).to_string(),
            json: self.log_json,
            enable_otel: self.otel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_json_flag_selects_json_logs() {
        let cli = Cli::parse_from(["bkit", "--log-json", "list"]);
        let options = cli.tracing_options();
        assert!(options.json);
        assert!(!options.enable_otel);
        assert_eq!(options.default_filter, "warn");
    }

    #[test]
    fn quiet_only_lowers_log_filter() {
        let cli = Cli::parse_from(["bkit", "inspect", "ExpoUI", "--quiet"]);
        assert_eq!(cli.tracing_options().default_filter, "error");
        assert!(!cli.tracing_options().json);
        assert!(matches!(cli.command, Commands::Inspect { ref module } if module == "ExpoUI"));
    }

    #[test]
    fn verbosity_outranks_quiet() {
        let cli = Cli::parse_from(["bkit", "-vv", "--quiet", "simulate"]);
        assert_eq!(cli.tracing_options().default_filter, "trace");
    }
}
