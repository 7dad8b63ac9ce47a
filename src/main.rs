use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// PreToolUse hook for Claude Code that vetoes disallowed shell commands.
#[derive(Debug, Parser)]
#[command(name = "command-gate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run as a Claude Code PreToolUse hook (reads stdin, exits 2 to block)
    Hook {
        /// Path to a KDL config file with extra rules
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the active rules in evaluation order
    Rules {
        /// Path to a KDL config file with extra rules
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Hook { config } => command_gate::run_hook(config.as_deref()),
        Commands::Rules { config } => command_gate::run_rules(config.as_deref()),
    }
}

/// Filter variable for diagnostic logs. `RUST_LOG` is deliberately not read.
const LOG_ENV: &str = "COMMAND_GATE_LOG";

/// Logs share stderr with block messages, so they stay off unless `COMMAND_GATE_LOG` is set.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
