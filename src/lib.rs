pub mod config;
pub mod gate;
pub mod protocol;

pub(crate) mod cli;

use std::path::Path;
use std::process::ExitCode;

/// Run the hook subcommand: read JSON from stdin, evaluate, exit 0 or 2.
///
/// This is the binary entry point. It exists to bridge the binary crate (`main.rs`)
/// to the library without exposing `cli` internals. Callers embedding the gate
/// should use [`gate::evaluate`] and [`config::Config`] directly.
pub fn run_hook(config_path: Option<&Path>) -> ExitCode {
    cli::hook::run(config_path)
}

/// Run the rules subcommand: print the active rule list to stdout.
pub fn run_rules(config_path: Option<&Path>) -> ExitCode {
    cli::rules::run(config_path)
}
