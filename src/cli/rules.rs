use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::gate::RuleSet;

use super::APP_NAME;

/// Execute the rules subcommand: print the active rule list in evaluation order.
pub fn run(config_path: Option<&Path>) -> ExitCode {
    let rules = match super::load_rules(config_path) {
        Ok(rules) => rules,
        Err(e) => {
            super::report_config_error(e);
            return ExitCode::FAILURE;
        }
    };

    match write_rules(&mut io::stdout().lock(), &rules) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{APP_NAME}: failed to write rules: {e}");
            ExitCode::FAILURE
        }
    }
}

fn write_rules(out: &mut impl Write, rules: &RuleSet) -> io::Result<()> {
    if rules.is_empty() {
        writeln!(out, "no rules configured; every command is allowed")?;
    }
    for (i, rule) in rules.iter().enumerate() {
        writeln!(out, "{}. {rule}", i + 1)?;
    }
    Ok(())
}
