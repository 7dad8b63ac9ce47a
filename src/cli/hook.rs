use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use crate::gate::{self, RuleSet};
use crate::protocol::{HookInput, Verdict};

use super::APP_NAME;

/// Malformed hook input. Distinct from a block: these exit 1, not 2.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("failed to read stdin: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid hook input: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid hook input: expected a JSON object")]
    NotAnObject,
}

/// Execute the hook subcommand: read JSON from stdin, evaluate, exit.
///
/// - Allowed command → exit 0, nothing written.
/// - Blocked command → the rule's message on stderr, exit 2.
/// - Config error or malformed stdin → diagnostic on stderr, exit 1.
pub fn run(config_path: Option<&Path>) -> ExitCode {
    let rules = match super::load_rules(config_path) {
        Ok(rules) => rules,
        Err(e) => {
            super::report_config_error(e);
            return ExitCode::FAILURE;
        }
    };

    let input = match read_input(std::io::stdin().lock()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{APP_NAME}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let verdict = execute(&input, &rules);
    if let Some(message) = verdict.message() {
        eprintln!("{message}");
    }
    ExitCode::from(verdict.exit_code())
}

/// Read the whole stream and parse it as a hook payload.
///
/// The top-level value must be a JSON object; anything else is malformed
/// even though every field inside it is optional.
pub(crate) fn read_input(mut reader: impl Read) -> Result<HookInput, HookError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    if !value.is_object() {
        return Err(HookError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

/// Evaluate a parsed payload against the rules.
pub(crate) fn execute(input: &HookInput, rules: &RuleSet) -> Verdict {
    tracing::debug!(
        tool = input.tool_name.as_deref().unwrap_or("-"),
        session = input.session_id.as_deref().unwrap_or("-"),
        command = input.command(),
        "evaluating command"
    );
    let verdict = gate::evaluate(input.command(), rules);
    if let Verdict::Block { rule, .. } = &verdict {
        tracing::info!(rule = %rule, "blocked command");
    }
    verdict
}
