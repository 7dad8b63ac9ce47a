mod builtin;
pub mod rule;

pub use builtin::{BUILTIN_NAMES, CARGO_TEST_MESSAGE, GIT_MESSAGE, SINGLE_TEST_MESSAGE};
pub use rule::{MatchKind, Matcher, Rule, RuleSet};

use crate::protocol::Verdict;

/// Trim surrounding whitespace and lowercase, so rules compare case-insensitively.
///
/// The ASCII separators `\x1c`..=`\x1f` count as whitespace here, on top of
/// Unicode `White_Space`, so a leading separator cannot hide a `git` prefix.
pub fn normalize(command: &str) -> String {
    command.trim_matches(is_trimmed).to_lowercase()
}

fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Run a command through the rule list and return the verdict.
///
/// The command is normalized first; the first matching rule blocks it.
/// No match (including an empty command) allows it.
///
/// # Examples
///
/// ```
/// use command_gate::gate::{evaluate, RuleSet};
/// use command_gate::protocol::Verdict;
///
/// let rules = RuleSet::builtin();
///
/// assert_eq!(evaluate("ls -la", &rules), Verdict::Allow);
///
/// let verdict = evaluate("  Git status", &rules);
/// assert_eq!(verdict.exit_code(), 2);
/// assert_eq!(verdict.message(), Some("DO NOT USE GIT! EVER!"));
/// ```
pub fn evaluate(command: &str, rules: &RuleSet) -> Verdict {
    let normalized = normalize(command);
    match rules.first_match(&normalized) {
        Some(rule) => {
            tracing::debug!(rule = %rule.name, "command matched rule");
            Verdict::Block {
                rule: rule.name.clone(),
                message: rule.message.clone(),
            }
        }
        None => Verdict::Allow,
    }
}
