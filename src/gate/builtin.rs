//! Rules every gate starts with unless the config drops them.

use super::rule::{Matcher, Rule, RuleSet};

pub const CARGO_TEST_MESSAGE: &str = "Run the tests with nextest, not test!";
pub const SINGLE_TEST_MESSAGE: &str = "Run the full test suite, not a single test!";
pub const GIT_MESSAGE: &str = "DO NOT USE GIT! EVER!";

/// Names of the built-in rules, in evaluation order.
pub const BUILTIN_NAMES: [&str; 3] = ["cargo-test", "single-test", "git"];

impl RuleSet {
    /// The built-in rules: `cargo test`, then `--test`, then a `git` prefix.
    pub fn builtin() -> Self {
        RuleSet::new(vec![
            Rule::new(
                BUILTIN_NAMES[0],
                Matcher::contains("cargo test"),
                CARGO_TEST_MESSAGE,
            ),
            Rule::new(
                BUILTIN_NAMES[1],
                Matcher::contains("--test"),
                SINGLE_TEST_MESSAGE,
            ),
            Rule::new(BUILTIN_NAMES[2], Matcher::starts_with("git"), GIT_MESSAGE),
        ])
    }
}
