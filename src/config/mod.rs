mod block;
mod kdl;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::gate::{Rule, RuleSet, BUILTIN_NAMES};
use self::kdl::{parse_document, KdlParse};

/// Gate configuration loaded from a KDL file.
///
/// ```kdl
/// builtins #true
/// block "npm-publish" {
///     contains "npm publish"
///     message "Publishing happens in CI."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Keep the built-in rules ahead of the configured ones.
    pub builtins: bool,
    /// Extra rules, in file order.
    pub rules: Vec<Rule>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            builtins: true,
            rules: Vec::new(),
        }
    }
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    #[diagnostic(
        code(command_gate::config::not_found),
        help("check the path passed to --config")
    )]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    #[diagnostic(code(command_gate::config::read))]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    #[diagnostic(code(command_gate::config::syntax))]
    ParseError(String),
    #[error("invalid config: {0}")]
    #[diagnostic(
        code(command_gate::config::invalid),
        help("top-level nodes are `builtins` and `block`")
    )]
    ValidationError(String),
}

impl Config {
    /// Load a config from a KDL file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::ReadError(e)
            }
        })?;
        Self::parse(&content)
    }

    /// Parse a KDL string into a Config.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let doc = parse_document(content)?;
        Self::from_document(&KdlParse::new(&doc, content))
    }

    fn from_document(doc: &KdlParse<'_>) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        let mut seen_builtins = false;
        let mut rule_lines = Vec::new();

        for node in doc.nodes() {
            match node.name() {
                "builtins" => {
                    if seen_builtins {
                        return Err(node.error("'builtins' given more than once"));
                    }
                    seen_builtins = true;
                    config.builtins = node.single_bool()?;
                }
                "block" => {
                    let rule = block::parse_block(&node)?;
                    rule_lines.push(node.line());
                    config.rules.push(rule);
                }
                other => return Err(node.error(format!("unknown top-level node '{other}'"))),
            }
        }

        // Rule names are unique across the final list, built-ins included.
        let mut names: HashMap<&str, Option<usize>> = HashMap::new();
        if config.builtins {
            names.extend(BUILTIN_NAMES.iter().map(|n| (*n, None)));
        }
        for (rule, line) in config.rules.iter().zip(rule_lines) {
            if let Some(first) = names.insert(rule.name.as_str(), Some(line)) {
                let origin = match first {
                    Some(first_line) => format!("line {first_line}"),
                    None => "a built-in rule".to_string(),
                };
                return Err(ConfigError::ValidationError(format!(
                    "line {line}: rule name '{}' is already used by {origin}",
                    rule.name
                )));
            }
        }

        Ok(config)
    }

    /// The full ordered rule list: built-ins first (if kept), then configured rules.
    pub fn rule_set(&self) -> RuleSet {
        let mut rules = if self.builtins {
            RuleSet::builtin()
        } else {
            RuleSet::default()
        };
        rules.extend(self.rules.iter().cloned());
        rules
    }
}
