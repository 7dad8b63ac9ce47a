pub mod hook;
pub mod rules;

use std::path::Path;

use crate::config::{Config, ConfigError};
use crate::gate::RuleSet;

pub(crate) const APP_NAME: &str = "command-gate";

/// Resolve the active rule list: the built-ins alone, or whatever the config describes.
pub(crate) fn load_rules(config_path: Option<&Path>) -> Result<RuleSet, ConfigError> {
    match config_path {
        Some(path) => {
            let config = Config::load(path)?;
            tracing::debug!(
                path = %path.display(),
                builtins = config.builtins,
                extra = config.rules.len(),
                "loaded config"
            );
            Ok(config.rule_set())
        }
        None => Ok(RuleSet::builtin()),
    }
}

/// Render a config error to stderr with miette's diagnostic formatting.
pub(crate) fn report_config_error(err: ConfigError) {
    eprintln!("{:?}", miette::Report::new(err));
}
