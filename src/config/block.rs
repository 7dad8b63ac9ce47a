//! `block "<name>" { … }` nodes: one extra gate rule each.

use super::kdl::ParseNode;
use super::ConfigError;
use crate::gate::{Matcher, Rule};

/// Build a [`Rule`] from a `block` node.
///
/// The body needs exactly one matcher (`contains` or `starts-with`) and
/// exactly one `message`, each with a single non-empty string.
pub(super) fn parse_block(node: &ParseNode<'_>) -> Result<Rule, ConfigError> {
    if node.has_properties() {
        return Err(node.error("'block' does not take properties"));
    }
    let name = node.single_string()?;
    if name.trim().is_empty() {
        return Err(node.error("block name must not be empty"));
    }
    let body = node
        .children()
        .ok_or_else(|| node.error(format!("block '{name}' needs a {{ … }} body")))?;

    let mut matcher = None;
    let mut message = None;

    for child in body.nodes() {
        match child.name() {
            kind @ ("contains" | "starts-with") => {
                if matcher.is_some() {
                    return Err(child.error(format!("block '{name}' has more than one matcher")));
                }
                let needle = non_empty_string(&child)?;
                matcher = Some(if kind == "contains" {
                    Matcher::contains(needle)
                } else {
                    if needle.starts_with(char::is_whitespace) {
                        // Commands are trimmed before matching.
                        return Err(child.error(format!(
                            "starts-with \"{needle}\" begins with whitespace and can never match"
                        )));
                    }
                    Matcher::starts_with(needle)
                });
            }
            "message" => {
                if message.is_some() {
                    return Err(child.error(format!("block '{name}' has more than one message")));
                }
                let text = non_empty_string(&child)?;
                if text.contains('\n') {
                    return Err(child.error("message must be a single line"));
                }
                message = Some(text);
            }
            other => {
                return Err(child.error(format!("unknown node '{other}' in block '{name}'")));
            }
        }
    }

    let matcher = matcher.ok_or_else(|| {
        node.error(format!(
            "block '{name}' needs a 'contains' or 'starts-with' matcher"
        ))
    })?;
    let message = message.ok_or_else(|| node.error(format!("block '{name}' needs a 'message'")))?;

    Ok(Rule::new(name, matcher, message))
}

fn non_empty_string<'a>(node: &ParseNode<'a>) -> Result<&'a str, ConfigError> {
    if node.has_properties() {
        return Err(node.error(format!("'{}' does not take properties", node.name())));
    }
    let value = node.single_string()?;
    if value.is_empty() {
        return Err(node.error(format!("'{}' must not be empty", node.name())));
    }
    Ok(value)
}
