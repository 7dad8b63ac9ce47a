//! KDL abstraction layer.
//!
//! `KdlParse` and `ParseNode` wrap the `kdl` crate types so the rest of the
//! config module never touches KDL entries or spans directly.

use super::ConfigError;

/// Parsed KDL document paired with its source text.
pub(super) struct KdlParse<'a> {
    doc: &'a kdl::KdlDocument,
    source: &'a str,
}

/// Single KDL node with source context for line-number reporting.
pub(super) struct ParseNode<'a> {
    node: &'a kdl::KdlNode,
    source: &'a str,
}

/// Parse KDL source text into a document.
///
/// Returns `ConfigError::ParseError` on invalid syntax.
pub(super) fn parse_document(source: &str) -> Result<kdl::KdlDocument, ConfigError> {
    source
        .parse()
        .map_err(|e: kdl::KdlError| ConfigError::ParseError(e.to_string()))
}

impl<'a> KdlParse<'a> {
    pub(super) fn new(doc: &'a kdl::KdlDocument, source: &'a str) -> Self {
        Self { doc, source }
    }

    /// All nodes at this level, in source order.
    pub(super) fn nodes(&self) -> Vec<ParseNode<'a>> {
        self.doc
            .nodes()
            .iter()
            .map(|node| ParseNode {
                node,
                source: self.source,
            })
            .collect()
    }
}

impl<'a> ParseNode<'a> {
    /// The node's identifier (e.g. `"block"`, `"contains"`).
    pub(super) fn name(&self) -> &'a str {
        self.node.name().value()
    }

    /// Positional (unnamed) argument values, in order.
    fn arguments(&self) -> impl Iterator<Item = &'a kdl::KdlValue> {
        self.node
            .entries()
            .iter()
            .filter(|e| e.name().is_none())
            .map(|e| e.value())
    }

    fn single_argument(&self) -> Result<&'a kdl::KdlValue, ConfigError> {
        let mut args = self.arguments();
        match (args.next(), args.next()) {
            (Some(value), None) => Ok(value),
            _ => Err(self.error(format!(
                "'{}' expects exactly one argument, found {}",
                self.name(),
                self.arguments().count()
            ))),
        }
    }

    /// Whether the node carries any `key=value` properties.
    pub(super) fn has_properties(&self) -> bool {
        self.node.entries().iter().any(|e| e.name().is_some())
    }

    /// The node's single string argument.
    ///
    /// Errors when the node has zero arguments, more than one, or a non-string one.
    pub(super) fn single_string(&self) -> Result<&'a str, ConfigError> {
        let value = self.single_argument()?;
        value
            .as_string()
            .ok_or_else(|| self.error(format!("'{}' expects a string argument", self.name())))
    }

    /// The node's single boolean argument (`#true` / `#false`).
    pub(super) fn single_bool(&self) -> Result<bool, ConfigError> {
        let value = self.single_argument()?;
        value
            .as_bool()
            .ok_or_else(|| self.error(format!("'{}' expects #true or #false", self.name())))
    }

    /// The children block `{ … }`, preserving source context.
    pub(super) fn children(&self) -> Option<KdlParse<'a>> {
        self.node.children().map(|doc| KdlParse {
            doc,
            source: self.source,
        })
    }

    /// 1-based line number of this node in the original source.
    pub(super) fn line(&self) -> usize {
        let offset = self.node.span().offset();
        self.source[..offset.min(self.source.len())]
            .bytes()
            .filter(|&b| b == b'\n')
            .count()
            + 1
    }

    /// A validation error prefixed with this node's line.
    pub(super) fn error(&self, msg: impl std::fmt::Display) -> ConfigError {
        ConfigError::ValidationError(format!("line {}: {msg}", self.line()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_lines(source: &str) -> Vec<usize> {
        let doc = parse_document(source).unwrap();
        let kdl = KdlParse::new(&doc, source);
        kdl.nodes().iter().map(|n| n.line()).collect()
    }

    #[test]
    fn line_numbers_follow_source() {
        assert_eq!(node_lines("builtins #true"), vec![1]);
        assert_eq!(
            node_lines("builtins #true\n    builtins #false\n    builtins #true"),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn single_string_rejects_extra_arguments() {
        let source = r#"contains "a" "b""#;
        let doc = parse_document(source).unwrap();
        let kdl = KdlParse::new(&doc, source);
        let err = kdl.nodes()[0].single_string().unwrap_err().to_string();
        assert!(err.contains("exactly one argument"), "got: {err}");
    }

    #[test]
    fn single_bool_rejects_strings() {
        let source = r#"builtins "no""#;
        let doc = parse_document(source).unwrap();
        let kdl = KdlParse::new(&doc, source);
        let err = kdl.nodes()[0].single_bool().unwrap_err().to_string();
        assert!(err.contains("#true or #false"), "got: {err}");
    }

    #[test]
    fn invalid_syntax_is_parse_error() {
        let result = parse_document("this is { not valid { kdl");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
