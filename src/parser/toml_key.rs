//! TOML manifest parser
//!
//! Resolves a dotted key path (e.g. `tool.poetry.version`) to a string value.
//! The path may be spread over a table header, dotted keys and inline tables:
//!
//! ```toml
//! [tool.poetry]
//! version = "0.3.1"
//!
//! [tool]
//! poetry.version = "0.3.1"
//!
//! tool = { poetry = { version = "0.3.1" } }
//! ```
//!
//! Array tables (`[[bin]]`) are not addressable and are skipped.
//! String values are decoded as TOML (escapes, multi-line forms).

use tracing::warn;

use crate::parser::traits::{ParseError, VersionParser};
use crate::parser::types::{FoundVersion, strip_quotes};

/// `[package].version` in Cargo.toml
pub const CARGO_PACKAGE_VERSION: &str = "package.version";

/// `[project].version` in pyproject.toml
pub const PROJECT_VERSION: &str = "project.version";

/// `[tool.poetry].version` in pyproject.toml
pub const POETRY_VERSION: &str = "tool.poetry.version";

/// Parser for a string value at a fixed key path in a TOML file
pub struct TomlVersionParser {
    key_path: Vec<String>,
}

impl TomlVersionParser {
    pub fn new(key: &str) -> Result<Self, ParseError> {
        let key_path = split_key(key);
        if key_path.is_empty() || key_path.iter().any(|segment| segment.is_empty()) {
            return Err(ParseError::InvalidKey(key.to_string()));
        }
        Ok(Self { key_path })
    }
}

impl VersionParser for TomlVersionParser {
    fn parse(&self, content: &str) -> Result<Option<FoundVersion>, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_toml_ng::LANGUAGE;
        parser.set_language(&language.into()).map_err(|e| {
            warn!("Failed to set TOML language for tree-sitter: {}", e);
            ParseError::TreeSitter(e.to_string())
        })?;

        let tree = parser.parse(content, None).ok_or_else(|| {
            warn!("Failed to parse TOML content");
            ParseError::ParseFailed("Failed to parse TOML".to_string())
        })?;

        let root = tree.root_node();
        if root.has_error() {
            warn!("TOML content contains syntax errors");
            return Err(ParseError::ParseFailed(
                "TOML content contains syntax errors".to_string(),
            ));
        }

        self.find_in_document(root, content)
    }
}

impl TomlVersionParser {
    /// Search root-level pairs and every `[table]`
    fn find_in_document(
        &self,
        root: tree_sitter::Node,
        content: &str,
    ) -> Result<Option<FoundVersion>, ParseError> {
        let mut cursor = root.walk();

        for child in root.children(&mut cursor) {
            let found = match child.kind() {
                "pair" => self.find_in_pair(child, content, &[])?,
                "table" => self.find_in_table(child, content)?,
                _ => None,
            };
            if found.is_some() {
                return Ok(found);
            }
        }

        Ok(None)
    }

    /// Process a TOML table node
    fn find_in_table(
        &self,
        table_node: tree_sitter::Node,
        content: &str,
    ) -> Result<Option<FoundVersion>, ParseError> {
        // Get the table header (e.g., [tool.poetry])
        let Some(header) = table_node.child(0) else {
            return Ok(None);
        };
        if header.kind() != "[" {
            return Ok(None);
        }

        let mut cursor = table_node.walk();
        let Some(prefix) = table_node
            .children(&mut cursor)
            .find(|child| is_key(child.kind()))
            .map(|key| split_key(&content[key.byte_range()]))
        else {
            return Ok(None);
        };

        if !self.key_path.starts_with(&prefix) {
            return Ok(None);
        }

        let mut cursor = table_node.walk();
        for child in table_node.children(&mut cursor) {
            if child.kind() == "pair" {
                if let Some(found) = self.find_in_pair(child, content, &prefix)? {
                    return Ok(Some(found));
                }
            }
        }

        Ok(None)
    }

    /// Match a `key = value` pair whose key is relative to `prefix`
    fn find_in_pair(
        &self,
        pair_node: tree_sitter::Node,
        content: &str,
        prefix: &[String],
    ) -> Result<Option<FoundVersion>, ParseError> {
        let mut cursor = pair_node.walk();
        let Some(key) = pair_node
            .children(&mut cursor)
            .find(|child| is_key(child.kind()))
        else {
            return Ok(None);
        };

        let mut path = prefix.to_vec();
        path.extend(split_key(&content[key.byte_range()]));

        if !self.key_path.starts_with(&path) {
            return Ok(None);
        }

        let mut cursor = pair_node.walk();
        let Some(value) = pair_node.named_children(&mut cursor).last() else {
            return Ok(None);
        };

        match value.kind() {
            "string" if path == self.key_path => {
                let text = &content[value.byte_range()];
                let start_point = value.start_position();
                let (line, column) = value_start(text, start_point.row, start_point.column);
                Ok(Some(FoundVersion {
                    version: decode_string(text)?,
                    line,
                    column,
                }))
            }
            // Inline table: package = { version = "1.0" }
            "inline_table" if path.len() < self.key_path.len() => {
                let mut cursor = value.walk();
                for child in value.children(&mut cursor) {
                    if child.kind() == "pair" {
                        if let Some(found) = self.find_in_pair(child, content, &path)? {
                            return Ok(Some(found));
                        }
                    }
                }
                Ok(None)
            }
            _ => Ok(None),
        }
    }
}

/// Decode a TOML string literal (quotes, escapes, multi-line forms)
fn decode_string(text: &str) -> Result<String, ParseError> {
    let value = text.parse::<toml_edit::Value>().map_err(|e| {
        warn!("Failed to decode TOML string {}: {}", text, e);
        ParseError::ParseFailed(format!("invalid string {}: {}", text, e))
    })?;

    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ParseError::ParseFailed(format!("not a string: {}", text)))
}

/// Position of the first character of a string's value.
///
/// A newline right after an opening `"""` or `'''` is not part of the value.
fn value_start(text: &str, row: usize, column: usize) -> (usize, usize) {
    let (_, quote_width) = strip_quotes(text);
    let rest = &text[quote_width..];
    if quote_width == 3 && (rest.starts_with('\n') || rest.starts_with("\r\n")) {
        (row + 1, 0)
    } else {
        (row, column + quote_width)
    }
}

fn is_key(kind: &str) -> bool {
    matches!(kind, "bare_key" | "dotted_key" | "quoted_key")
}

/// Split a (possibly dotted, possibly quoted) key into its segments
fn split_key(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in text.chars() {
        match (quote, c) {
            (None, '.') => segments.push(std::mem::take(&mut current)),
            (None, '"' | '\'') => {
                quote = Some(c);
                current.push(c);
            }
            (Some(q), _) if q == c => {
                quote = None;
                current.push(c);
            }
            _ => current.push(c),
        }
    }
    segments.push(current);

    segments
        .iter()
        .map(|segment| strip_quotes(segment.trim()).0.to_string())
        .collect()
}
