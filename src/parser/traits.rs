//! Parser trait definition

use crate::parser::types::FoundVersion;

/// Trait for extracting a version string from a file's content
pub trait VersionParser {
    /// Parse the content and return the version, if the file declares one
    fn parse(&self, content: &str) -> Result<Option<FoundVersion>, ParseError>;
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to parse the file structure
    #[error("Failed to parse file: {0}")]
    ParseFailed(String),

    /// Invalid key path given to a parser
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Tree-sitter related error
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),
}
