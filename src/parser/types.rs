//! Common types for parsers

/// A version string found in a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundVersion {
    /// Version exactly as written, without quotes
    pub version: String,
    /// Line number (0-indexed)
    pub line: usize,
    /// Column of the first character of the version (0-indexed)
    pub column: usize,
}

const QUOTES: [&str; 4] = ["\"\"\"", "'''", "\"", "'"];

/// Strips one matching pair of surrounding quotes.
///
/// Returns the inner text and the width of the opening quote (0 if unquoted).
pub fn strip_quotes(text: &str) -> (&str, usize) {
    for quote in QUOTES {
        if text.len() >= quote.len() * 2 && text.starts_with(quote) && text.ends_with(quote) {
            return (&text[quote.len()..text.len() - quote.len()], quote.len());
        }
    }
    (text, 0)
}
