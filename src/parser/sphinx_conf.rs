//! Sphinx `conf.py` parser
//!
//! Extracts the value of the `release` assignment, e.g.
//! `release = '0.3.1'`. Only the first matching line is used.

use regex::Regex;
use tracing::debug;

use crate::parser::traits::{ParseError, VersionParser};
use crate::parser::types::{FoundVersion, strip_quotes};

/// Parser for Sphinx documentation config files
pub struct SphinxConfParser {
    /// Regex for the release assignment: `release = <value>`
    release_re: Regex,
}

impl SphinxConfParser {
    pub fn new() -> Self {
        Self {
            // Matched against the trimmed line
            release_re: Regex::new(r"^release\s?=\s?(.*)$").unwrap(),
        }
    }
}

impl Default for SphinxConfParser {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionParser for SphinxConfParser {
    fn parse(&self, content: &str) -> Result<Option<FoundVersion>, ParseError> {
        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            let Some(caps) = self.release_re.captures(trimmed) else {
                continue;
            };
            let Some(value_match) = caps.get(1) else {
                continue;
            };

            let raw = value_match.as_str();
            let value = raw.trim();
            let (version, quote_width) = leading_quoted(value);

            // Column within the untrimmed line
            let indent = line.len() - line.trim_start().len();
            let column =
                indent + value_match.start() + (raw.len() - raw.trim_start().len()) + quote_width;

            debug!("Found release '{}' on line {}", version, line_num + 1);

            return Ok(Some(FoundVersion {
                version: version.to_string(),
                line: line_num,
                column,
            }));
        }

        Ok(None)
    }
}

/// Returns the quoted literal at the start of `value`, ignoring whatever
/// follows the closing quote (typically a `# comment`).
fn leading_quoted(value: &str) -> (&str, usize) {
    for quote in ['\'', '"'] {
        if let Some(rest) = value.strip_prefix(quote) {
            if let Some(end) = rest.find(quote) {
                return (&rest[..end], 1);
            }
        }
    }
    strip_quotes(value)
}
