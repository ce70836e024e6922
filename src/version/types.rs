//! Common types for version auditing

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// A version token compared by exact string equality only
pub type VersionString = String;

/// A version extracted from one configured source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    /// Source label, e.g. `pyproject.toml tool.poetry.version`
    pub source: String,
    /// File the version was read from, relative to the project root
    pub path: PathBuf,
    pub version: VersionString,
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
}

/// Versions in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionSet {
    pub entries: Vec<VersionEntry>,
}

impl VersionSet {
    pub fn new(entries: Vec<VersionEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The version every other entry is compared against
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|entry| entry.version.as_str())
    }

    /// Entries whose version differs from the first entry
    pub fn mismatches(&self) -> Vec<&VersionEntry> {
        let Some(first) = self.first() else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|entry| entry.version != first)
            .collect()
    }
}

impl fmt::Display for VersionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "  {}: {} ({}:{}:{})",
                entry.source,
                entry.version,
                entry.path.display(),
                entry.line + 1,
                entry.column + 1
            )?;
        }
        Ok(())
    }
}

/// Versions already published on a registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishedVersions {
    pub versions: BTreeSet<VersionString>,
}

impl PublishedVersions {
    pub fn new<I, S>(versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            versions: versions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, version: &str) -> bool {
        self.versions.contains(version)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl fmt::Display for PublishedVersions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let versions: Vec<&str> = self.versions.iter().map(String::as_str).collect();
        write!(f, "[{}]", versions.join(", "))
    }
}
