//! Reads every configured source into a [`VersionSet`]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SourceConfig;
use crate::parser::{SphinxConfParser, TomlVersionParser, VersionParser};
use crate::version::error::AuditError;
use crate::version::types::{VersionEntry, VersionSet};

/// Extract one version per source, in source order.
///
/// Paths are resolved relative to `root`. Each file is read once even if
/// several sources point at it.
pub fn collect_versions(root: &Path, sources: &[SourceConfig]) -> Result<VersionSet, AuditError> {
    let mut contents: HashMap<PathBuf, String> = HashMap::new();
    let mut entries = Vec::with_capacity(sources.len());

    for source in sources {
        let path = source.path().to_path_buf();
        if !contents.contains_key(&path) {
            let full_path = root.join(&path);
            debug!("Reading {}", full_path.display());
            let content =
                std::fs::read_to_string(&full_path).map_err(|e| AuditError::Read {
                    path: full_path.clone(),
                    source: e,
                })?;
            contents.insert(path.clone(), content);
        }
        let content = &contents[&path];

        entries.push(extract_version(source, content)?);
    }

    Ok(VersionSet::new(entries))
}

/// Extract the version declared by a single source
pub fn extract_version(source: &SourceConfig, content: &str) -> Result<VersionEntry, AuditError> {
    let found = match source {
        SourceConfig::Sphinx { .. } => SphinxConfParser::new().parse(content),
        SourceConfig::Toml { path, key } => TomlVersionParser::new(key)
            .map_err(|e| AuditError::Config(format!("{}: {}", path.display(), e)))?
            .parse(content),
    }
    .map_err(|e| AuditError::Parse {
        path: source.path().to_path_buf(),
        source: e,
    })?;

    let found = found.ok_or_else(|| AuditError::VersionNotFound {
        location: source.label(),
    })?;

    debug!("{}: {}", source.label(), found.version);

    Ok(VersionEntry {
        source: source.label(),
        path: source.path().to_path_buf(),
        version: found.version,
        line: found.line,
        column: found.column,
    })
}
