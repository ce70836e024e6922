//! `commitcheck` and `releasecheck` operations
//!
//! The checks return an [`Outcome`] on success and an [`AuditError`]
//! otherwise; each carries the process exit code it maps to. `run_*` wire a
//! check to a [`Reporter`] and return that exit code.

use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::config::AuditConfig;
use crate::report::Reporter;
use crate::version::checker::{ReleaseStatus, check_consistency, check_release};
use crate::version::error::{AuditError, EXIT_FAILURE, EXIT_SUCCESS, RegistryError};
use crate::version::extractor::collect_versions;
use crate::version::registry::Registry;
use crate::version::types::{PublishedVersions, VersionString};

/// Result of a successful check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All sources agree (commitcheck)
    Consistent { version: VersionString },
    /// Sources agree and the version is not on the registry yet
    Unreleased {
        version: VersionString,
        published: PublishedVersions,
    },
    /// Sources agree but the version has already been published
    AlreadyPublished {
        version: VersionString,
        published: PublishedVersions,
    },
}

impl Outcome {
    pub fn version(&self) -> &str {
        match self {
            Outcome::Consistent { version }
            | Outcome::Unreleased { version, .. }
            | Outcome::AlreadyPublished { version, .. } => version,
        }
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Consistent { .. } | Outcome::Unreleased { .. } => EXIT_SUCCESS,
            Outcome::AlreadyPublished { .. } => EXIT_FAILURE,
        }
    }
}

/// Extract every configured version and require them to be identical
pub fn internal_version(root: &Path, config: &AuditConfig) -> Result<VersionString, AuditError> {
    config.validate()?;
    let set = collect_versions(root, &config.sources)?;
    check_consistency(&set, config.sources.len())
}

/// Run the consistency check only
pub fn commit_check(root: &Path, config: &AuditConfig) -> Result<Outcome, AuditError> {
    let version = internal_version(root, config)?;
    Ok(Outcome::Consistent { version })
}

/// Look up `version` on the registry
pub async fn release_status<R: Registry + ?Sized>(
    version: VersionString,
    config: &AuditConfig,
    registry: &R,
) -> Result<Outcome, AuditError> {
    let published = registry.fetch_published_versions(&config.package).await?;
    info!(
        "{} lists {} versions of {}",
        registry.name(),
        published.len(),
        config.package
    );

    Ok(match check_release(&version, &published) {
        ReleaseStatus::Unreleased => Outcome::Unreleased { version, published },
        ReleaseStatus::AlreadyPublished => Outcome::AlreadyPublished { version, published },
    })
}

/// `commitcheck`: report the common version or why there is none
pub fn run_commit<O: Write, E: Write>(
    root: &Path,
    config: &AuditConfig,
    reporter: &mut Reporter<O, E>,
) -> io::Result<u8> {
    match commit_check(root, config) {
        Ok(outcome) => {
            reporter.version(outcome.version())?;
            reporter.outcome(&outcome)
        }
        Err(err) => reporter.error(&err),
    }
}

/// `releasecheck`: the consistency check, then the registry lookup
///
/// The registry is only built once the versions agree, so an inconsistent
/// project never touches the network.
pub async fn run_release<R, F, O, E>(
    root: &Path,
    config: &AuditConfig,
    make_registry: F,
    reporter: &mut Reporter<O, E>,
) -> io::Result<u8>
where
    R: Registry,
    F: FnOnce(&AuditConfig) -> Result<R, RegistryError>,
    O: Write,
    E: Write,
{
    let version = match internal_version(root, config) {
        Ok(version) => version,
        Err(err) => return reporter.error(&err),
    };
    reporter.version(&version)?;

    let registry = match make_registry(config) {
        Ok(registry) => registry,
        Err(err) => return reporter.error(&AuditError::from(err)),
    };

    match release_status(version, config, &registry).await {
        Ok(outcome) => reporter.outcome(&outcome),
        Err(err) => reporter.error(&err),
    }
}
