//! Version consistency and release status checks
//!
//! Versions are compared as opaque strings: `0.3` and `0.3.0` differ.

use tracing::info;

use crate::version::error::AuditError;
use crate::version::types::{PublishedVersions, VersionSet, VersionString};

/// Check that `set` holds `expected` entries that are all identical.
///
/// Returns the common version.
pub fn check_consistency(set: &VersionSet, expected: usize) -> Result<VersionString, AuditError> {
    if set.len() < expected || set.is_empty() {
        return Err(AuditError::IncompleteVersions {
            expected,
            found: set.len(),
        });
    }

    if !set.mismatches().is_empty() {
        return Err(AuditError::InconsistentVersions(set.clone()));
    }

    let version = set.first().unwrap_or_default().to_string();
    info!("All {} sources declare version {}", set.len(), version);
    Ok(version)
}

/// Whether the current version may still be released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStatus {
    /// No published release carries this version
    Unreleased,
    /// A release with this exact version already exists
    AlreadyPublished,
}

/// Compare the current version against the published ones
pub fn check_release(current: &str, published: &PublishedVersions) -> ReleaseStatus {
    if published.contains(current) {
        ReleaseStatus::AlreadyPublished
    } else {
        ReleaseStatus::Unreleased
    }
}
