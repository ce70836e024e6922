use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;
use crate::version::types::VersionSet;

/// Exit code for a passing check
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for inconsistent or missing versions, bad configuration, or a
/// version that is already released
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for registry failures
pub const EXIT_REGISTRY: u8 = 2;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Could not determine version from {location}")]
    VersionNotFound { location: String },

    #[error("Expected {expected} versions but found {found}")]
    IncompleteVersions { expected: usize, found: usize },

    #[error("Versions are inconsistent:\n{0}")]
    InconsistentVersions(VersionSet),

    #[error("Registry unavailable: {0}")]
    RegistryUnavailable(#[from] RegistryError),
}

impl AuditError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AuditError::RegistryUnavailable(_) => EXIT_REGISTRY,
            _ => EXIT_FAILURE,
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
