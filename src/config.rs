use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::parser::toml_key::{CARGO_PACKAGE_VERSION, POETRY_VERSION, PROJECT_VERSION};
use crate::version::error::AuditError;

/// Default PyPI base URL
pub const DEFAULT_REGISTRY_URL: &str = "https://pypi.org";

/// Default package name looked up on the registry
pub const DEFAULT_PACKAGE: &str = "pyarc2";

/// Timeout for the registry request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Config file looked up in the project root when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "release-check.json";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditConfig {
    /// Package name on the registry
    pub package: String,
    pub registry: RegistryConfig,
    /// Version sources, compared in this order
    pub sources: Vec<SourceConfig>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            registry: RegistryConfig::default(),
            sources: default_sources(),
        }
    }
}

/// Registry-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    pub url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REGISTRY_URL.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl RegistryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// A single place a version is read from
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SourceConfig {
    /// Sphinx `conf.py` with a `release = '<ver>'` line
    Sphinx { path: PathBuf },
    /// TOML manifest with a string at a dotted key path
    Toml { path: PathBuf, key: String },
}

impl SourceConfig {
    pub fn path(&self) -> &Path {
        match self {
            SourceConfig::Sphinx { path } | SourceConfig::Toml { path, .. } => path,
        }
    }

    /// Human readable label, e.g. `pyproject.toml tool.poetry.version`
    pub fn label(&self) -> String {
        match self {
            SourceConfig::Sphinx { path } => format!("{} release", path.display()),
            SourceConfig::Toml { path, key } => format!("{} {}", path.display(), key),
        }
    }
}

/// Cargo.toml, both pyproject.toml version fields and the Sphinx docs config
pub fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig::Toml {
            path: PathBuf::from("Cargo.toml"),
            key: CARGO_PACKAGE_VERSION.to_string(),
        },
        SourceConfig::Toml {
            path: PathBuf::from("pyproject.toml"),
            key: PROJECT_VERSION.to_string(),
        },
        SourceConfig::Toml {
            path: PathBuf::from("pyproject.toml"),
            key: POETRY_VERSION.to_string(),
        },
        SourceConfig::Sphinx {
            path: PathBuf::from("docs").join("conf.py"),
        },
    ]
}

/// Command line overrides applied on top of the config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub package: Option<String>,
    pub registry_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl AuditConfig {
    /// Loads the config from `explicit` if given, otherwise from
    /// `<root>/release-check.json` when it exists, otherwise defaults.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, AuditError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            AuditError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
            .map_err(|e| AuditError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(package) = overrides.package {
            self.package = package;
        }
        if let Some(url) = overrides.registry_url {
            self.registry.url = url;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.registry.timeout_ms = timeout_ms;
        }
        self
    }

    pub fn validate(&self) -> Result<(), AuditError> {
        if self.sources.is_empty() {
            return Err(AuditError::Config(
                "no version sources configured".to_string(),
            ));
        }
        if self.package.trim().is_empty() {
            return Err(AuditError::Config("package name is empty".to_string()));
        }
        if self.registry.timeout_ms == 0 {
            return Err(AuditError::Config(
                "registry timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
