//! Release hygiene checks for projects that publish to PyPI.
//!
//! - [`parser`]: extracts version strings from manifests and docs config
//! - [`version`]: version sets, consistency checks and registry clients
//! - [`command`]: the `commitcheck` / `releasecheck` operations
//! - [`config`]: configuration and defaults
//! - [`report`]: user-facing messages and exit codes

pub mod command;
pub mod config;
pub mod parser;
pub mod report;
pub mod version;
