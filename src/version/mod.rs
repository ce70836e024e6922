//! Version layer for release checks
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Extractor  │────▶│   Checker   │◀────│  Registry   │
//! │ (read files)│     │ (compare)   │     │  (fetch)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`extractor`]: reads configured sources into a `VersionSet`
//! - [`checker`]: consistency and release status checks
//! - [`registry`]: Registry trait for fetching published versions
//! - [`registries`]: Concrete registry implementations (PyPI)
//! - [`error`]: Error types and exit codes
//! - [`types`]: `VersionEntry`, `VersionSet`, `PublishedVersions`

pub mod checker;
pub mod error;
pub mod extractor;
pub mod registries;
pub mod registry;
pub mod types;
