//! Parser layer
//! - traits.rs: VersionParser trait definition
//! - types.rs: Common types (FoundVersion) and quote handling
//! - sphinx_conf.rs: Sphinx docs `conf.py` parser
//! - toml_key.rs: TOML key path parser (Cargo.toml, pyproject.toml)

pub mod sphinx_conf;
pub mod toml_key;
pub mod traits;
pub mod types;

pub use sphinx_conf::SphinxConfParser;
pub use toml_key::TomlVersionParser;
pub use traits::{ParseError, VersionParser};
pub use types::FoundVersion;
