//! Registry implementations for fetching published versions

pub mod pypi;

pub use pypi::PypiRegistry;
