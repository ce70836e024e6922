//! Registry trait for fetching published versions

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::PublishedVersions;

/// Trait for fetching the versions a registry has already published
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Human readable registry name, e.g. "PyPI"
    fn name(&self) -> &'static str;

    /// Fetches every published version of a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package on the registry
    ///
    /// # Returns
    /// * `Ok(PublishedVersions)` - All published versions
    /// * `Err(RegistryError)` - If the fetch fails or the response is malformed
    async fn fetch_published_versions(
        &self,
        package_name: &str,
    ) -> Result<PublishedVersions, RegistryError>;
}
