//! Registry test utilities

use async_trait::async_trait;

use release_check::version::error::RegistryError;
use release_check::version::registry::Registry;
use release_check::version::types::PublishedVersions;

/// Mock registry for testing
pub struct MockRegistry {
    versions: Option<Vec<String>>,
}

impl MockRegistry {
    /// A registry that lists the given versions for any package
    pub fn with_versions(versions: Vec<&str>) -> Self {
        Self {
            versions: Some(versions.into_iter().map(|v| v.to_string()).collect()),
        }
    }

    /// A registry that answers every request with 404
    pub fn unavailable() -> Self {
        Self { versions: None }
    }
}

#[async_trait]
impl Registry for MockRegistry {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_published_versions(
        &self,
        package_name: &str,
    ) -> Result<PublishedVersions, RegistryError> {
        match &self.versions {
            Some(versions) => Ok(PublishedVersions::new(versions.iter().cloned())),
            None => Err(RegistryError::NotFound(package_name.to_string())),
        }
    }
}
