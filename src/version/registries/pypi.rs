//! PyPI registry client for fetching published Python package versions

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::debug;

use crate::config::RegistryConfig;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::PublishedVersions;

/// PyPI registry client
pub struct PypiRegistry {
    client: Client,
    base_url: String,
}

impl PypiRegistry {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        Self::new(config.url.clone(), config.timeout())
    }
}

/// PyPI JSON API response structure
#[derive(Debug, Deserialize)]
struct PypiResponse {
    /// Keys are release versions, values are the uploaded files (unused)
    releases: HashMap<String, IgnoredAny>,
}

#[async_trait]
impl Registry for PypiRegistry {
    fn name(&self) -> &'static str {
        "PyPI"
    }

    async fn fetch_published_versions(
        &self,
        package_name: &str,
    ) -> Result<PublishedVersions, RegistryError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package_name);
        debug!("Fetching PyPI package: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if response.status() != reqwest::StatusCode::OK {
            return Err(RegistryError::UnexpectedStatus(response.status().as_u16()));
        }

        let pypi_response: PypiResponse = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        debug!(
            "Found {} versions for package {}",
            pypi_response.releases.len(),
            package_name
        );

        Ok(PublishedVersions::new(pypi_response.releases.into_keys()))
    }
}
