//! Package index access
//!
//! This module provides:
//! - HTTP client shared foundation
//! - PyPI JSON API adapter
//! - The [`PackageIndex`] seam used by the CLI and the HTTP server

mod client;
mod pypi;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use pypi::{PackageInfo, PyPiIndex, PYPI_API_URL};

use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for package index adapters
#[async_trait]
pub trait PackageIndex: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the metadata document exactly as the index serves it
    async fn fetch_raw(&self, package: &str) -> Result<serde_json::Value, RegistryError>;

    /// Fetch typed metadata of the latest release
    async fn fetch_info(&self, package: &str) -> Result<PackageInfo, RegistryError>;
}

/// PyPI adapter with default client settings
pub fn default_index() -> Result<PyPiIndex, RegistryError> {
    Ok(PyPiIndex::new(HttpClient::new()?))
}
