//! PyPI JSON API adapter
//!
//! Fetches package metadata from PyPI.
//! API endpoint: https://pypi.org/pypi/{package}/json

use crate::error::RegistryError;
use crate::registry::{HttpClient, PackageIndex};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// PyPI API base URL
pub const PYPI_API_URL: &str = "https://pypi.org/pypi";

/// Characters escaped in the package path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?');

/// PyPI adapter
pub struct PyPiIndex {
    client: HttpClient,
    base_url: String,
}

/// PyPI package metadata response
#[derive(Debug, Deserialize)]
struct PyPiResponse {
    info: RawInfo,
    /// Files of the current release
    #[serde(default)]
    urls: Vec<ReleaseFile>,
}

/// The `info` object; PyPI sends `null` or `""` for unset fields
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawInfo {
    name: Option<String>,
    version: Option<String>,
    summary: Option<String>,
    author: Option<String>,
    author_email: Option<String>,
    home_page: Option<String>,
    docs_url: Option<String>,
    license: Option<String>,
    requires_python: Option<String>,
    requires_dist: Option<Vec<String>>,
    project_urls: Option<BTreeMap<String, String>>,
}

/// Release file information
#[derive(Debug, Deserialize)]
struct ReleaseFile {
    /// Upload time for the release file
    upload_time_iso_8601: Option<String>,
}

/// Metadata of the latest release of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub home_page: Option<String>,
    pub docs_url: Option<String>,
    pub license: Option<String>,
    pub requires_python: Option<String>,
    pub requires_dist: Vec<String>,
    pub project_urls: BTreeMap<String, String>,
    /// Earliest upload time among the release's files
    pub released_at: Option<DateTime<Utc>>,
}

impl PackageInfo {
    /// Parse the JSON document served by the PyPI JSON API
    pub fn from_json(package: &str, value: serde_json::Value) -> Result<Self, RegistryError> {
        let response: PyPiResponse =
            serde_json::from_value(value).map_err(|e| RegistryError::InvalidResponse {
                package: package.to_string(),
                registry: "PyPI".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::from_response(package, response))
    }

    fn from_response(package: &str, response: PyPiResponse) -> Self {
        let info = response.info;

        // Earliest upload time among the release files
        let released_at = response
            .urls
            .iter()
            .filter_map(|f| f.upload_time_iso_8601.as_deref())
            .filter_map(|t| t.parse::<DateTime<Utc>>().ok())
            .min();

        Self {
            name: non_empty(info.name).unwrap_or_else(|| package.to_string()),
            version: non_empty(info.version).unwrap_or_default(),
            summary: non_empty(info.summary),
            author: non_empty(info.author),
            author_email: non_empty(info.author_email),
            home_page: non_empty(info.home_page),
            docs_url: non_empty(info.docs_url),
            license: non_empty(info.license),
            requires_python: non_empty(info.requires_python),
            requires_dist: info.requires_dist.unwrap_or_default(),
            project_urls: info.project_urls.unwrap_or_default(),
            released_at,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != "UNKNOWN")
}

impl PyPiIndex {
    /// Create a new PyPI adapter against the public index
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, PYPI_API_URL)
    }

    /// Create an adapter against another index serving the same JSON API
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        let segment = utf8_percent_encode(package, PATH_SEGMENT);
        format!("{}/{}/json", self.base_url, segment)
    }
}

#[async_trait]
impl PackageIndex for PyPiIndex {
    fn registry_name(&self) -> &'static str {
        "PyPI"
    }

    async fn fetch_raw(&self, package: &str) -> Result<serde_json::Value, RegistryError> {
        let url = self.build_url(package);
        self.client
            .get_json(&url, package, self.registry_name())
            .await
    }

    async fn fetch_info(&self, package: &str) -> Result<PackageInfo, RegistryError> {
        let url = self.build_url(package);
        let response: PyPiResponse = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;
        Ok(PackageInfo::from_response(package, response))
    }
}
