//! Request routing for the JSON API
//!
//! Routing is independent of the socket layer: [`Router::handle`] turns a
//! method, a raw request target and a body into an [`ApiResponse`].

use crate::catalog::Catalog;
use crate::checker::{install_command, Checker, ModuleResolver};
use crate::domain::Platform;
use crate::registry::PackageIndex;
use percent_encoding::percent_decode_str;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tiny_http::Method;
use url::Url;

/// Base used to resolve request targets, which arrive as `/path?query`
const BASE_URL: &str = "http://localhost";

/// Status code and JSON body of a response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    fn not_found() -> Self {
        Self::error(404, "Not found")
    }
}

/// Dispatches API requests to the catalog, the checker and the package index
pub struct Router<R, I: ?Sized> {
    catalog: Catalog,
    checker: Checker<R>,
    index: Arc<I>,
    host_platform: Platform,
}

impl<R, I> Router<R, I>
where
    R: ModuleResolver,
    I: PackageIndex + ?Sized,
{
    pub fn new(catalog: Catalog, checker: Checker<R>, index: Arc<I>) -> Self {
        Self {
            catalog,
            checker,
            index,
            host_platform: Platform::current(),
        }
    }

    /// Platform used when `install_command` gets no `platform` parameter
    pub fn with_host_platform(mut self, platform: Platform) -> Self {
        self.host_platform = platform;
        self
    }

    /// Answer one request
    pub async fn handle(&self, method: &Method, target: &str, body: &[u8]) -> ApiResponse {
        let Ok(url) = Url::parse(BASE_URL).and_then(|base| base.join(target)) else {
            return ApiResponse::not_found();
        };
        let segments: Vec<String> = url
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|s| !s.is_empty())
                    .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        tracing::debug!("{} {}", method, url.path());

        match (method, segments.as_slice()) {
            (Method::Options, _) => ApiResponse::ok(json!({})),
            (Method::Get, ["api", "categories"]) => ApiResponse::ok(json!(self.catalog.categories())),
            (Method::Get, ["api", "modules", category]) => {
                ApiResponse::ok(json!(self.catalog.modules_by_category(category)))
            }
            (Method::Get, ["api", "search"]) => {
                let query = query_param(&url, "q").unwrap_or_default();
                ApiResponse::ok(json!(self.catalog.search(&query)))
            }
            (Method::Post, ["api", "check_imports"]) => self.check_imports(body),
            (Method::Get, ["api", "module_version", name]) => ApiResponse::ok(json!({
                "module": name,
                "version": self.checker.get_version(name),
            })),
            (Method::Get, ["api", "install_command", name]) => {
                let platform = query_param(&url, "platform")
                    .map(|p| Platform::from_name(&p))
                    .unwrap_or(self.host_platform);
                ApiResponse::ok(json!({
                    "module": name,
                    "command": install_command(name, platform),
                }))
            }
            (Method::Get, ["api", "popularity", category]) => {
                let scores: Map<String, Value> = self
                    .catalog
                    .popularity(category)
                    .into_iter()
                    .map(|(name, score)| (name, json!(score)))
                    .collect();
                ApiResponse::ok(Value::Object(scores))
            }
            (Method::Get, ["api", "pypi_info", name]) => self.pypi_info(name).await,
            _ => ApiResponse::not_found(),
        }
    }

    fn check_imports(&self, body: &[u8]) -> ApiResponse {
        let modules: Vec<String> = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|v| v.get("modules").cloned())
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();
        if modules.is_empty() {
            return ApiResponse::error(400, "No modules provided");
        }
        ApiResponse::ok(json!(self.checker.check_importable(&modules)))
    }

    async fn pypi_info(&self, name: &str) -> ApiResponse {
        match self.index.fetch_raw(name).await {
            Ok(document) => ApiResponse::ok(document),
            Err(e) => {
                tracing::warn!("PyPI lookup for {} failed: {}", name, e);
                let status = if e.status_code().is_some() { 404 } else { 500 };
                ApiResponse::error(status, e.display_message())
            }
        }
    }
}

fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
