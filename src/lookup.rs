//! Package metadata lookup on a background task
//!
//! The request runs on a spawned tokio task and hands its single result
//! back through a oneshot channel. There is no cancellation: dropping the
//! [`PendingLookup`] discards whatever the task produces.

use crate::error::RegistryError;
use crate::registry::{PackageIndex, PackageInfo};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Handle to a lookup that is still running
#[derive(Debug)]
pub struct PendingLookup {
    package: String,
    receiver: oneshot::Receiver<Result<PackageInfo, RegistryError>>,
}

impl PendingLookup {
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Wait for the lookup to complete
    pub async fn wait(self) -> Result<PackageInfo, RegistryError> {
        let package = self.package;
        self.receiver.await.unwrap_or_else(|_| {
            Err(RegistryError::network_error(
                package,
                "PyPI",
                "lookup task ended without a result",
            ))
        })
    }
}

/// Start fetching metadata for `package` in the background
pub fn spawn_lookup<I>(index: Arc<I>, package: &str) -> PendingLookup
where
    I: PackageIndex + ?Sized + 'static,
{
    let (sender, receiver) = oneshot::channel();
    let name = package.to_string();

    tokio::spawn(async move {
        let result = index.fetch_info(&name).await;
        if sender.send(result).is_err() {
            tracing::debug!("lookup result for {} discarded", name);
        }
    });

    PendingLookup {
        package: package.to_string(),
        receiver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Mock index for testing
    struct MockIndex {
        calls: AtomicUsize,
        delay: Duration,
    }

    impl MockIndex {
        fn new(delay: Duration) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay,
            }
        }
    }

    #[async_trait]
    impl PackageIndex for MockIndex {
        fn registry_name(&self) -> &'static str {
            "Mock"
        }

        async fn fetch_raw(&self, package: &str) -> Result<serde_json::Value, RegistryError> {
            Ok(serde_json::json!({ "info": { "name": package, "version": "1.0.0" } }))
        }

        async fn fetch_info(&self, package: &str) -> Result<PackageInfo, RegistryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if package == "missing" {
                return Err(RegistryError::package_not_found(package, "Mock"));
            }
            let raw = self.fetch_raw(package).await?;
            PackageInfo::from_json(package, raw)
        }
    }

    #[tokio::test]
    async fn test_lookup_delivers_result() {
        let index = Arc::new(MockIndex::new(Duration::from_millis(10)));
        let pending = spawn_lookup(index.clone(), "requests");
        assert_eq!(pending.package(), "requests");

        let info = pending.wait().await.unwrap();
        assert_eq!(info.name, "requests");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(index.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_lookup_delivers_error() {
        let index = Arc::new(MockIndex::new(Duration::ZERO));
        let err = spawn_lookup(index, "missing").wait().await.unwrap_err();
        assert!(matches!(err, RegistryError::PackageNotFound { .. }));
    }

    #[tokio::test]
    async fn test_dropped_handle_discards_result() {
        let index = Arc::new(MockIndex::new(Duration::from_millis(20)));
        drop(spawn_lookup(index.clone(), "requests"));

        tokio::time::sleep(Duration::from_millis(60)).await;
        // The task still ran to completion; its result went nowhere
        assert_eq!(index.calls.load(Ordering::SeqCst), 1);
    }
}
