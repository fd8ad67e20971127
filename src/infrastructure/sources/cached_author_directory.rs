use super::author_directory::{AuthorDirectory, AuthorLookupError};
use crate::infrastructure::config::FeedConfig;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_CAPACITY: u64 = 1_000;
const DEFAULT_IDLE: Duration = Duration::from_secs(30 * 60);

/// Memoizing decorator over any [`AuthorDirectory`]. Author display names
/// change rarely, while the feed asks for the same handful of ids on every
/// page, so successful lookups are cached. Failures are never cached.
pub struct CachedAuthorDirectory {
    inner: Arc<dyn AuthorDirectory>,
    cache: Cache<String, String>,
}

impl CachedAuthorDirectory {
    pub fn new(inner: Arc<dyn AuthorDirectory>) -> Self {
        Self::with_settings(inner, DEFAULT_CAPACITY, DEFAULT_IDLE)
    }

    pub fn with_settings(
        inner: Arc<dyn AuthorDirectory>,
        capacity: u64,
        time_to_idle: Duration,
    ) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_idle(time_to_idle)
            .build();
        Self { inner, cache }
    }
}

/// Wrap a directory in the memoizing cache when the config asks for it;
/// otherwise hand back the bare directory.
pub fn author_directory_from_config(
    directory: Arc<dyn AuthorDirectory>,
    config: &FeedConfig,
) -> Arc<dyn AuthorDirectory> {
    if config.author_cache_enabled {
        Arc::new(CachedAuthorDirectory::new(directory))
    } else {
        directory
    }
}

#[async_trait]
impl AuthorDirectory for CachedAuthorDirectory {
    async fn resolve_name(&self, author_id: &str) -> Result<String, AuthorLookupError> {
        if let Some(name) = self.cache.get(author_id).await {
            tracing::debug!(author_id = %author_id, "author cache hit");
            return Ok(name);
        }

        let name = self.inner.resolve_name(author_id).await?;
        self.cache
            .insert(author_id.to_string(), name.clone())
            .await;
        Ok(name)
    }
}
