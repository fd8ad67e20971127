// Test doubles for the feed ranker: a scripted cursor-paginated source and
// controllable author directories. The scripted source serves slices of a
// fixed post list and encodes cursors as indices into it, mirroring the
// "resume after the last raw item" contract of the real store.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use feedrank::domain::feed::Cursor;
use feedrank::domain::post::RawPost;
use feedrank::infrastructure::sources::{
    AuthorDirectory, AuthorLookupError, PostBatch, PostSource, SourceError,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Install the log subscriber for test output. Safe to call from every
/// test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "feedrank=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

pub fn raw_post(id: &str, language: &str) -> RawPost {
    RawPost {
        id: id.to_string(),
        title: Some(format!("title {id}")),
        content: Some(format!("content {id}")),
        language: Some(language.to_string()),
        created_at: Utc::now() - Duration::seconds(1),
        author_id: None,
        author_name: None,
        like_count: None,
        comment_count: None,
        liked_by: None,
    }
}

pub fn raw_post_by(id: &str, language: &str, author_id: &str) -> RawPost {
    let mut post = raw_post(id, language);
    post.author_id = Some(author_id.to_string());
    post
}

pub struct ScriptedSource {
    posts: Vec<RawPost>,
    fail_next: Mutex<bool>,
    pub fetch_count: Mutex<usize>,
}

impl ScriptedSource {
    pub fn new(posts: Vec<RawPost>) -> Arc<Self> {
        Arc::new(Self {
            posts,
            fail_next: Mutex::new(false),
            fetch_count: Mutex::new(0),
        })
    }

    /// Make the next fetch fail with `SourceError::Unavailable`.
    pub fn fail_next(&self) {
        *self.fail_next.lock() = true;
    }
}

#[async_trait]
impl PostSource for ScriptedSource {
    async fn fetch_batch(
        &self,
        cursor: Option<&Cursor>,
        limit: usize,
    ) -> Result<PostBatch, SourceError> {
        if std::mem::take(&mut *self.fail_next.lock()) {
            return Err(SourceError::Unavailable("scripted outage".to_string()));
        }
        *self.fetch_count.lock() += 1;

        let start = match cursor {
            Some(c) => c.as_str().parse::<usize>().expect("scripted cursor") + 1,
            None => 0,
        };
        let end = (start + limit).min(self.posts.len());
        let items = if start < end {
            self.posts[start..end].to_vec()
        } else {
            Vec::new()
        };
        let last_cursor = if items.is_empty() {
            None
        } else {
            Some(Cursor::new((end - 1).to_string()))
        };

        Ok(PostBatch { items, last_cursor })
    }
}

/// Resolves names from a fixed map; unknown ids fail with `NotFound`.
pub struct StaticDirectory {
    names: HashMap<String, String>,
    pub lookup_count: Mutex<usize>,
}

impl StaticDirectory {
    pub fn new(entries: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self {
            names: entries
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
            lookup_count: Mutex::new(0),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::new(&[])
    }
}

#[async_trait]
impl AuthorDirectory for StaticDirectory {
    async fn resolve_name(&self, author_id: &str) -> Result<String, AuthorLookupError> {
        *self.lookup_count.lock() += 1;
        self.names
            .get(author_id)
            .cloned()
            .ok_or(AuthorLookupError::NotFound)
    }
}

/// Fails every lookup, as if the directory backend were down.
pub struct FailingDirectory;

#[async_trait]
impl AuthorDirectory for FailingDirectory {
    async fn resolve_name(&self, _author_id: &str) -> Result<String, AuthorLookupError> {
        Err(AuthorLookupError::Unavailable(
            "directory offline".to_string(),
        ))
    }
}
