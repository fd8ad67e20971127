use super::error::FeedError;
use super::model::FeedPage;
use crate::domain::post::{Post, RawPost};
use crate::infrastructure::config::FeedConfig;
use crate::infrastructure::sources::{AuthorDirectory, PostSource};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

pub struct FeedRanker {
    source: Arc<dyn PostSource>,
    authors: Arc<dyn AuthorDirectory>,
    overfetch_factor: usize,
}

impl FeedRanker {
    pub fn new(
        source: Arc<dyn PostSource>,
        authors: Arc<dyn AuthorDirectory>,
        overfetch_factor: usize,
    ) -> Self {
        Self {
            source,
            authors,
            overfetch_factor,
        }
    }

    pub fn from_config(
        source: Arc<dyn PostSource>,
        authors: Arc<dyn AuthorDirectory>,
        config: &FeedConfig,
    ) -> Self {
        Self::new(source, authors, config.overfetch_factor)
    }
}

#[async_trait]
pub trait FeedRankerApi: Send + Sync {
    /// Build a fresh first page. Over-fetches `page_size * overfetch_factor`
    /// raw items so the preferred-language partition has material to work
    /// with, then emits at most `page_size` posts. An empty
    /// `preferred_language` means no preference.
    ///
    /// Only a failure of the batch fetch itself surfaces as an error; author
    /// enrichment is best-effort per item.
    async fn load_initial(
        &self,
        preferred_language: &str,
        page_size: usize,
    ) -> Result<FeedPage, FeedError>;

    /// Extend `page` with up to `page_size` further posts, deduplicated
    /// against everything already in it. No-op (returns a clone) when the
    /// page is exhausted, marked in-flight, or has no cursor, so redundant
    /// scroll-triggered calls are always safe.
    ///
    /// Prioritization is only attempted while the page is still
    /// preferred-language saturated; once a fetch under-delivers, later
    /// appends stay in pure arrival order.
    async fn load_more(
        &self,
        page: &FeedPage,
        preferred_language: &str,
        page_size: usize,
    ) -> Result<FeedPage, FeedError>;
}

#[async_trait]
impl FeedRankerApi for FeedRanker {
    async fn load_initial(
        &self,
        preferred_language: &str,
        page_size: usize,
    ) -> Result<FeedPage, FeedError> {
        let fetch_size = page_size * self.overfetch_factor;
        let batch = self.source.fetch_batch(None, fetch_size).await?;
        let received = batch.items.len();
        let cursor = batch.last_cursor;

        let mut seen = HashSet::new();
        let fresh = self.ingest(batch.items, &mut seen).await;

        let (ranked, preferred_count) = rank_batch(fresh, preferred_language);
        let saturated = !preferred_language.is_empty() && preferred_count >= page_size;
        let posts: Vec<Post> = ranked.into_iter().take(page_size).collect();
        let exhausted = received < fetch_size || cursor.is_none();

        tracing::info!(
            requested = fetch_size,
            received,
            emitted = posts.len(),
            saturated,
            exhausted,
            "initial feed page loaded"
        );

        Ok(FeedPage {
            posts,
            cursor,
            preferred_language_saturated: saturated,
            exhausted,
            in_flight: false,
        })
    }

    async fn load_more(
        &self,
        page: &FeedPage,
        preferred_language: &str,
        page_size: usize,
    ) -> Result<FeedPage, FeedError> {
        if page.exhausted || page.in_flight {
            return Ok(page.clone());
        }
        let Some(cursor) = page.cursor.as_ref() else {
            return Ok(page.clone());
        };

        let fetch_size = page_size * self.overfetch_factor;
        let batch = self.source.fetch_batch(Some(cursor), fetch_size).await?;
        let received = batch.items.len();

        // Dedup against everything already shown, not just within the batch.
        let mut seen = page.ids();
        let fresh = self.ingest(batch.items, &mut seen).await;

        let (ranked, preferred_count) = if page.preferred_language_saturated {
            rank_batch(fresh, preferred_language)
        } else {
            (fresh, 0)
        };
        let saturated = page.preferred_language_saturated && preferred_count >= page_size;

        let mut next = page.clone();
        next.posts.extend(ranked.into_iter().take(page_size));
        next.cursor = batch.last_cursor;
        next.preferred_language_saturated = saturated;
        next.exhausted = received < fetch_size || next.cursor.is_none();
        next.in_flight = false;

        tracing::info!(
            requested = fetch_size,
            received,
            total = next.posts.len(),
            saturated = next.preferred_language_saturated,
            exhausted = next.exhausted,
            "feed page extended"
        );

        Ok(next)
    }
}

impl FeedRanker {
    /// Normalize, deduplicate, and best-effort enrich one raw batch. `seen`
    /// carries the ids already emitted; arrival order is preserved. Lookup
    /// failures leave `author_name` unset and never fail the batch.
    async fn ingest(&self, items: Vec<RawPost>, seen: &mut HashSet<String>) -> Vec<Post> {
        let mut posts = Vec::with_capacity(items.len());
        for raw in items {
            if !seen.insert(raw.id.clone()) {
                continue;
            }

            let mut post = Post::from_raw(raw);
            if post.author_name.is_none() {
                if let Some(author_id) = post.author_id.clone() {
                    match self.authors.resolve_name(&author_id).await {
                        Ok(name) => post.author_name = Some(name),
                        Err(err) => {
                            tracing::warn!(
                                post_id = %post.id,
                                author_id = %author_id,
                                error = %err,
                                "author lookup failed, emitting post without name"
                            );
                        }
                    }
                }
            }
            posts.push(post);
        }
        posts
    }
}

/// Stable partition of a batch: posts in the preferred language first, the
/// rest after, relative arrival order preserved within each group. Returns
/// the reordered batch and the preferred-language count. An empty preference
/// passes the batch through untouched.
fn rank_batch(posts: Vec<Post>, preferred_language: &str) -> (Vec<Post>, usize) {
    if preferred_language.is_empty() {
        return (posts, 0);
    }

    let (mut preferred, other): (Vec<Post>, Vec<Post>) = posts
        .into_iter()
        .partition(|p| p.language == preferred_language);
    let preferred_count = preferred.len();
    preferred.extend(other);
    (preferred, preferred_count)
}
