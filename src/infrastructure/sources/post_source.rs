use crate::domain::feed::Cursor;
use crate::domain::post::RawPost;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("post source unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// One raw batch from the backing store, together with the resume token for
/// the next fetch. `last_cursor: None` means the store has nothing past this
/// batch.
#[derive(Debug, Clone)]
pub struct PostBatch {
    pub items: Vec<RawPost>,
    pub last_cursor: Option<Cursor>,
}

/// Cursor-paginated post feed. Implementations must return items in
/// non-increasing recency order; the ranker trusts arrival order and never
/// re-sorts. Returning fewer items than `limit` signals exhaustion.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_batch(
        &self,
        cursor: Option<&Cursor>,
        limit: usize,
    ) -> Result<PostBatch, SourceError>;
}
