use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum AuthorLookupError {
    #[error("author not found")]
    NotFound,
    #[error("author directory unavailable: {0}")]
    Unavailable(String),
}

/// Resolves an author id to a display name. Callers treat every failure kind
/// the same way, as "name unknown".
#[async_trait]
pub trait AuthorDirectory: Send + Sync {
    async fn resolve_name(&self, author_id: &str) -> Result<String, AuthorLookupError>;
}
