use crate::infrastructure::sources::SourceError;

/// The only caller-visible feed failure: the primary batch fetch did not
/// complete. Enrichment failures are swallowed per item and precondition
/// violations are no-ops, so nothing else ever surfaces.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("post source unavailable: {0}")]
    SourceUnavailable(String),
}

impl From<SourceError> for FeedError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Unavailable(msg) => FeedError::SourceUnavailable(msg),
            SourceError::Other(e) => FeedError::SourceUnavailable(e.to_string()),
        }
    }
}
