use crate::domain::post::Post;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Opaque resume token handed out by the paginated source. The ranker never
/// inspects it, only passes it back verbatim on the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The ordered, deduplicated slice of the feed currently visible, plus the
/// pagination state needed to extend it.
///
/// A page is created empty on mount or refresh and mutated only through
/// [`FeedRankerApi::load_initial`](super::FeedRankerApi::load_initial)
/// (replace) and [`FeedRankerApi::load_more`](super::FeedRankerApi::load_more)
/// (append).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    pub posts: Vec<Post>,
    /// Marks the true end of the last consumed source batch, not the visual
    /// truncation point, so nothing is skipped between pages.
    pub cursor: Option<Cursor>,
    /// While true, the source is still yielding enough preferred-language
    /// content per page to justify prioritizing it. Once false it stays
    /// false for this page's lifetime.
    pub preferred_language_saturated: bool,
    /// True once a fetch returned fewer raw items than requested.
    pub exhausted: bool,
    /// Caller-managed guard; `load_more` on an in-flight page is a no-op.
    #[serde(skip)]
    pub in_flight: bool,
}

impl FeedPage {
    pub fn empty() -> Self {
        Self {
            posts: Vec::new(),
            cursor: None,
            preferred_language_saturated: false,
            exhausted: false,
            in_flight: false,
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn ids(&self) -> HashSet<String> {
        self.posts.iter().map(|p| p.id.clone()).collect()
    }
}

impl Default for FeedPage {
    fn default() -> Self {
        Self::empty()
    }
}
