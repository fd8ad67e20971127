use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A post document exactly as the backing store hands it over. Every field
/// the store is allowed to omit is optional here; nothing downstream reads
/// a `RawPost` directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPost {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "authorId", default)]
    pub author_id: Option<String>,
    #[serde(rename = "authorName", default)]
    pub author_name: Option<String>,
    #[serde(rename = "likeCount", default)]
    pub like_count: Option<i64>,
    #[serde(rename = "commentCount", default)]
    pub comment_count: Option<i64>,
    #[serde(rename = "likedBy", default)]
    pub liked_by: Option<HashSet<String>>,
}

/// A normalized feed entry. Constructed only through [`Post::from_raw`] or
/// [`compose_post`](super::compose_post), so the defaulting rules hold for
/// every post the crate ever emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub author_id: Option<String>,
    pub author_name: Option<String>,
    pub like_count: i64,
    pub comment_count: i64,
    pub liked_by: HashSet<String>,
}

impl Post {
    /// Normalize a raw store document. Missing engagement fields default to
    /// zero/empty; this runs exactly once, at the ingestion boundary.
    pub fn from_raw(raw: RawPost) -> Self {
        Self {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            content: raw.content.unwrap_or_default(),
            language: raw.language.unwrap_or_default(),
            created_at: raw.created_at,
            author_id: raw.author_id,
            author_name: raw.author_name,
            like_count: raw.like_count.unwrap_or(0),
            comment_count: raw.comment_count.unwrap_or(0),
            liked_by: raw.liked_by.unwrap_or_default(),
        }
    }

    pub fn liked_by_user(&self, user_id: &str) -> bool {
        self.liked_by.contains(user_id)
    }

    /// Toggle a user's like. Returns true if the post is liked afterwards.
    /// The count never goes below zero, even if it disagrees with `liked_by`.
    pub fn toggle_like(&mut self, user_id: &str) -> bool {
        if self.liked_by.remove(user_id) {
            self.like_count = (self.like_count - 1).max(0);
            false
        } else {
            self.liked_by.insert(user_id.to_string());
            self.like_count += 1;
            true
        }
    }

    pub fn record_comment(&mut self) {
        self.comment_count += 1;
    }
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub user_id: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}
