pub mod error;
pub mod model;

pub use error::PostValidationError;
pub use model::{Comment, Post, RawPost};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The signed-in user composing a post or comment. Display-name metadata is
/// optional the same way the session provider leaves it optional.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl SessionUser {
    /// Display-name fallback chain: display name, then the local part of the
    /// email address, then a generic placeholder.
    fn visible_name(&self, placeholder: &str) -> String {
        if let Some(name) = self.display_name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        if let Some(local) = self
            .email
            .as_deref()
            .and_then(|e| e.split('@').next())
            .filter(|l| !l.is_empty())
        {
            return local.to_string();
        }
        placeholder.to_string()
    }
}

/// Request to publish a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub language: String,
    pub anonymous: bool,
}

/// Request to add a comment to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub text: String,
}

/// Validate and assemble a post document for the given author. Anonymous
/// posts carry no author id. New posts start with the author's own like
/// already counted.
pub fn compose_post(request: NewPost, author: &SessionUser) -> Result<Post, PostValidationError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(PostValidationError::Invalid(
            "post title must not be empty".to_string(),
        ));
    }
    let content = request.content.trim();
    if content.is_empty() {
        return Err(PostValidationError::Invalid(
            "post content must not be empty".to_string(),
        ));
    }

    let (author_id, author_name) = if request.anonymous {
        (None, Some("Anonymous".to_string()))
    } else {
        (
            Some(author.id.clone()),
            Some(author.visible_name("User")),
        )
    };

    Ok(Post {
        // The store assigns the document id on insert.
        id: String::new(),
        title: title.to_string(),
        content: content.to_string(),
        language: request.language,
        created_at: Utc::now(),
        author_id,
        author_name,
        like_count: 1,
        comment_count: 0,
        liked_by: HashSet::new(),
    })
}

/// Validate and assemble a comment, bumping the post's comment count.
pub fn compose_comment(
    request: NewComment,
    author: &SessionUser,
    post: &mut Post,
) -> Result<Comment, PostValidationError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(PostValidationError::Invalid(
            "comment text must not be empty".to_string(),
        ));
    }

    post.record_comment();

    Ok(Comment {
        text: text.to_string(),
        user_id: author.id.clone(),
        user_name: author.visible_name("Anonymous"),
        created_at: Utc::now(),
    })
}
