//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

/// Persisted post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub active: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

/// Validated, author-independent post fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub active: bool,
}

/// Post about to be inserted; the store assigns id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub draft: PostDraft,
    pub author_id: UserId,
}
