//! API DTOs

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::Post;

/// Post as returned to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub active: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            active: post.active,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// `GET /post?id=`
#[derive(Debug, Default, Deserialize)]
pub struct PostQuery {
    pub id: Option<String>,
}
