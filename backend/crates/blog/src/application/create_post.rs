//! Create Post Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::{NewPost, Post, PostDraft, PostRepository};
use crate::error::BlogResult;

pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    /// Store `draft` authored by `author_id`
    pub async fn execute(&self, author_id: UserId, draft: PostDraft) -> BlogResult<Post> {
        let post = self.repo.create(&NewPost { draft, author_id }).await?;

        tracing::info!(post_id = %post.id, user_id = %author_id, "Post created");

        Ok(post)
    }
}
