//! Update Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::{PostDraft, PostRepository};
use crate::error::{BlogError, BlogResult};

pub struct UpdatePostUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> UpdatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    /// Only the author may update; a missing post is `TargetNotFound` (400)
    pub async fn execute(&self, user_id: UserId, id: PostId, draft: PostDraft) -> BlogResult<()> {
        let post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(BlogError::TargetNotFound)?;

        if !post.is_authored_by(user_id) {
            tracing::warn!(post_id = %id, user_id = %user_id, "Update by non-author");
            return Err(BlogError::NotAuthor);
        }

        // deleted between the lookup and the write
        if !self.repo.update(id, &draft).await? {
            return Err(BlogError::TargetNotFound);
        }

        tracing::info!(post_id = %id, user_id = %user_id, "Post updated");

        Ok(())
    }
}
