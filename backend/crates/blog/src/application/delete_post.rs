//! Delete Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::PostRepository;
use crate::error::{BlogError, BlogResult};

pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    /// Only the author may delete; a missing post is `TargetNotFound` (400)
    pub async fn execute(&self, user_id: UserId, id: PostId) -> BlogResult<()> {
        let post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(BlogError::TargetNotFound)?;

        if !post.is_authored_by(user_id) {
            tracing::warn!(post_id = %id, user_id = %user_id, "Delete by non-author");
            return Err(BlogError::NotAuthor);
        }

        if !self.repo.delete(id).await? {
            return Err(BlogError::TargetNotFound);
        }

        tracing::info!(post_id = %id, user_id = %user_id, "Post deleted");

        Ok(())
    }
}
