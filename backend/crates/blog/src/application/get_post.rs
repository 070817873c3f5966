//! Get Post Use Case

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::{Post, PostRepository};
use crate::error::{BlogError, BlogResult};

pub struct GetPostUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> GetPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    /// Missing posts are `PostNotFound` (404)
    pub async fn execute(&self, id: PostId) -> BlogResult<Post> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(BlogError::PostNotFound)
    }
}
