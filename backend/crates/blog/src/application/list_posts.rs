//! List Posts Use Case

use std::sync::Arc;

use crate::domain::{Post, PostRepository};
use crate::error::BlogResult;

pub struct ListPostsUseCase<P>
where
    P: PostRepository,
{
    repo: Arc<P>,
}

impl<P> ListPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> BlogResult<Vec<Post>> {
        self.repo.list().await
    }
}
