//! Repository Traits

use kernel::id::PostId;

use crate::domain::post::{NewPost, Post, PostDraft};
use crate::error::BlogResult;

#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// All posts ordered by id
    async fn list(&self) -> BlogResult<Vec<Post>>;

    async fn find_by_id(&self, id: PostId) -> BlogResult<Option<Post>>;

    /// Insert and return the stored post
    async fn create(&self, post: &NewPost) -> BlogResult<Post>;

    /// Overwrite title, content and active; bumps `updated_at`
    ///
    /// Returns `false` when no post has that id.
    async fn update(&self, id: PostId, draft: &PostDraft) -> BlogResult<bool>;

    /// Returns `false` when no post has that id
    async fn delete(&self, id: PostId) -> BlogResult<bool>;
}
