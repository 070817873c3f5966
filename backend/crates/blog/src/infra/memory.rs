//! In-Memory Post Repository
//!
//! Backs tests and database-less runs.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use chrono::Utc;
use kernel::id::PostId;
use tokio::sync::RwLock;

use crate::domain::{NewPost, Post, PostDraft, PostRepository};
use crate::error::BlogResult;

/// Posts keyed by id, ids assigned from 1
#[derive(Clone)]
pub struct MemoryPostRepository {
    posts: Arc<RwLock<BTreeMap<PostId, Post>>>,
    next_id: Arc<AtomicI32>,
}

impl Default for MemoryPostRepository {
    fn default() -> Self {
        Self {
            posts: Arc::default(),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostRepository for MemoryPostRepository {
    async fn list(&self) -> BlogResult<Vec<Post>> {
        Ok(self.posts.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PostId) -> BlogResult<Option<Post>> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn create(&self, post: &NewPost) -> BlogResult<Post> {
        let now = Utc::now();
        let post = Post {
            id: PostId::from_db(self.next_id.fetch_add(1, Ordering::Relaxed)),
            title: post.draft.title.clone(),
            content: post.draft.content.clone(),
            active: post.draft.active,
            author_id: post.author_id,
            created_at: now,
            updated_at: now,
        };

        self.posts.write().await.insert(post.id, post.clone());

        Ok(post)
    }

    async fn update(&self, id: PostId, draft: &PostDraft) -> BlogResult<bool> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.get_mut(&id) else {
            return Ok(false);
        };

        post.title = draft.title.clone();
        post.content = draft.content.clone();
        post.active = draft.active;
        post.updated_at = Utc::now();

        Ok(true)
    }

    async fn delete(&self, id: PostId) -> BlogResult<bool> {
        Ok(self.posts.write().await.remove(&id).is_some())
    }
}
