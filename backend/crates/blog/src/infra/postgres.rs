//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use sqlx::PgPool;

use crate::domain::{NewPost, Post, PostDraft, PostRepository};
use crate::error::BlogResult;

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn list(&self) -> BlogResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, active, author_id, created_at, updated_at
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn find_by_id(&self, id: PostId) -> BlogResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, active, author_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn create(&self, post: &NewPost) -> BlogResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, content, active, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, active, author_id, created_at, updated_at
            "#,
        )
        .bind(&post.draft.title)
        .bind(&post.draft.content)
        .bind(post.draft.active)
        .bind(post.author_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_post())
    }

    async fn update(&self, id: PostId, draft: &PostDraft) -> BlogResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE posts SET
                title = $2,
                content = $3,
                active = $4,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(draft.active)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: PostId) -> BlogResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i32,
    title: String,
    content: String,
    active: bool,
    author_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::from_db(self.id),
            title: self.title,
            content: self.content,
            active: self.active,
            author_id: UserId::from_db(self.author_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
