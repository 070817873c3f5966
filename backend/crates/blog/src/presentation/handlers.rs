//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use serde_json::Value;
use std::sync::Arc;

use auth::AuthUser;
use auth::presentation::dto::MessageResponse;
use kernel::id::PostId;

use crate::application::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase, UpdatePostUseCase,
};
use crate::domain::{PostRepository, schema};
use crate::error::{BlogError, BlogResult};
use crate::presentation::dto::{PostQuery, PostResponse};

/// Shared state for post handlers
pub struct BlogAppState<P> {
    pub repo: Arc<P>,
}

impl<P> Clone for BlogAppState<P> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// GET /
pub async fn list_posts<P>(State(state): State<BlogAppState<P>>) -> BlogResult<Json<Vec<PostResponse>>>
where
    P: PostRepository + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /post?id=
pub async fn get_post<P>(
    State(state): State<BlogAppState<P>>,
    query: Result<Query<PostQuery>, QueryRejection>,
) -> BlogResult<Json<PostResponse>>
where
    P: PostRepository + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|_| BlogError::InvalidPostId)?;
    let id = query
        .id
        .as_deref()
        .and_then(PostId::parse)
        .ok_or(BlogError::InvalidPostId)?;

    let post = GetPostUseCase::new(state.repo.clone()).execute(id).await?;
    Ok(Json(post.into()))
}

/// POST /create
pub async fn create_post<P>(
    State(state): State<BlogAppState<P>>,
    AuthUser(user): AuthUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> BlogResult<Json<PostResponse>>
where
    P: PostRepository + Send + Sync + 'static,
{
    let Json(payload) = payload?;
    let draft = schema::validate_new_post(&payload)?;

    let post = CreatePostUseCase::new(state.repo.clone())
        .execute(user.id, draft)
        .await?;
    Ok(Json(post.into()))
}

/// PUT /update
pub async fn update_post<P>(
    State(state): State<BlogAppState<P>>,
    AuthUser(user): AuthUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> BlogResult<Json<MessageResponse>>
where
    P: PostRepository + Send + Sync + 'static,
{
    let Json(payload) = payload?;
    let update = schema::validate_post_update(&payload)?;

    UpdatePostUseCase::new(state.repo.clone())
        .execute(user.id, update.id, update.draft)
        .await?;
    Ok(Json(MessageResponse::new("Post updated successfully")))
}

/// POST /delete/{id}
pub async fn delete_post<P>(
    State(state): State<BlogAppState<P>>,
    AuthUser(user): AuthUser,
    Path(raw_id): Path<String>,
) -> BlogResult<Json<MessageResponse>>
where
    P: PostRepository + Send + Sync + 'static,
{
    let id = PostId::parse(&raw_id).ok_or(BlogError::InvalidPostId)?;

    DeletePostUseCase::new(state.repo.clone())
        .execute(user.id, id)
        .await?;
    Ok(Json(MessageResponse::new("Post deleted successfully")))
}
