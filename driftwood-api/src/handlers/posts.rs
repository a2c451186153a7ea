//! Post and comment handlers.
//!
//! These are adapters only: parse the path/body, call the store, map the
//! result to JSON. Sort orders match the frontend contract (listings by
//! ascending score, a user's page by ascending creation time).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use driftwood_core::model::{NewPost, Post, PostAuthor};
use driftwood_core::{CommentId, PostId, VoteChoice};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub comment: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Post>> {
    let mut posts = state.store.posts().await;
    posts.sort_by_key(|p| p.score);
    Json(posts)
}

pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<Post>> {
    let mut posts: Vec<Post> = state
        .store
        .posts()
        .await
        .into_iter()
        .filter(|p| p.category == category)
        .collect();
    posts.sort_by_key(|p| p.score);
    Json(posts)
}

pub async fn by_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Json<Vec<Post>> {
    let mut posts: Vec<Post> = state
        .store
        .posts()
        .await
        .into_iter()
        .filter(|p| p.author.name == username)
        .collect();
    posts.sort_by_key(|p| p.created);
    Json(posts)
}

pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Post>> {
    let post = state.store.post(&PostId::new(id)).await?;
    Ok(Json(post))
}

pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(raw): Json<NewPost>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    if raw.title.trim().is_empty() {
        return Err(ApiError::BadRequest("title is required".to_string()));
    }

    let author = PostAuthor {
        name: user.name,
        id: user.id,
    };
    let post = state.store.create_post(raw, author).await;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn delete_post(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.store.delete_post(&PostId::new(id), &user.id).await?;
    Ok(Json(MessageResponse {
        message: "success".to_string(),
    }))
}

/// GET /post/:id/{upvote|downvote|unvote}
pub async fn vote_action(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, action)): Path<(String, String)>,
) -> ApiResult<Json<Post>> {
    let choice = match action.as_str() {
        "upvote" => VoteChoice::Up,
        "downvote" => VoteChoice::Down,
        "unvote" => VoteChoice::None,
        other => {
            return Err(ApiError::BadRequest(format!(
                "unknown vote action: {}",
                other
            )))
        }
    };

    let post = state.store.vote(&PostId::new(id), &user.id, choice).await?;
    Ok(Json(post))
}

/// POST /post/:id with `{"comment": ...}`
pub async fn add_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(body): Json<CommentBody>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    if body.comment.trim().is_empty() {
        return Err(ApiError::BadRequest("comment is required".to_string()));
    }

    let author = PostAuthor {
        name: user.name,
        id: user.id,
    };
    let post = state
        .store
        .add_comment(&PostId::new(id), author, body.comment)
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// DELETE /post/:id/:comment_id
pub async fn delete_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
) -> ApiResult<Json<Post>> {
    let post = state
        .store
        .delete_comment(&PostId::new(id), &user.id, &CommentId::new(comment_id))
        .await?;
    Ok(Json(post))
}
