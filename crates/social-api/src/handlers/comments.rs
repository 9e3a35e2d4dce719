//! Comment handlers
//!
//! Endpoints for the author's comment listing and comment mutation.
//! Comment creation lives on the post routes (`/posts/{id}/add-comment`).

use axum::{
    extract::{Path, State},
    Json,
};
use social_service::{CommentResponse, CommentService, UpdateCommentRequest};

use crate::extractors::{AuthUser, CommentIdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List the current user's comments, newest first
///
/// GET /comments
pub async fn list_comments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list_own_comments(auth.user_id).await?;
    Ok(Json(comments))
}

/// Get a comment
///
/// GET /comments/{comment_id}
pub async fn get_comment(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<Json<CommentResponse>> {
    let comment_id = path.comment_id()?;

    let service = CommentService::new(state.service_context());
    let response = service.get_comment(comment_id).await?;
    Ok(Json(response))
}

/// Update a comment (author only)
///
/// PATCH /comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let comment_id = path.comment_id()?;

    let service = CommentService::new(state.service_context());
    let response = service
        .update_comment(auth.user_id, comment_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a comment (author only)
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<NoContent> {
    let comment_id = path.comment_id()?;

    let service = CommentService::new(state.service_context());
    service.delete_comment(auth.user_id, comment_id).await?;
    Ok(NoContent)
}
