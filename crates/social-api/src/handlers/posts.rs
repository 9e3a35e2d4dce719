//! Post handlers
//!
//! Endpoints for the feed, post CRUD, comments on posts, and the
//! like/dislike toggle.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use social_core::entities::ReactionKind;
use social_service::{
    CommentResponse, CommentService, CreateCommentRequest, CreatePostRequest, FeedQuery,
    FeedService, PostDetailResponse, PostResponse, PostService, ReactionService,
    ReactionToggleResponse, UpdatePostRequest,
};

use crate::extractors::{AuthUser, PostIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List the viewer's feed: own posts plus posts of followed users,
/// narrowed by the optional title/hashtag/date filters, newest first
///
/// GET /posts?title=&hashtag=&date=
pub async fn list_posts(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<FeedQuery>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = FeedService::new(state.service_context());
    let posts = service.compose_feed(auth.user_id, query).await?;
    Ok(Json(posts))
}

/// Create a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.create_post(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List posts the viewer has LIKEd
///
/// GET /posts/liked-posts
pub async fn liked_posts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = FeedService::new(state.service_context());
    let posts = service.liked_posts(auth.user_id).await?;
    Ok(Json(posts))
}

/// Get a post with hashtags, reaction counts, and comments
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<PostIdPath>,
) -> ApiResult<Json<PostDetailResponse>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let response = service.get_post(post_id).await?;
    Ok(Json(response))
}

/// Update a post (owner only)
///
/// PATCH /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostDetailResponse>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let response = service.update_post(auth.user_id, post_id, request).await?;
    Ok(Json(response))
}

/// Delete a post (owner only)
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
) -> ApiResult<NoContent> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    service.delete_post(auth.user_id, post_id).await?;
    Ok(NoContent)
}

/// Create a comment on a post
///
/// POST /posts/{post_id}/add-comment
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let post_id = path.post_id()?;

    let service = CommentService::new(state.service_context());
    let response = service
        .create_comment(auth.user_id, post_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Toggle a LIKE reaction on a post
///
/// POST /posts/{post_id}/like - 201 when the reaction is added,
/// 200 when it is changed or removed
pub async fn like_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
) -> ApiResult<(StatusCode, Json<ReactionToggleResponse>)> {
    toggle_reaction(&state, auth, path, ReactionKind::Like).await
}

/// Toggle a DISLIKE reaction on a post
///
/// POST /posts/{post_id}/dislike - 201 when the reaction is added,
/// 200 when it is changed or removed
pub async fn dislike_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
) -> ApiResult<(StatusCode, Json<ReactionToggleResponse>)> {
    toggle_reaction(&state, auth, path, ReactionKind::Dislike).await
}

async fn toggle_reaction(
    state: &AppState,
    auth: AuthUser,
    path: PostIdPath,
    kind: ReactionKind,
) -> ApiResult<(StatusCode, Json<ReactionToggleResponse>)> {
    let post_id = path.post_id()?;

    let service = ReactionService::new(state.service_context());
    let response = service.toggle(auth.user_id, post_id, kind).await?;

    let status = if response.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(response)))
}
