//! Follow handlers
//!
//! Endpoints for mutating and listing the follow graph. The dedicated
//! follow/unfollow routes are the authoritative surface; there is no
//! body-driven action toggle.

use axum::{
    extract::{Path, State},
    Json,
};
use social_service::{DetailResponse, FollowService, FollowUserResponse};

use crate::extractors::{AuthUser, UserIdPath};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Follow a user
///
/// POST /users/{user_id}/follow
pub async fn follow_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Created<Json<DetailResponse>>> {
    let target_id = path.user_id()?;

    let service = FollowService::new(state.service_context());
    service.follow(auth.user_id, target_id).await?;
    Ok(Created(Json(DetailResponse::new("Successfully followed."))))
}

/// Unfollow a user
///
/// DELETE /users/{user_id}/follow
pub async fn unfollow_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<NoContent> {
    let target_id = path.user_id()?;

    let service = FollowService::new(state.service_context());
    service.unfollow(auth.user_id, target_id).await?;
    Ok(NoContent)
}

/// List a user's followers
///
/// GET /users/{user_id}/followers
pub async fn list_followers(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<Vec<FollowUserResponse>>> {
    let user_id = path.user_id()?;

    let service = FollowService::new(state.service_context());
    let followers = service.followers(user_id).await?;
    Ok(Json(followers))
}

/// List users a user follows
///
/// GET /users/{user_id}/following
pub async fn list_following(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<Vec<FollowUserResponse>>> {
    let user_id = path.user_id()?;

    let service = FollowService::new(state.service_context());
    let following = service.following(user_id).await?;
    Ok(Json(following))
}

/// List the current user's followers
///
/// GET /users/me/followers
pub async fn my_followers(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FollowUserResponse>>> {
    let service = FollowService::new(state.service_context());
    let followers = service.followers(auth.user_id).await?;
    Ok(Json(followers))
}

/// List users the current user follows
///
/// GET /users/me/following
pub async fn my_following(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FollowUserResponse>>> {
    let service = FollowService::new(state.service_context());
    let following = service.following(auth.user_id).await?;
    Ok(Json(following))
}
