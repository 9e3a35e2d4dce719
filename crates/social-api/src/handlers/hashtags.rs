//! Hashtag handlers
//!
//! Endpoints for listing, creating, retrieving, and renaming hashtags.

use axum::{
    extract::{Path, State},
    Json,
};
use social_service::{CreateHashtagRequest, HashtagResponse, HashtagService, UpdateHashtagRequest};

use crate::extractors::{AuthUser, HashtagIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List all hashtags
///
/// GET /hashtags
pub async fn list_hashtags(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<HashtagResponse>>> {
    let service = HashtagService::new(state.service_context());
    let hashtags = service.list_hashtags().await?;
    Ok(Json(hashtags))
}

/// Create a hashtag
///
/// POST /hashtags
pub async fn create_hashtag(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateHashtagRequest>,
) -> ApiResult<Created<Json<HashtagResponse>>> {
    let service = HashtagService::new(state.service_context());
    let response = service.create_hashtag(request).await?;
    Ok(Created(Json(response)))
}

/// Get a hashtag
///
/// GET /hashtags/{hashtag_id}
pub async fn get_hashtag(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<HashtagIdPath>,
) -> ApiResult<Json<HashtagResponse>> {
    let hashtag_id = path.hashtag_id()?;

    let service = HashtagService::new(state.service_context());
    let response = service.get_hashtag(hashtag_id).await?;
    Ok(Json(response))
}

/// Rename a hashtag
///
/// PATCH /hashtags/{hashtag_id}
pub async fn update_hashtag(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<HashtagIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateHashtagRequest>,
) -> ApiResult<Json<HashtagResponse>> {
    let hashtag_id = path.hashtag_id()?;

    let service = HashtagService::new(state.service_context());
    let response = service.update_hashtag(hashtag_id, request).await?;
    Ok(Json(response))
}
