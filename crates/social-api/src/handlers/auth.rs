//! Authentication handlers
//!
//! Endpoints for registration, login, token refresh, and logout.

use axum::{extract::State, Json};
use social_service::{
    AuthResponse, AuthService, DetailResponse, LoginRequest, LogoutRequest, RefreshTokenRequest,
    RegisterRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created, ResetContent};
use crate::state::AppState;

/// Register a new user
///
/// POST /users/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Rotate tokens using a refresh token
///
/// POST /users/token/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh_tokens(request).await?;
    Ok(Json(response))
}

/// Logout by blacklisting the refresh token
///
/// POST /users/logout - 205 on success, 400 if the token is missing or invalid
pub async fn logout(
    State(state): State<AppState>,
    request: Option<Json<LogoutRequest>>,
) -> ApiResult<ResetContent<Json<DetailResponse>>> {
    let Some(Json(request)) = request else {
        return Err(crate::response::ApiError::invalid_query(
            "Refresh token is required",
        ));
    };

    let service = AuthService::new(state.service_context());
    service.logout(request).await?;
    Ok(ResetContent(Json(DetailResponse::new(
        "Successfully logged out",
    ))))
}
