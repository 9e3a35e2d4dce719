//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, comments, follows, hashtags, health, posts, profiles, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(post_routes())
        .merge(comment_routes())
        .merge(hashtag_routes())
}

/// User, auth, profile, and follow routes
fn user_routes() -> Router<AppState> {
    Router::new()
        // Auth lifecycle
        .route("/users/register", post(auth::register))
        .route("/users/login", post(auth::login))
        .route("/users/token/refresh", post(auth::refresh_token))
        .route("/users/logout", post(auth::logout))
        // Current user
        .route("/users/me", get(users::get_current_user))
        .route("/users/me", patch(users::update_current_user))
        .route("/users/me", delete(users::delete_current_user))
        .route("/users/me/profile", get(profiles::get_my_profile))
        .route("/users/me/profile", put(profiles::update_my_profile))
        .route("/users/me/followers", get(follows::my_followers))
        .route("/users/me/following", get(follows::my_following))
        // User listing and retrieval
        .route("/users", get(users::list_users))
        .route("/users/:user_id", get(users::get_user))
        // Follow graph
        .route("/users/:user_id/follow", post(follows::follow_user))
        .route("/users/:user_id/follow", delete(follows::unfollow_user))
        .route("/users/:user_id/followers", get(follows::list_followers))
        .route("/users/:user_id/following", get(follows::list_following))
}

/// Post routes, including the feed, reactions, and comment creation
fn post_routes() -> Router<AppState> {
    Router::new()
        // Feed and post CRUD
        .route("/posts", get(posts::list_posts))
        .route("/posts", post(posts::create_post))
        .route("/posts/liked-posts", get(posts::liked_posts))
        .route("/posts/:post_id", get(posts::get_post))
        .route("/posts/:post_id", patch(posts::update_post))
        .route("/posts/:post_id", delete(posts::delete_post))
        // Comment creation on a post
        .route("/posts/:post_id/add-comment", post(posts::create_comment))
        // Reaction toggles
        .route("/posts/:post_id/like", post(posts::like_post))
        .route("/posts/:post_id/dislike", post(posts::dislike_post))
}

/// Comment routes (listing and mutation)
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", get(comments::list_comments))
        .route("/comments/:comment_id", get(comments::get_comment))
        .route("/comments/:comment_id", patch(comments::update_comment))
        .route("/comments/:comment_id", delete(comments::delete_comment))
}

/// Hashtag routes
fn hashtag_routes() -> Router<AppState> {
    Router::new()
        .route("/hashtags", get(hashtags::list_hashtags))
        .route("/hashtags", post(hashtags::create_hashtag))
        .route("/hashtags/:hashtag_id", get(hashtags::get_hashtag))
        .route("/hashtags/:hashtag_id", patch(hashtags::update_hashtag))
}
