//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    // Mix in the pid so parallel test binaries don't collide on data
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    u64::from(std::process::id()) * 1_000_000 + n
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: CurrentUserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// Current user response
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub email: String,
}

/// User entry in listings
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// Follower/following entry
#[derive(Debug, Deserialize)]
pub struct FollowUserResponse {
    pub id: String,
    pub full_name: Option<String>,
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub user_id: String,
    pub first_name: Option<String>,
    pub city: Option<String>,
    pub followers_count: i64,
    pub following_count: i64,
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub hashtags: Vec<String>,
}

impl CreatePostRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Post {suffix}"),
            content: format!("Content of post {suffix}"),
            hashtags: vec![],
        }
    }

    pub fn with_hashtags(hashtags: &[&str]) -> Self {
        Self {
            hashtags: hashtags.iter().map(ToString::to_string).collect(),
            ..Self::unique()
        }
    }
}

/// Post entry in feed listings
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub hashtags: Vec<String>,
}

/// Detailed post response
#[derive(Debug, Deserialize)]
pub struct PostDetailResponse {
    pub id: String,
    pub title: String,
    pub hashtags: Vec<String>,
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub comments: Vec<CommentResponse>,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub content: String,
}

/// Hashtag response
#[derive(Debug, Deserialize)]
pub struct HashtagResponse {
    pub id: String,
    pub name: String,
}
