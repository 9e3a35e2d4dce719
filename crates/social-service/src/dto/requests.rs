//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies that carry user input
//! also implement `Validate` for field-level validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh: String,
}

/// Logout request carrying the refresh token to blacklist
#[derive(Debug, Clone, Deserialize)]
pub struct LogoutRequest {
    pub refresh: String,
}

// ============================================================================
// User / Profile Requests
// ============================================================================

/// Update current user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

/// Update profile request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 63, message = "First name must be at most 63 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 63, message = "Last name must be at most 63 characters"))]
    pub last_name: Option<String>,

    pub bio: Option<String>,

    #[validate(length(max = 16, message = "Phone must be at most 16 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 63, message = "City must be at most 63 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 63, message = "Country must be at most 63 characters"))]
    pub country: Option<String>,

    /// Storage reference for the avatar image
    pub avatar: Option<String>,
}

/// Query parameters for listing users
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSearchQuery {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 63, message = "Title must be 1-63 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    /// Hashtag names to attach; resolved with get-or-create semantics
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// Update post request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 63, message = "Title must be 1-63 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,

    /// When present, replaces the post's hashtag set
    pub hashtags: Option<Vec<String>>,
}

/// Query parameters for the feed endpoint. The date stays a raw string
/// here; the feed composer parses it and rejects malformed input before
/// running any query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    pub title: Option<String>,
    pub hashtag: Option<String>,
    pub date: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,
}

// ============================================================================
// Hashtag Requests
// ============================================================================

/// Create hashtag request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHashtagRequest {
    #[validate(length(min = 1, max = 63, message = "Name must be 1-63 characters"))]
    pub name: String,
}

/// Update hashtag request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateHashtagRequest {
    #[validate(length(min = 1, max = 63, message = "Name must be 1-63 characters"))]
    pub name: String,
}
