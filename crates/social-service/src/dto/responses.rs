//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use social_core::entities::{ReactionKind, ReactionOutcome};

// ============================================================================
// Common Response Types
// ============================================================================

/// Simple human-readable detail message
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public user response with profile highlights, used by user listings
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Compact user entry for follower/following listings
#[derive(Debug, Clone, Serialize)]
pub struct FollowUserResponse {
    pub id: String,
    pub full_name: Option<String>,
}

/// Profile response including the follow graph counts
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub followers_count: i64,
    pub following_count: i64,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Post entry in feed listings
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub hashtags: Vec<String>,
}

/// Detailed post view including reaction counts and comments
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub hashtags: Vec<String>,
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Hashtag Responses
// ============================================================================

/// Hashtag response
#[derive(Debug, Clone, Serialize)]
pub struct HashtagResponse {
    pub id: String,
    pub name: String,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Result of a reaction toggle.
///
/// Serializes as a single-key object keyed by the lowercase kind, e.g.
/// `{"like": "LIKE added."}` or `{"dislike": "Changed to DISLIKE."}`.
#[derive(Debug, Clone, Copy)]
pub struct ReactionToggleResponse {
    pub kind: ReactionKind,
    pub outcome: ReactionOutcome,
}

impl ReactionToggleResponse {
    pub fn new(kind: ReactionKind, outcome: ReactionOutcome) -> Self {
        Self { kind, outcome }
    }

    /// Whether the toggle created a new reaction row
    pub fn is_created(&self) -> bool {
        self.outcome.is_created()
    }
}

impl Serialize for ReactionToggleResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.kind.key(), &self.outcome.message(self.kind))?;
        map.end()
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_toggle_serialization() {
        let response =
            ReactionToggleResponse::new(ReactionKind::Like, ReactionOutcome::Added);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"like": "LIKE added."}));

        let response =
            ReactionToggleResponse::new(ReactionKind::Dislike, ReactionOutcome::Changed);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"dislike": "Changed to DISLIKE."}));

        let response =
            ReactionToggleResponse::new(ReactionKind::Like, ReactionOutcome::Removed);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"like": "LIKE removed."}));
    }

    #[test]
    fn test_detail_response() {
        let json = serde_json::to_value(DetailResponse::new("Successfully followed.")).unwrap();
        assert_eq!(json, serde_json::json!({"detail": "Successfully followed."}));
    }
}
