//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Responses that need data from more than one entity get explicit
//! constructors instead.

use social_core::entities::{Comment, Hashtag, Post, Profile, User};

use super::responses::{
    CommentResponse, CurrentUserResponse, FollowUserResponse, HashtagResponse, PostDetailResponse,
    PostResponse, ProfileResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl UserResponse {
    /// Build from a user and its profile
    pub fn from_parts(user: &User, profile: &Profile) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            full_name: profile.full_name(),
            city: profile.city.clone(),
            country: profile.country.clone(),
            created_at: user.created_at,
        }
    }
}

impl FollowUserResponse {
    /// Build from a user id and its profile
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            id: profile.user_id.to_string(),
            full_name: profile.full_name(),
        }
    }
}

impl ProfileResponse {
    /// Build from a profile and the follow graph counts
    pub fn from_parts(profile: &Profile, followers_count: i64, following_count: i64) -> Self {
        Self {
            user_id: profile.user_id.to_string(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            bio: profile.bio.clone(),
            phone: profile.phone.clone(),
            city: profile.city.clone(),
            country: profile.country.clone(),
            avatar: profile.avatar.clone(),
            followers_count,
            following_count,
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl PostResponse {
    /// Build from a post and its hashtag names
    pub fn from_parts(post: &Post, hashtags: Vec<String>) -> Self {
        Self {
            id: post.id.to_string(),
            user_id: post.user_id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
            hashtags,
        }
    }
}

impl PostDetailResponse {
    /// Build from a post, its hashtag names, reaction counts, and comments
    pub fn from_parts(
        post: &Post,
        hashtags: Vec<String>,
        likes_count: i64,
        dislikes_count: i64,
        comments: Vec<CommentResponse>,
    ) -> Self {
        Self {
            id: post.id.to_string(),
            user_id: post.user_id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
            hashtags,
            likes_count,
            dislikes_count,
            comments,
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            user_id: comment.user_id.to_string(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

// ============================================================================
// Hashtag Mappers
// ============================================================================

impl From<&Hashtag> for HashtagResponse {
    fn from(hashtag: &Hashtag) -> Self {
        Self {
            id: hashtag.id.to_string(),
            name: hashtag.name.clone(),
        }
    }
}

impl From<Hashtag> for HashtagResponse {
    fn from(hashtag: Hashtag) -> Self {
        Self::from(&hashtag)
    }
}
