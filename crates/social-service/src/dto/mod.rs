//! Data transfer objects
//!
//! Request DTOs implement `Deserialize` + `Validate`; response DTOs
//! implement `Serialize`.

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreateHashtagRequest, CreatePostRequest, FeedQuery, LoginRequest,
    LogoutRequest, RefreshTokenRequest, RegisterRequest, UpdateCommentRequest,
    UpdateHashtagRequest, UpdatePostRequest, UpdateProfileRequest, UpdateUserRequest,
    UserSearchQuery,
};
pub use responses::{
    AuthResponse, CommentResponse, CurrentUserResponse, DetailResponse, FollowUserResponse,
    HashtagResponse, HealthResponse, PostDetailResponse, PostResponse, ProfileResponse,
    ReactionToggleResponse, ReadinessResponse, UserResponse,
};
