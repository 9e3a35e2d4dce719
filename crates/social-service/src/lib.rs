//! # social-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AuthResponse, CommentResponse, CreateCommentRequest, CreateHashtagRequest, CreatePostRequest,
    CurrentUserResponse, DetailResponse, FeedQuery, FollowUserResponse, HashtagResponse,
    HealthResponse, LoginRequest, LogoutRequest, PostDetailResponse, PostResponse,
    ProfileResponse, ReactionToggleResponse, ReadinessResponse, RefreshTokenRequest,
    RegisterRequest, UpdateCommentRequest, UpdateHashtagRequest, UpdatePostRequest,
    UpdateProfileRequest, UpdateUserRequest, UserResponse, UserSearchQuery,
};
pub use services::{
    AuthService, CommentService, FeedService, FollowService, HashtagService, PostService,
    ProfileService, ReactionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService,
};
