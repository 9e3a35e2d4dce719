//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, FeedFilter, FollowRepository, HashtagRepository, PostRepository,
    ProfileRepository, ReactionRepository, RefreshTokenRecord, RefreshTokenRepository, RepoResult,
    UserRepository, UserSearch,
};
