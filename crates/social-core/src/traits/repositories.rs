//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{Comment, Follow, Hashtag, Post, Profile, Reaction, ReactionKind, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Optional filters for listing users. All filters are case-insensitive
/// substring matches; profile fields match against the joined profile row.
#[derive(Debug, Clone, Default)]
pub struct UserSearch {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a user together with its empty profile in one transaction.
    /// Postcondition: exactly one profile row exists for the new user.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Delete a user; posts, comments, reactions, follows, and the profile
    /// cascade at the storage layer
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// List users with their profiles, applying the given filters
    async fn search(&self, query: &UserSearch) -> RepoResult<Vec<(User, Profile)>>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile belonging to a user
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Profile>>;

    /// Update a profile's attributes
    async fn update(&self, profile: &Profile) -> RepoResult<()>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert a follow edge. Returns false when the edge already existed.
    async fn create(&self, follow: &Follow) -> RepoResult<bool>;

    /// Remove a follow edge. Returns false when no edge existed.
    async fn delete(&self, follower_id: Snowflake, followee_id: Snowflake) -> RepoResult<bool>;

    /// Check if follower follows followee
    async fn is_following(&self, follower_id: Snowflake, followee_id: Snowflake)
        -> RepoResult<bool>;

    /// Users who follow the given user
    async fn followers_of(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>>;

    /// Users the given user follows
    async fn following_of(&self, user_id: Snowflake) -> RepoResult<Vec<Snowflake>>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// Optional narrowing filters for the feed query, AND-combined.
/// The date is parsed before it reaches the repository; a malformed date
/// never executes a query.
#[derive(Debug, Clone, Default)]
pub struct FeedFilter {
    /// Case-insensitive substring match against the post title
    pub title: Option<String>,
    /// Case-insensitive substring match against any associated hashtag name
    pub hashtag: Option<String>,
    /// Exact calendar-day match against the creation timestamp
    pub on_date: Option<NaiveDate>,
}

impl FeedFilter {
    /// True when no filter narrows the visibility set
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.hashtag.is_none() && self.on_date.is_none()
    }
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// Check if a title is already taken
    async fn title_exists(&self, title: &str) -> RepoResult<bool>;

    /// Create a post and its hashtag associations in one transaction
    async fn create(&self, post: &Post, hashtag_ids: &[Snowflake]) -> RepoResult<()>;

    /// Update title and content of an existing post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Replace the hashtag associations of a post
    async fn set_hashtags(&self, post_id: Snowflake, hashtag_ids: &[Snowflake]) -> RepoResult<()>;

    /// Delete a post; comments and reactions cascade at the storage layer
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Posts authored by any of the given users, narrowed by the filter,
    /// ordered by creation timestamp descending
    async fn find_feed(
        &self,
        author_ids: &[Snowflake],
        filter: &FeedFilter,
    ) -> RepoResult<Vec<Post>>;

    /// Distinct posts the given user has a LIKE reaction on, newest first
    async fn find_liked_by(&self, user_id: Snowflake) -> RepoResult<Vec<Post>>;
}

// ============================================================================
// Hashtag Repository
// ============================================================================

#[async_trait]
pub trait HashtagRepository: Send + Sync {
    /// Find hashtag by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Hashtag>>;

    /// List all hashtags
    async fn find_all(&self) -> RepoResult<Vec<Hashtag>>;

    /// First hashtag with exactly this name, if any. Names are not unique;
    /// the oldest row wins for get-or-create purposes.
    async fn find_first_by_name(&self, name: &str) -> RepoResult<Option<Hashtag>>;

    /// Hashtags associated with a post
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Hashtag>>;

    /// Create a new hashtag
    async fn create(&self, hashtag: &Hashtag) -> RepoResult<()>;

    /// Rename an existing hashtag
    async fn update(&self, hashtag: &Hashtag) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// Comments on a post, oldest first
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Comments written by a user, newest first
    async fn find_by_author(&self, user_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update comment content
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the reaction row for a (user, post) pair
    async fn find(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Reaction>>;

    /// Insert a reaction row. A racing insert for the same pair loses
    /// against the (user, post) uniqueness constraint and surfaces as
    /// `DomainError::ReactionAlreadyExists` for the caller to recover.
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Overwrite the kind of the existing row for a pair in place
    async fn update_kind(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<()>;

    /// Delete the reaction row for a pair. Returns false when none existed.
    async fn delete(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Count reactions on a post, per kind: (likes, dislikes)
    async fn count_for_post(&self, post_id: Snowflake) -> RepoResult<(i64, i64)>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

/// Denylist-backed refresh token record
#[derive(Debug, Clone)]
pub struct RefreshTokenRecord {
    pub jti: String,
    pub user_id: Snowflake,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Store a newly issued refresh token
    async fn store(&self, record: &RefreshTokenRecord) -> RepoResult<()>;

    /// Find a stored token by its jti, only if not revoked and not expired
    async fn find_valid(&self, jti: &str) -> RepoResult<Option<RefreshTokenRecord>>;

    /// Revoke a token by its jti. Returns false when the jti is unknown
    /// or already revoked.
    async fn revoke(&self, jti: &str) -> RepoResult<bool>;

    /// Revoke every live token belonging to a user
    async fn revoke_all_for_user(&self, user_id: Snowflake) -> RepoResult<u64>;

    /// Remove tokens past their expiry. Returns the number deleted.
    async fn delete_expired(&self) -> RepoResult<u64>;
}
