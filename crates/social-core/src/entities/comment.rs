//! Comment entity - a user's comment on a post

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Comment entity. Deleted along with its post or its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub user_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(id: Snowflake, post_id: Snowflake, user_id: Snowflake, content: String) -> Self {
        Self {
            id,
            post_id,
            user_id,
            content,
            created_at: Utc::now(),
        }
    }

    /// Check whether the given user authored this comment
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }
}
