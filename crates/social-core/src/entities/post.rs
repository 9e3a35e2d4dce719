//! Post entity - a piece of user-authored content

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Post entity. Title is globally unique; created_at is immutable once set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post
    pub fn new(id: Snowflake, user_id: Snowflake, title: String, content: String) -> Self {
        Self {
            id,
            user_id,
            title,
            content,
            created_at: Utc::now(),
        }
    }

    /// Check whether the given user authored this post
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorship() {
        let post = Post::new(
            Snowflake::new(1),
            Snowflake::new(10),
            "First".to_string(),
            "hello".to_string(),
        );
        assert!(post.is_authored_by(Snowflake::new(10)));
        assert!(!post.is_authored_by(Snowflake::new(11)));
    }
}
