//! Follow entity - a directed edge in the follow graph

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Directed follow edge: `follower_id` follows `followee_id`.
/// At most one edge exists per ordered pair; self-edges are rejected
/// before this entity is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub follower_id: Snowflake,
    pub followee_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// Create a new Follow edge
    pub fn new(follower_id: Snowflake, followee_id: Snowflake) -> Self {
        Self {
            follower_id,
            followee_id,
            created_at: Utc::now(),
        }
    }
}
