//! Reaction entity - a like or dislike on a post
//!
//! At most one reaction row exists per (user, post) pair. The pair cycles
//! through three states: absent, LIKE, DISLIKE.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Snowflake;

/// The two reaction values a user can put on a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// Canonical storage form: "LIKE" / "DISLIKE"
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Dislike => "DISLIKE",
        }
    }

    /// Lowercase form used as a JSON response key
    pub fn key(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    /// The other kind
    pub fn opposite(&self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }

    /// Parse the canonical storage form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "LIKE" => Some(Self::Like),
            "DISLIKE" => Some(Self::Dislike),
            _ => None,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub post_id: Snowflake,
    pub user_id: Snowflake,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(post_id: Snowflake, user_id: Snowflake, kind: ReactionKind) -> Self {
        Self {
            post_id,
            user_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Result of applying a reaction to a (user, post) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// No row existed; one was created with the requested kind
    Added,
    /// A row with the other kind existed; its kind was overwritten
    Changed,
    /// A row with the requested kind existed; it was deleted
    Removed,
}

impl ReactionOutcome {
    /// Whether this outcome created a new row (drives the 201 status)
    #[inline]
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Added)
    }

    /// Human-readable message for the response body
    pub fn message(&self, kind: ReactionKind) -> String {
        match self {
            Self::Added => format!("{kind} added."),
            Self::Removed => format!("{kind} removed."),
            Self::Changed => format!("Changed to {kind}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        assert_eq!(ReactionKind::parse("LIKE"), Some(ReactionKind::Like));
        assert_eq!(ReactionKind::parse("DISLIKE"), Some(ReactionKind::Dislike));
        assert_eq!(ReactionKind::parse("MEH"), None);
        assert_eq!(ReactionKind::Like.as_str(), "LIKE");
        assert_eq!(ReactionKind::Dislike.key(), "dislike");
    }

    #[test]
    fn test_kind_opposite() {
        assert_eq!(ReactionKind::Like.opposite(), ReactionKind::Dislike);
        assert_eq!(ReactionKind::Dislike.opposite(), ReactionKind::Like);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            ReactionOutcome::Added.message(ReactionKind::Like),
            "LIKE added."
        );
        assert_eq!(
            ReactionOutcome::Removed.message(ReactionKind::Dislike),
            "DISLIKE removed."
        );
        assert_eq!(
            ReactionOutcome::Changed.message(ReactionKind::Like),
            "Changed to LIKE."
        );
    }

    #[test]
    fn test_only_added_creates() {
        assert!(ReactionOutcome::Added.is_created());
        assert!(!ReactionOutcome::Changed.is_created());
        assert!(!ReactionOutcome::Removed.is_created());
    }
}
