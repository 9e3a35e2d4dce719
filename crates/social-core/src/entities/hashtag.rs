//! Hashtag entity

use crate::value_objects::Snowflake;

/// Hashtag. Names are not globally unique; posts attach to the first
/// row matching a submitted name, creating one when none exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hashtag {
    pub id: Snowflake,
    pub name: String,
}

impl Hashtag {
    /// Create a new Hashtag
    pub fn new(id: Snowflake, name: String) -> Self {
        Self { id, name }
    }
}
