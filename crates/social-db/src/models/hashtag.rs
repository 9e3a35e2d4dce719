//! Hashtag database model

use sqlx::FromRow;

/// Database model for the hashtags table
#[derive(Debug, Clone, FromRow)]
pub struct HashtagModel {
    pub id: i64,
    pub name: String,
}
