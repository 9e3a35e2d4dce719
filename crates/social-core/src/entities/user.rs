//! User entity - represents a registered account

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User account. Email is the unique natural key; there is no username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the email address
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }
}
