//! Profile entity - personal attributes attached one-to-one to a User

use crate::value_objects::Snowflake;

/// Per-user profile. Created in the same transaction as its User and
/// never exists without one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub user_id: Snowflake,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub avatar: Option<String>,
}

impl Profile {
    /// Create an empty Profile for a user
    pub fn new(user_id: Snowflake) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// Full display name, built from whatever name parts are present
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }
}
