//! User entity <-> model mappers

use social_core::entities::{Profile, User};
use social_core::value_objects::Snowflake;

use crate::models::{UserModel, UserWithProfileModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Split a joined user+profile row into its two entities
impl From<UserWithProfileModel> for (User, Profile) {
    fn from(model: UserWithProfileModel) -> Self {
        let user = User {
            id: Snowflake::new(model.id),
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };
        let profile = Profile {
            user_id: Snowflake::new(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            bio: model.bio,
            phone: model.phone,
            city: model.city,
            country: model.country,
            avatar: model.avatar,
        };
        (user, profile)
    }
}
