//! Profile entity <-> model mapper

use social_core::entities::Profile;
use social_core::value_objects::Snowflake;

use crate::models::ProfileModel;

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            user_id: Snowflake::new(model.user_id),
            first_name: model.first_name,
            last_name: model.last_name,
            bio: model.bio,
            phone: model.phone,
            city: model.city,
            country: model.country,
            avatar: model.avatar,
        }
    }
}
