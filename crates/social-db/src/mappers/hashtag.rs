//! Hashtag entity <-> model mapper

use social_core::entities::Hashtag;
use social_core::value_objects::Snowflake;

use crate::models::HashtagModel;

impl From<HashtagModel> for Hashtag {
    fn from(model: HashtagModel) -> Self {
        Hashtag {
            id: Snowflake::new(model.id),
            name: model.name,
        }
    }
}
