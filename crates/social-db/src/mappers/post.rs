//! Post entity <-> model mapper

use social_core::entities::Post;
use social_core::value_objects::Snowflake;

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            title: model.title,
            content: model.content,
            created_at: model.created_at,
        }
    }
}
