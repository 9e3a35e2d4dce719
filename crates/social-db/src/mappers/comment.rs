//! Comment entity <-> model mapper

use social_core::entities::Comment;
use social_core::value_objects::Snowflake;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            post_id: Snowflake::new(model.post_id),
            user_id: Snowflake::new(model.user_id),
            content: model.content,
            created_at: model.created_at,
        }
    }
}
