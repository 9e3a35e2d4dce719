//! Refresh token record <-> model mapper

use social_core::traits::RefreshTokenRecord;
use social_core::value_objects::Snowflake;

use crate::models::RefreshTokenModel;

impl From<RefreshTokenModel> for RefreshTokenRecord {
    fn from(model: RefreshTokenModel) -> Self {
        RefreshTokenRecord {
            jti: model.jti,
            user_id: Snowflake::new(model.user_id),
            expires_at: model.expires_at,
        }
    }
}
