//! Reaction entity <-> model mapper
//!
//! Fallible because the stored kind string must resolve to a known
//! `ReactionKind`; the CHECK constraint makes failures unreachable in
//! practice, but the mapper stays honest about it.

use social_core::entities::{Reaction, ReactionKind};
use social_core::error::DomainError;
use social_core::value_objects::Snowflake;

use crate::models::ReactionModel;

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let kind = ReactionKind::parse(&model.kind).ok_or_else(|| {
            DomainError::InternalError(format!("unknown reaction kind in storage: {}", model.kind))
        })?;

        Ok(Reaction {
            post_id: Snowflake::new(model.post_id),
            user_id: Snowflake::new(model.user_id),
            kind,
            created_at: model.created_at,
        })
    }
}
