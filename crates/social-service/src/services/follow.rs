//! Follow service
//!
//! Mutation and traversal of the directed follow graph.

use social_core::entities::Follow;
use social_core::error::DomainError;
use social_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::FollowUserResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Follow a user. Idempotent: following someone twice is not an error.
    #[instrument(skip(self))]
    pub async fn follow(&self, actor_id: Snowflake, target_id: Snowflake) -> ServiceResult<()> {
        if actor_id == target_id {
            return Err(ServiceError::Domain(DomainError::SelfFollow));
        }

        self.require_user(target_id).await?;

        let follow = Follow::new(actor_id, target_id);
        let inserted = self.ctx.follow_repo().create(&follow).await?;
        if inserted {
            info!(follower = %actor_id, followee = %target_id, "Follow edge created");
        }

        Ok(())
    }

    /// Unfollow a user. Idempotent: removing a missing edge is not an error.
    #[instrument(skip(self))]
    pub async fn unfollow(&self, actor_id: Snowflake, target_id: Snowflake) -> ServiceResult<()> {
        if actor_id == target_id {
            return Err(ServiceError::Domain(DomainError::SelfFollow));
        }

        self.require_user(target_id).await?;

        let removed = self.ctx.follow_repo().delete(actor_id, target_id).await?;
        if removed {
            info!(follower = %actor_id, followee = %target_id, "Follow edge removed");
        }

        Ok(())
    }

    /// Users following the given user
    #[instrument(skip(self))]
    pub async fn followers(&self, user_id: Snowflake) -> ServiceResult<Vec<FollowUserResponse>> {
        self.require_user(user_id).await?;

        let follower_ids = self.ctx.follow_repo().followers_of(user_id).await?;
        self.resolve_profiles(follower_ids).await
    }

    /// Users the given user follows
    #[instrument(skip(self))]
    pub async fn following(&self, user_id: Snowflake) -> ServiceResult<Vec<FollowUserResponse>> {
        self.require_user(user_id).await?;

        let followee_ids = self.ctx.follow_repo().following_of(user_id).await?;
        self.resolve_profiles(followee_ids).await
    }

    async fn require_user(&self, user_id: Snowflake) -> ServiceResult<()> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;
        Ok(())
    }

    async fn resolve_profiles(
        &self,
        user_ids: Vec<Snowflake>,
    ) -> ServiceResult<Vec<FollowUserResponse>> {
        let mut entries = Vec::with_capacity(user_ids.len());

        for user_id in user_ids {
            if let Some(profile) = self.ctx.profile_repo().find_by_user(user_id).await? {
                entries.push(FollowUserResponse::from_profile(&profile));
            }
        }

        Ok(entries)
    }
}
