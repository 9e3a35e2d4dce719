//! Profile service
//!
//! Retrieval and update of the per-user profile.

use social_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{ProfileResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user's profile with follow graph counts
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        let followers = self.ctx.follow_repo().followers_of(user_id).await?;
        let following = self.ctx.follow_repo().following_of(user_id).await?;

        Ok(ProfileResponse::from_parts(
            &profile,
            followers.len() as i64,
            following.len() as i64,
        ))
    }

    /// Update the current user's profile; absent fields keep their value
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        let mut profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        if let Some(first_name) = request.first_name {
            profile.first_name = Some(first_name);
        }
        if let Some(last_name) = request.last_name {
            profile.last_name = Some(last_name);
        }
        if let Some(bio) = request.bio {
            profile.bio = Some(bio);
        }
        if let Some(phone) = request.phone {
            profile.phone = Some(phone);
        }
        if let Some(city) = request.city {
            profile.city = Some(city);
        }
        if let Some(country) = request.country {
            profile.country = Some(country);
        }
        if let Some(avatar) = request.avatar {
            profile.avatar = Some(avatar);
        }

        self.ctx.profile_repo().update(&profile).await?;
        info!(user_id = %user_id, "Profile updated");

        self.get_profile(user_id).await
    }
}
