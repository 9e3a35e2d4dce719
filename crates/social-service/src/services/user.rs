//! User service
//!
//! Handles account retrieval, listing with filters, updates, and deletion.

use social_core::Snowflake;
use tracing::{info, instrument};

use social_core::traits::UserSearch;

use crate::dto::{CurrentUserResponse, UpdateUserRequest, UserResponse, UserSearchQuery};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user with profile highlights (public view)
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        Ok(UserResponse::from_parts(&user, &profile))
    }

    /// Get the current authenticated user
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// List users, optionally narrowed by email or profile field filters
    #[instrument(skip(self, query))]
    pub async fn search_users(&self, query: UserSearchQuery) -> ServiceResult<Vec<UserResponse>> {
        let search = UserSearch {
            email: query.email,
            first_name: query.first_name,
            last_name: query.last_name,
            city: query.city,
            country: query.country,
        };

        let results = self.ctx.user_repo().search(&search).await?;

        Ok(results
            .iter()
            .map(|(user, profile)| UserResponse::from_parts(user, profile))
            .collect())
    }

    /// Update the current user
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if let Some(email) = request.email {
            if email != user.email {
                user.set_email(email);
                self.ctx.user_repo().update(&user).await?;
                info!(user_id = %user_id, "User email updated");
            }
        }

        Ok(CurrentUserResponse::from(&user))
    }

    /// Delete the current user's account; owned content cascades
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: Snowflake) -> ServiceResult<()> {
        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, "User account deleted");

        Ok(())
    }
}
