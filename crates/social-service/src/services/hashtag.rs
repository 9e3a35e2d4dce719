//! Hashtag service
//!
//! Plain CRUD surface for hashtags (no delete, matching the API surface).

use social_core::entities::Hashtag;
use social_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateHashtagRequest, HashtagResponse, UpdateHashtagRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Hashtag service
pub struct HashtagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HashtagService<'a> {
    /// Create a new HashtagService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all hashtags
    #[instrument(skip(self))]
    pub async fn list_hashtags(&self) -> ServiceResult<Vec<HashtagResponse>> {
        let hashtags = self.ctx.hashtag_repo().find_all().await?;
        Ok(hashtags.iter().map(HashtagResponse::from).collect())
    }

    /// Get a hashtag by id
    #[instrument(skip(self))]
    pub async fn get_hashtag(&self, hashtag_id: Snowflake) -> ServiceResult<HashtagResponse> {
        let hashtag = self
            .ctx
            .hashtag_repo()
            .find_by_id(hashtag_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Hashtag", hashtag_id.to_string()))?;

        Ok(HashtagResponse::from(&hashtag))
    }

    /// Create a hashtag. Names are not unique by design; posting the same
    /// name twice yields two rows.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_hashtag(
        &self,
        request: CreateHashtagRequest,
    ) -> ServiceResult<HashtagResponse> {
        let hashtag = Hashtag::new(self.ctx.generate_id(), request.name);
        self.ctx.hashtag_repo().create(&hashtag).await?;

        info!(hashtag_id = %hashtag.id, "Hashtag created");
        Ok(HashtagResponse::from(hashtag))
    }

    /// Rename a hashtag
    #[instrument(skip(self, request))]
    pub async fn update_hashtag(
        &self,
        hashtag_id: Snowflake,
        request: UpdateHashtagRequest,
    ) -> ServiceResult<HashtagResponse> {
        let mut hashtag = self
            .ctx
            .hashtag_repo()
            .find_by_id(hashtag_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Hashtag", hashtag_id.to_string()))?;

        hashtag.name = request.name;
        self.ctx.hashtag_repo().update(&hashtag).await?;

        Ok(HashtagResponse::from(hashtag))
    }
}
