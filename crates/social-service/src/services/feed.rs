//! Feed composer
//!
//! Builds the follow-scoped feed for a viewer: the union of the viewer's
//! own posts and the posts of every followed user, newest first. A viewer
//! who follows nobody sees exactly their own posts.

use chrono::NaiveDate;
use social_core::error::DomainError;
use social_core::traits::FeedFilter;
use social_core::Snowflake;
use tracing::instrument;

use crate::dto::{FeedQuery, PostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compose the feed visible to the viewer, narrowed by the optional
    /// filters. A malformed date fails before any query runs.
    #[instrument(skip(self, query))]
    pub async fn compose_feed(
        &self,
        viewer_id: Snowflake,
        query: FeedQuery,
    ) -> ServiceResult<Vec<PostResponse>> {
        let filter = Self::build_filter(query)?;

        // Visibility set: the viewer plus everyone they follow
        let mut author_ids = vec![viewer_id];
        for followee in self.ctx.follow_repo().following_of(viewer_id).await? {
            if !author_ids.contains(&followee) {
                author_ids.push(followee);
            }
        }

        let posts = self.ctx.post_repo().find_feed(&author_ids, &filter).await?;

        let mut responses = Vec::with_capacity(posts.len());
        for post in &posts {
            let hashtags = self.ctx.hashtag_repo().find_by_post(post.id).await?;
            responses.push(PostResponse::from_parts(
                post,
                hashtags.into_iter().map(|h| h.name).collect(),
            ));
        }

        Ok(responses)
    }

    /// Posts the viewer has LIKEd, newest first
    #[instrument(skip(self))]
    pub async fn liked_posts(&self, viewer_id: Snowflake) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().find_liked_by(viewer_id).await?;

        let mut responses = Vec::with_capacity(posts.len());
        for post in &posts {
            let hashtags = self.ctx.hashtag_repo().find_by_post(post.id).await?;
            responses.push(PostResponse::from_parts(
                post,
                hashtags.into_iter().map(|h| h.name).collect(),
            ));
        }

        Ok(responses)
    }

    /// Turn the raw query into a repository filter, validating the date
    fn build_filter(query: FeedQuery) -> ServiceResult<FeedFilter> {
        let on_date = query
            .date
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| ServiceError::Domain(DomainError::InvalidDateFilter(raw)))
            })
            .transpose()?;

        Ok(FeedFilter {
            title: query.title,
            hashtag: query.hashtag,
            on_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_passes_through() {
        let filter = FeedService::build_filter(FeedQuery {
            title: Some("rust".to_string()),
            hashtag: Some("async".to_string()),
            date: Some("2024-06-01".to_string()),
        })
        .unwrap();

        assert_eq!(filter.title.as_deref(), Some("rust"));
        assert_eq!(filter.hashtag.as_deref(), Some("async"));
        assert_eq!(
            filter.on_date,
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
    }

    #[test]
    fn test_build_filter_empty_query() {
        let filter = FeedService::build_filter(FeedQuery::default()).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_malformed_date_rejected_before_any_query() {
        for raw in ["2024-13-40", "not-a-date", "2024/06/01", "06-01-2024"] {
            let result = FeedService::build_filter(FeedQuery {
                date: Some(raw.to_string()),
                ..FeedQuery::default()
            });
            match result {
                Err(ServiceError::Domain(DomainError::InvalidDateFilter(s))) => {
                    assert_eq!(s, raw);
                }
                other => panic!("expected InvalidDateFilter for {raw:?}, got {other:?}"),
            }
        }
    }
}
