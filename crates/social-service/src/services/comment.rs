//! Comment service
//!
//! Comment creation against a post, the author's comment listing, and
//! owner-only mutation.

use social_core::entities::Comment;
use social_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::ownership::ensure_owner;
use super::post::PostService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment on a post
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        actor_id: Snowflake,
        post_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        PostService::new(self.ctx).require_post(post_id).await?;

        let comment = Comment::new(self.ctx.generate_id(), post_id, actor_id, request.content);
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment created");
        Ok(CommentResponse::from(comment))
    }

    /// Comments written by the acting user, newest first
    #[instrument(skip(self))]
    pub async fn list_own_comments(&self, actor_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self.ctx.comment_repo().find_by_author(actor_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Get a single comment. Reads bypass the ownership check.
    #[instrument(skip(self))]
    pub async fn get_comment(&self, comment_id: Snowflake) -> ServiceResult<CommentResponse> {
        let comment = self.require_comment(comment_id).await?;
        Ok(CommentResponse::from(comment))
    }

    /// Update a comment. Only the author may mutate it.
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        actor_id: Snowflake,
        comment_id: Snowflake,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self.require_comment(comment_id).await?;
        ensure_owner(actor_id, comment.user_id)?;

        comment.content = request.content;
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, "Comment updated");
        Ok(CommentResponse::from(comment))
    }

    /// Delete a comment. Only the author may delete it.
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        actor_id: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<()> {
        let comment = self.require_comment(comment_id).await?;
        ensure_owner(actor_id, comment.user_id)?;

        self.ctx.comment_repo().delete(comment_id).await?;
        info!(comment_id = %comment_id, "Comment deleted");

        Ok(())
    }

    async fn require_comment(&self, comment_id: Snowflake) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))
    }
}
