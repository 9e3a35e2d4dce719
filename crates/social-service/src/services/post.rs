//! Post service
//!
//! Post CRUD with ownership checks, plus hashtag resolution. Hashtags are
//! resolved by name with get-or-create semantics at post creation and
//! update time; this is the only upsert outside the reaction toggle.

use social_core::entities::{Hashtag, Post};
use social_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreatePostRequest, PostDetailResponse, PostResponse, UpdatePostRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::ownership::ensure_owner;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post for the acting user
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_post(
        &self,
        actor_id: Snowflake,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        if self.ctx.post_repo().title_exists(&request.title).await? {
            return Err(ServiceError::conflict("Post title already in use"));
        }

        let hashtags = self.resolve_hashtags(&request.hashtags).await?;
        let hashtag_ids: Vec<Snowflake> = hashtags.iter().map(|h| h.id).collect();

        let post = Post::new(
            self.ctx.generate_id(),
            actor_id,
            request.title,
            request.content,
        );
        self.ctx.post_repo().create(&post, &hashtag_ids).await?;

        info!(post_id = %post.id, user_id = %actor_id, "Post created");

        let names = hashtags.into_iter().map(|h| h.name).collect();
        Ok(PostResponse::from_parts(&post, names))
    }

    /// Get a post with hashtags, reaction counts, and comments
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Snowflake) -> ServiceResult<PostDetailResponse> {
        let post = self.require_post(post_id).await?;

        let hashtags = self.ctx.hashtag_repo().find_by_post(post_id).await?;
        let (likes, dislikes) = self.ctx.reaction_repo().count_for_post(post_id).await?;
        let comments: Vec<CommentResponse> = self
            .ctx
            .comment_repo()
            .find_by_post(post_id)
            .await?
            .iter()
            .map(CommentResponse::from)
            .collect();

        Ok(PostDetailResponse::from_parts(
            &post,
            hashtags.into_iter().map(|h| h.name).collect(),
            likes,
            dislikes,
            comments,
        ))
    }

    /// Update a post. Only the owner may mutate it.
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        actor_id: Snowflake,
        post_id: Snowflake,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostDetailResponse> {
        let mut post = self.require_post(post_id).await?;
        ensure_owner(actor_id, post.user_id)?;

        let mut changed = false;

        if let Some(title) = request.title {
            if title != post.title {
                if self.ctx.post_repo().title_exists(&title).await? {
                    return Err(ServiceError::conflict("Post title already in use"));
                }
                post.title = title;
                changed = true;
            }
        }

        if let Some(content) = request.content {
            post.content = content;
            changed = true;
        }

        if changed {
            self.ctx.post_repo().update(&post).await?;
        }

        if let Some(names) = request.hashtags {
            let hashtags = self.resolve_hashtags(&names).await?;
            let hashtag_ids: Vec<Snowflake> = hashtags.iter().map(|h| h.id).collect();
            self.ctx
                .post_repo()
                .set_hashtags(post_id, &hashtag_ids)
                .await?;
        }

        info!(post_id = %post_id, user_id = %actor_id, "Post updated");

        self.get_post(post_id).await
    }

    /// Delete a post. Only the owner may delete it; comments and
    /// reactions cascade at the storage layer.
    #[instrument(skip(self))]
    pub async fn delete_post(&self, actor_id: Snowflake, post_id: Snowflake) -> ServiceResult<()> {
        let post = self.require_post(post_id).await?;
        ensure_owner(actor_id, post.user_id)?;

        self.ctx.post_repo().delete(post_id).await?;
        info!(post_id = %post_id, user_id = %actor_id, "Post deleted");

        Ok(())
    }

    /// Fetch the post or fail with NotFound
    pub(crate) async fn require_post(&self, post_id: Snowflake) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))
    }

    /// Resolve hashtag names to rows with get-or-create semantics.
    /// Duplicate names in the input collapse to a single association.
    async fn resolve_hashtags(&self, names: &[String]) -> ServiceResult<Vec<Hashtag>> {
        let mut resolved: Vec<Hashtag> = Vec::with_capacity(names.len());

        for name in names {
            let name = name.trim();
            if name.is_empty() {
                return Err(ServiceError::validation("Hashtag name must not be empty"));
            }
            if resolved.iter().any(|h| h.name == name) {
                continue;
            }

            let hashtag = match self.ctx.hashtag_repo().find_first_by_name(name).await? {
                Some(existing) => existing,
                None => {
                    let hashtag = Hashtag::new(self.ctx.generate_id(), name.to_string());
                    self.ctx.hashtag_repo().create(&hashtag).await?;
                    hashtag
                }
            };
            resolved.push(hashtag);
        }

        Ok(resolved)
    }
}
