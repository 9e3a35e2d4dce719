//! Reaction toggle engine
//!
//! Drives the three-state toggle per (user, post) pair: absent, LIKE,
//! DISLIKE. Requesting the current state removes it, requesting the other
//! state flips it, requesting from absent creates it. The storage layer's
//! (user, post) uniqueness constraint serializes racing creations; losing
//! a race is recovered here by re-reading, never surfaced to the caller.

use social_core::entities::{Reaction, ReactionKind, ReactionOutcome};
use social_core::error::DomainError;
use social_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::ReactionToggleResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::post::PostService;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a reaction of the given kind to a post on behalf of the user.
    ///
    /// Postconditions, per outcome:
    /// - `Added`: exactly one row exists for the pair, with the requested kind
    /// - `Changed`: exactly one row exists for the pair, with the requested kind
    /// - `Removed`: no row exists for the pair
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        user_id: Snowflake,
        post_id: Snowflake,
        kind: ReactionKind,
    ) -> ServiceResult<ReactionToggleResponse> {
        // The target post must exist
        PostService::new(self.ctx).require_post(post_id).await?;

        let outcome = self.apply(user_id, post_id, kind).await?;

        info!(
            post_id = %post_id,
            user_id = %user_id,
            kind = %kind,
            outcome = ?outcome,
            "Reaction toggled"
        );

        Ok(ReactionToggleResponse::new(kind, outcome))
    }

    /// One step of the toggle state machine
    async fn apply(
        &self,
        user_id: Snowflake,
        post_id: Snowflake,
        kind: ReactionKind,
    ) -> ServiceResult<ReactionOutcome> {
        let existing = self.ctx.reaction_repo().find(post_id, user_id).await?;

        match existing {
            None => {
                let reaction = Reaction::new(post_id, user_id, kind);
                match self.ctx.reaction_repo().create(&reaction).await {
                    Ok(()) => Ok(ReactionOutcome::Added),
                    // A concurrent request for the same pair won the insert;
                    // re-read and transition against the winner's row instead
                    Err(DomainError::ReactionAlreadyExists) => {
                        self.transition_existing(user_id, post_id, kind).await
                    }
                    Err(e) => Err(e.into()),
                }
            }
            Some(current) if current.kind == kind => {
                self.ctx.reaction_repo().delete(post_id, user_id).await?;
                Ok(ReactionOutcome::Removed)
            }
            Some(_) => {
                self.ctx
                    .reaction_repo()
                    .update_kind(post_id, user_id, kind)
                    .await?;
                Ok(ReactionOutcome::Changed)
            }
        }
    }

    /// Fallback after losing a creation race: the row now exists, so the
    /// requested kind either removes it or flips it.
    async fn transition_existing(
        &self,
        user_id: Snowflake,
        post_id: Snowflake,
        kind: ReactionKind,
    ) -> ServiceResult<ReactionOutcome> {
        let current = self
            .ctx
            .reaction_repo()
            .find(post_id, user_id)
            .await?
            .ok_or_else(|| {
                ServiceError::internal("reaction vanished between insert conflict and re-read")
            })?;

        if current.kind == kind {
            self.ctx.reaction_repo().delete(post_id, user_id).await?;
            Ok(ReactionOutcome::Removed)
        } else {
            self.ctx
                .reaction_repo()
                .update_kind(post_id, user_id, kind)
                .await?;
            Ok(ReactionOutcome::Changed)
        }
    }
}
