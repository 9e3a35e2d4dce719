//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use social_core::entities::Post;
use social_core::error::DomainError;
use social_core::traits::{FeedFilter, PostRepository, RepoResult};
use social_core::value_objects::Snowflake;

use crate::models::PostModel;

use super::error::{map_db_error, map_unique_violation, post_not_found};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, user_id, title, content, created_at
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn title_exists(&self, title: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM posts WHERE title = $1)
            ",
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, post))]
    async fn create(&self, post: &Post, hashtag_ids: &[Snowflake]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO posts (id, user_id, title, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(post.id.into_inner())
        .bind(post.user_id.into_inner())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TitleAlreadyExists))?;

        for hashtag_id in hashtag_ids {
            sqlx::query(
                r"
                INSERT INTO post_hashtags (post_id, hashtag_id)
                VALUES ($1, $2)
                ON CONFLICT (post_id, hashtag_id) DO NOTHING
                ",
            )
            .bind(post.id.into_inner())
            .bind(hashtag_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, post))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE posts
            SET title = $2, content = $3
            WHERE id = $1
            ",
        )
        .bind(post.id.into_inner())
        .bind(&post.title)
        .bind(&post.content)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TitleAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_hashtags(&self, post_id: Snowflake, hashtag_ids: &[Snowflake]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM post_hashtags WHERE post_id = $1
            ",
        )
        .bind(post_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for hashtag_id in hashtag_ids {
            sqlx::query(
                r"
                INSERT INTO post_hashtags (post_id, hashtag_id)
                VALUES ($1, $2)
                ON CONFLICT (post_id, hashtag_id) DO NOTHING
                ",
            )
            .bind(post_id.into_inner())
            .bind(hashtag_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM posts WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_feed(
        &self,
        author_ids: &[Snowflake],
        filter: &FeedFilter,
    ) -> RepoResult<Vec<Post>> {
        let author_ids: Vec<i64> = author_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, user_id, title, content, created_at
            FROM posts
            WHERE user_id = ANY($1)
              AND ($2::TEXT IS NULL OR title ILIKE '%' || $2 || '%')
              AND ($3::TEXT IS NULL OR EXISTS(
                    SELECT 1 FROM post_hashtags ph
                    JOIN hashtags h ON h.id = ph.hashtag_id
                    WHERE ph.post_id = posts.id AND h.name ILIKE '%' || $3 || '%'))
              AND ($4::DATE IS NULL OR (created_at AT TIME ZONE 'UTC')::DATE = $4)
            ORDER BY created_at DESC
            ",
        )
        .bind(&author_ids)
        .bind(&filter.title)
        .bind(&filter.hashtag)
        .bind(filter.on_date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_liked_by(&self, user_id: Snowflake) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT p.id, p.user_id, p.title, p.content, p.created_at
            FROM posts p
            JOIN reactions r ON r.post_id = p.id
            WHERE r.user_id = $1 AND r.kind = 'LIKE'
            ORDER BY p.created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPostRepository>();
    }
}
