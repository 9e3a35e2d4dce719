//! PostgreSQL implementation of HashtagRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use social_core::entities::Hashtag;
use social_core::traits::{HashtagRepository, RepoResult};
use social_core::value_objects::Snowflake;

use crate::models::HashtagModel;

use super::error::{hashtag_not_found, map_db_error};

/// PostgreSQL implementation of HashtagRepository
#[derive(Clone)]
pub struct PgHashtagRepository {
    pool: PgPool,
}

impl PgHashtagRepository {
    /// Create a new PgHashtagRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HashtagRepository for PgHashtagRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Hashtag>> {
        let result = sqlx::query_as::<_, HashtagModel>(
            r"
            SELECT id, name FROM hashtags WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Hashtag::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Hashtag>> {
        let results = sqlx::query_as::<_, HashtagModel>(
            r"
            SELECT id, name FROM hashtags ORDER BY name, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Hashtag::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_first_by_name(&self, name: &str) -> RepoResult<Option<Hashtag>> {
        // Names are not unique; the oldest row wins for get-or-create
        let result = sqlx::query_as::<_, HashtagModel>(
            r"
            SELECT id, name FROM hashtags WHERE name = $1 ORDER BY id LIMIT 1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Hashtag::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Hashtag>> {
        let results = sqlx::query_as::<_, HashtagModel>(
            r"
            SELECT h.id, h.name
            FROM hashtags h
            JOIN post_hashtags ph ON ph.hashtag_id = h.id
            WHERE ph.post_id = $1
            ORDER BY h.name
            ",
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Hashtag::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, hashtag: &Hashtag) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO hashtags (id, name) VALUES ($1, $2)
            ",
        )
        .bind(hashtag.id.into_inner())
        .bind(&hashtag.name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, hashtag: &Hashtag) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE hashtags SET name = $2 WHERE id = $1
            ",
        )
        .bind(hashtag.id.into_inner())
        .bind(&hashtag.name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(hashtag_not_found(hashtag.id));
        }

        Ok(())
    }
}
