//! Repository for the `movie_views` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie_view::MovieView;

/// View tracking queries. Uniqueness of (user, movie) is enforced by
/// `uq_movie_views_user_movie`.
pub struct MovieViewRepo;

impl MovieViewRepo {
    /// Insert a view stamped `NOW()` unless the pair already has one.
    ///
    /// Returns `true` if a row was inserted.
    pub async fn insert_if_absent(
        pool: &PgPool,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO movie_views (movie_id, user_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, movie_id) DO NOTHING",
        )
        .bind(movie_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the user has viewed the movie.
    pub async fn exists(pool: &PgPool, user_id: DbId, movie_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM movie_views WHERE user_id = $1 AND movie_id = $2)",
        )
        .bind(user_id)
        .bind(movie_id)
        .fetch_one(pool)
        .await
    }

    /// Fetch the view row for a (user, movie) pair.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<Option<MovieView>, sqlx::Error> {
        sqlx::query_as::<_, MovieView>(
            "SELECT id, movie_id, user_id, viewed_at, duration_secs \
             FROM movie_views WHERE user_id = $1 AND movie_id = $2",
        )
        .bind(user_id)
        .bind(movie_id)
        .fetch_optional(pool)
        .await
    }

    /// Set the watched duration on an existing view.
    ///
    /// Returns `true` if the row was updated.
    pub async fn update_duration(
        pool: &PgPool,
        user_id: DbId,
        movie_id: DbId,
        duration_secs: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movie_views SET duration_secs = $3 WHERE user_id = $1 AND movie_id = $2",
        )
        .bind(user_id)
        .bind(movie_id)
        .bind(duration_secs)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
