//! Repository for the `user_votes` table.

use marquee_core::stats::VoteKind;
use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::vote::{Vote, VotedMovieRow};

/// Vote queries. One row per (user, movie) via `uq_user_votes_user_movie`.
pub struct VoteRepo;

impl VoteRepo {
    /// Insert the vote, or flip an existing one to `kind`, in one statement.
    ///
    /// The `DO UPDATE ... WHERE` clause skips rows whose flags already match,
    /// so an identical re-vote affects zero rows. Returns `true` if a row
    /// was inserted or changed.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        movie_id: DbId,
        kind: VoteKind,
    ) -> Result<bool, sqlx::Error> {
        let (is_like, is_unlike) = kind.flags();
        let result = sqlx::query(
            "INSERT INTO user_votes (user_id, movie_id, is_like, is_unlike) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id, movie_id) DO UPDATE \
             SET is_like = EXCLUDED.is_like, is_unlike = EXCLUDED.is_unlike \
             WHERE user_votes.is_like <> EXCLUDED.is_like \
                OR user_votes.is_unlike <> EXCLUDED.is_unlike",
        )
        .bind(user_id)
        .bind(movie_id)
        .bind(is_like)
        .bind(is_unlike)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch the vote row for a (user, movie) pair.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<Option<Vote>, sqlx::Error> {
        sqlx::query_as::<_, Vote>(
            "SELECT id, user_id, movie_id, is_like, is_unlike, created_at, updated_at \
             FROM user_votes WHERE user_id = $1 AND movie_id = $2",
        )
        .bind(user_id)
        .bind(movie_id)
        .fetch_optional(pool)
        .await
    }

    /// All votes cast by a user, joined with movie titles, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<VotedMovieRow>, sqlx::Error> {
        sqlx::query_as::<_, VotedMovieRow>(
            "SELECT m.id AS movie_id, m.title, uv.is_like, uv.is_unlike, \
                    uv.created_at AS voted_at \
             FROM user_votes uv \
             JOIN movies m ON m.id = uv.movie_id \
             WHERE uv.user_id = $1 \
             ORDER BY uv.created_at DESC, uv.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
