//! Repository for the `genres` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::Genre;

/// Read access to genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Whether a genre with this id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM genres WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all genres ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name, created_at FROM genres ORDER BY name")
            .fetch_all(pool)
            .await
    }
}
