//! Aggregate queries over views and votes.
//!
//! Every query outer-joins from the entity table so zero-count movies and
//! genres appear, and orders by count descending (id ascending on ties).

use sqlx::PgPool;

use crate::models::stats::{GenreCountRow, MovieCountRow};

/// Statistics queries.
pub struct StatsRepo;

impl StatsRepo {
    /// View count per movie.
    pub async fn movie_views(pool: &PgPool) -> Result<Vec<MovieCountRow>, sqlx::Error> {
        sqlx::query_as::<_, MovieCountRow>(
            "SELECT m.id, m.title, COUNT(mv.id) AS count \
             FROM movies m \
             LEFT JOIN movie_views mv ON mv.movie_id = m.id \
             GROUP BY m.id, m.title \
             ORDER BY count DESC, m.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// View count per genre, summed over the genre's movies.
    pub async fn genre_views(pool: &PgPool) -> Result<Vec<GenreCountRow>, sqlx::Error> {
        sqlx::query_as::<_, GenreCountRow>(
            "SELECT g.id, g.name, COUNT(mv.id) AS count \
             FROM genres g \
             LEFT JOIN movies m ON m.genre_id = g.id \
             LEFT JOIN movie_views mv ON mv.movie_id = m.id \
             GROUP BY g.id, g.name \
             ORDER BY count DESC, g.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Like count per movie.
    pub async fn movie_likes(pool: &PgPool) -> Result<Vec<MovieCountRow>, sqlx::Error> {
        sqlx::query_as::<_, MovieCountRow>(
            "SELECT m.id, m.title, COUNT(uv.id) AS count \
             FROM movies m \
             LEFT JOIN user_votes uv ON uv.movie_id = m.id AND uv.is_like \
             GROUP BY m.id, m.title \
             ORDER BY count DESC, m.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Like count per genre, summed over the genre's movies.
    pub async fn genre_likes(pool: &PgPool) -> Result<Vec<GenreCountRow>, sqlx::Error> {
        sqlx::query_as::<_, GenreCountRow>(
            "SELECT g.id, g.name, COUNT(uv.id) AS count \
             FROM genres g \
             LEFT JOIN movies m ON m.genre_id = g.id \
             LEFT JOIN user_votes uv ON uv.movie_id = m.id AND uv.is_like \
             GROUP BY g.id, g.name \
             ORDER BY count DESC, g.id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
