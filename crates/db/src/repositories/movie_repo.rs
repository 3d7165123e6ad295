//! Repository for the `movies` table.

use marquee_core::movies::Page;
use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, MovieSearch, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, duration, artist, genre_id, watch_url, \
                       created_at, updated_at";

/// Provides create, update, and listing operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, description, duration, artist, genre_id, watch_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration)
            .bind(&input.artist)
            .bind(input.genre_id)
            .bind(&input.watch_url)
            .fetch_one(pool)
            .await
    }

    /// Whether a movie with this id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Update a movie. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                duration = COALESCE($4, duration), \
                artist = COALESCE($5, artist), \
                genre_id = COALESCE($6, genre_id), \
                watch_url = COALESCE($7, watch_url) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration)
            .bind(&input.artist)
            .bind(input.genre_id)
            .bind(&input.watch_url)
            .fetch_optional(pool)
            .await
    }

    /// List one page of movies ordered by id.
    pub async fn list(pool: &PgPool, page: Page) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Movie>(&query)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(pool)
            .await
    }

    /// Search movies by case-insensitive substring on title, description,
    /// and artist, and by exact genre. Absent filters match everything.
    pub async fn search(pool: &PgPool, filter: &MovieSearch) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies \
             WHERE ($1::TEXT IS NULL OR title ILIKE '%' || $1 || '%') \
               AND ($2::TEXT IS NULL OR description ILIKE '%' || $2 || '%') \
               AND ($3::TEXT IS NULL OR artist ILIKE '%' || $3 || '%') \
               AND ($4::BIGINT IS NULL OR genre_id = $4) \
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(non_blank(&filter.title))
            .bind(non_blank(&filter.description))
            .bind(non_blank(&filter.artist))
            .bind(filter.genre_id)
            .fetch_all(pool)
            .await
    }
}

/// Treat empty query-string values (`?title=`) as absent.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
