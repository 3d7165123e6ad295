//! Aggregate rows returned by the statistics queries.

use marquee_core::stats::{GenreTally, MovieTally};
use marquee_core::types::DbId;
use sqlx::FromRow;

/// `(movie, count)` aggregate row.
#[derive(Debug, Clone, FromRow)]
pub struct MovieCountRow {
    pub id: DbId,
    pub title: String,
    pub count: i64,
}

/// `(genre, count)` aggregate row.
#[derive(Debug, Clone, FromRow)]
pub struct GenreCountRow {
    pub id: DbId,
    pub name: String,
    pub count: i64,
}

impl From<MovieCountRow> for MovieTally {
    fn from(row: MovieCountRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            count: row.count,
        }
    }
}

impl From<GenreCountRow> for GenreTally {
    fn from(row: GenreCountRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            count: row.count,
        }
    }
}
