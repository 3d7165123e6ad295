//! Movie entity model and DTOs.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Running time in minutes.
    pub duration: i32,
    pub artist: String,
    pub genre_id: Option<DbId>,
    pub watch_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub artist: String,
    pub genre_id: Option<DbId>,
    pub watch_url: String,
}

/// DTO for a partial movie update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub artist: Option<String>,
    pub genre_id: Option<DbId>,
    pub watch_url: Option<String>,
}

impl UpdateMovie {
    /// `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.duration.is_none()
            && self.artist.is_none()
            && self.genre_id.is_none()
            && self.watch_url.is_none()
    }
}

/// Filters for `GET /movies/search`. All present filters are AND-ed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieSearch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub artist: Option<String>,
    pub genre_id: Option<DbId>,
}
