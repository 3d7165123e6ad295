//! Movie view model: one row per (user, movie) once the user starts watching.

use marquee_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `movie_views` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieView {
    pub id: DbId,
    pub movie_id: DbId,
    pub user_id: DbId,
    pub viewed_at: Timestamp,
    /// Seconds watched, set later by a trace call.
    pub duration_secs: Option<i32>,
}
