//! Vote model: a user's like/dislike on a movie they viewed.

use marquee_core::stats::VotedMovie;
use marquee_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_votes` table. `is_like` and `is_unlike` are never
/// both true (`ck_user_votes_exclusive`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vote {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: DbId,
    pub is_like: bool,
    pub is_unlike: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A vote joined with its movie title.
#[derive(Debug, Clone, FromRow)]
pub struct VotedMovieRow {
    pub movie_id: DbId,
    pub title: String,
    pub is_like: bool,
    pub is_unlike: bool,
    pub voted_at: Timestamp,
}

impl From<VotedMovieRow> for VotedMovie {
    fn from(row: VotedMovieRow) -> Self {
        Self {
            movie_id: row.movie_id,
            title: row.title,
            is_like: row.is_like,
            is_unlike: row.is_unlike,
            voted_at: row.voted_at,
        }
    }
}
