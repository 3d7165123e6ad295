//! Route definitions for the `/stats` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/stats`.
///
/// ```text
/// POST /{movie_id}/view             -> track_view
/// POST /{movie_id}/trace            -> trace_viewership
/// POST /{movie_id}/vote             -> vote
/// POST /{movie_id}/unvote           -> unvote
/// GET  /most-viewed-genre-movie     -> most_viewed (admin)
/// GET  /most-voted-genre-movie      -> most_voted (admin)
/// GET  /user/voted-movies           -> user_voted_movies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{movie_id}/view", post(stats::track_view))
        .route("/{movie_id}/trace", post(stats::trace_viewership))
        .route("/{movie_id}/vote", post(stats::vote))
        .route("/{movie_id}/unvote", post(stats::unvote))
        .route("/most-viewed-genre-movie", get(stats::most_viewed))
        .route("/most-voted-genre-movie", get(stats::most_voted))
        .route("/user/voted-movies", get(stats::user_voted_movies))
}
