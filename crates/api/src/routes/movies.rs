//! Route definitions for the `/movies` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET  /              -> list_movies
/// POST /              -> create_movie (admin)
/// GET  /search        -> search_movies
/// PUT  /{movie_id}    -> update_movie (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies).post(movies::create_movie))
        .route("/search", get(movies::search_movies))
        .route("/{movie_id}", put(movies::update_movie))
}
