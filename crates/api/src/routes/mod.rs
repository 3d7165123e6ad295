pub mod genres;
pub mod health;
pub mod movies;
pub mod stats;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /user/register                         register (public)
/// /user/login                            login (public)
///
/// /movies                                list (public), create (admin)
/// /movies/search                         search (public)
/// /movies/{movie_id}                     update (admin)
///
/// /genres                                list (public)
///
/// /stats/{movie_id}/view                 track view (auth)
/// /stats/{movie_id}/trace                trace viewing duration (auth)
/// /stats/{movie_id}/vote                 like (auth)
/// /stats/{movie_id}/unvote               dislike (auth)
/// /stats/most-viewed-genre-movie         most viewed leaderboard (admin)
/// /stats/most-voted-genre-movie          most liked leaderboard (admin)
/// /stats/user/voted-movies               caller's votes (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/user", users::router())
        .nest("/movies", movies::router())
        .nest("/genres", genres::router())
        .nest("/stats", stats::router())
}
