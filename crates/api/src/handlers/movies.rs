//! Handlers for the `/movies` resource.
//!
//! Creating and updating movies requires the admin role; listing and search
//! are public.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::movies::{resolve_page, validate_duration, validate_required_text, validate_title};
use marquee_core::types::DbId;
use marquee_db::models::movie::{CreateMovie, Movie, MovieSearch, UpdateMovie};
use marquee_db::repositories::{GenreRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateMovie) -> Result<(), CoreError> {
    validate_title(&input.title)?;
    validate_required_text("description", &input.description)?;
    validate_required_text("artist", &input.artist)?;
    validate_required_text("watch_url", &input.watch_url)?;
    validate_duration(input.duration)
}

fn validate_update(input: &UpdateMovie) -> Result<(), CoreError> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(description) = &input.description {
        validate_required_text("description", description)?;
    }
    if let Some(artist) = &input.artist {
        validate_required_text("artist", artist)?;
    }
    if let Some(watch_url) = &input.watch_url {
        validate_required_text("watch_url", watch_url)?;
    }
    if let Some(duration) = input.duration {
        validate_duration(duration)?;
    }
    Ok(())
}

/// Reject a `genre_id` that does not reference an existing genre.
async fn ensure_genre_exists(state: &AppState, genre_id: Option<DbId>) -> AppResult<()> {
    if let Some(id) = genre_id {
        if !GenreRepo::exists(&state.pool, id).await? {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Genre",
                id,
            }));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/movies
pub async fn create_movie(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMovie>,
) -> AppResult<(StatusCode, Json<DataResponse<Movie>>)> {
    validate_create(&input)?;
    ensure_genre_exists(&state, input.genre_id).await?;

    let movie = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(movie_id = movie.id, user_id = admin.user_id, "Movie created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: movie })))
}

/// PUT /api/v1/movies/{movie_id}
///
/// Partial update; only fields present in the body are written.
pub async fn update_movie(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    AppJson(input): AppJson<UpdateMovie>,
) -> AppResult<Json<DataResponse<Movie>>> {
    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }
    validate_update(&input)?;
    ensure_genre_exists(&state, input.genre_id).await?;

    let movie = MovieRepo::update(&state.pool, movie_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;

    tracing::info!(movie_id, user_id = admin.user_id, "Movie updated");

    Ok(Json(DataResponse { data: movie }))
}

/// GET /api/v1/movies?page=&limit=
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let page = resolve_page(params.page, params.limit)?;
    let movies = MovieRepo::list(&state.pool, page).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/search?title=&description=&artist=&genre_id=
pub async fn search_movies(
    State(state): State<AppState>,
    Query(filter): Query<MovieSearch>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = MovieRepo::search(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: movies }))
}
