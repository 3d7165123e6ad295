//! Handlers for the `/stats` resource: view tracking, votes, and leaderboards.
//!
//! Business rules live in [`marquee_core::viewership::StatsService`]; these
//! handlers only parse transport input and shape responses.

use axum::extract::{Path, State};
use axum::Json;
use marquee_core::stats::{Leaderboard, VoteStatus, VotedMovie};
use marquee_core::types::DbId;
use marquee_core::viewership::VoteOutcome;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /stats/{movie_id}/trace`.
#[derive(Debug, Deserialize, Validate)]
pub struct TraceRequest {
    /// Seconds watched. A missing field reads as zero and is rejected.
    #[serde(default)]
    #[validate(range(min = 1, message = "duration must be a positive number of seconds"))]
    pub duration: i32,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub already_viewed: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub status: VoteStatus,
    pub message: &'static str,
}

impl From<VoteOutcome> for VoteResponse {
    fn from(outcome: VoteOutcome) -> Self {
        Self {
            status: outcome.status,
            message: outcome.message(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TraceResponse {
    pub movie_id: DbId,
    pub duration: i32,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/stats/{movie_id}/view
pub async fn track_view(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<DataResponse<ViewResponse>>> {
    let outcome = state.stats.track_view(movie_id, user.user_id).await?;

    let message = if outcome.already_viewed {
        "User has already viewed this movie"
    } else {
        tracing::info!(movie_id, user_id = user.user_id, "View tracked");
        "Viewership tracked successfully"
    };

    Ok(Json(DataResponse {
        data: ViewResponse {
            already_viewed: outcome.already_viewed,
            message,
        },
    }))
}

/// POST /api/v1/stats/{movie_id}/trace
pub async fn trace_viewership(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    AppJson(input): AppJson<TraceRequest>,
) -> AppResult<Json<DataResponse<TraceResponse>>> {
    input.validate()?;

    state
        .stats
        .trace_viewership(user.user_id, movie_id, input.duration)
        .await?;

    tracing::info!(
        movie_id,
        user_id = user.user_id,
        duration = input.duration,
        "Viewing duration traced"
    );

    Ok(Json(DataResponse {
        data: TraceResponse {
            movie_id,
            duration: input.duration,
        },
    }))
}

/// POST /api/v1/stats/{movie_id}/vote
pub async fn vote(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<DataResponse<VoteResponse>>> {
    let outcome = state.stats.vote(user.user_id, movie_id).await?;
    tracing::info!(movie_id, user_id = user.user_id, status = ?outcome.status, "Like applied");
    Ok(Json(DataResponse {
        data: outcome.into(),
    }))
}

/// POST /api/v1/stats/{movie_id}/unvote
pub async fn unvote(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<DataResponse<VoteResponse>>> {
    let outcome = state.stats.unvote(user.user_id, movie_id).await?;
    tracing::info!(movie_id, user_id = user.user_id, status = ?outcome.status, "Dislike applied");
    Ok(Json(DataResponse {
        data: outcome.into(),
    }))
}

/// GET /api/v1/stats/most-viewed-genre-movie
pub async fn most_viewed(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Leaderboard>>> {
    let board = state.stats.most_viewed().await?;
    Ok(Json(DataResponse { data: board }))
}

/// GET /api/v1/stats/most-voted-genre-movie
pub async fn most_voted(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Leaderboard>>> {
    let board = state.stats.most_voted().await?;
    Ok(Json(DataResponse { data: board }))
}

/// GET /api/v1/stats/user/voted-movies
pub async fn user_voted_movies(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<VotedMovie>>>> {
    let movies = state.stats.user_voted_movies(user.user_id).await?;
    Ok(Json(DataResponse { data: movies }))
}
