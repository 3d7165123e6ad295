//! View tracking, vote toggling, and statistics use cases.
//!
//! [`StatsService`] owns the business rules; persistence is reached only
//! through the [`ViewershipStore`] port handed to it at construction.
//!
//! Rules enforced here:
//! - every operation on a movie first checks that the movie exists;
//! - at most one view is recorded per (user, movie);
//! - tracing a duration or voting requires a prior view;
//! - a vote is a like/dislike toggle and re-applying the current state
//!   reports [`VoteStatus::Unchanged`] without writing.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CoreError;
use crate::stats::{top_ties, GenreTally, Leaderboard, MovieTally, VoteKind, VoteStatus, VotedMovie};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Persistence port
// ---------------------------------------------------------------------------

/// Storage operations the stats engine relies on.
///
/// Write operations must be single atomic statements so concurrent
/// requests for the same (user, movie) cannot produce duplicate rows.
/// Aggregate queries must return rows ordered by count descending.
#[async_trait]
pub trait ViewershipStore: Send + Sync {
    /// Whether a movie with this id exists.
    async fn movie_exists(&self, movie_id: DbId) -> Result<bool, CoreError>;

    /// Whether the user has a recorded view of the movie.
    async fn view_exists(&self, user_id: DbId, movie_id: DbId) -> Result<bool, CoreError>;

    /// Insert a view stamped with the current time unless one already exists.
    ///
    /// Returns `true` if a row was inserted.
    async fn insert_view_if_absent(&self, user_id: DbId, movie_id: DbId)
        -> Result<bool, CoreError>;

    /// Set the watched duration (seconds) on an existing view.
    async fn update_view_duration(
        &self,
        user_id: DbId,
        movie_id: DbId,
        duration_secs: i32,
    ) -> Result<(), CoreError>;

    /// Insert or flip the vote for (user, movie) to `kind`.
    ///
    /// Returns `false` when the stored vote already equals `kind` and no
    /// write took place.
    async fn upsert_vote(
        &self,
        user_id: DbId,
        movie_id: DbId,
        kind: VoteKind,
    ) -> Result<bool, CoreError>;

    /// Every movie with its view count.
    async fn movie_view_counts(&self) -> Result<Vec<MovieTally>, CoreError>;

    /// Every genre with the view count of its movies.
    async fn genre_view_counts(&self) -> Result<Vec<GenreTally>, CoreError>;

    /// Every movie with its like count.
    async fn movie_like_counts(&self) -> Result<Vec<MovieTally>, CoreError>;

    /// Every genre with the like count of its movies.
    async fn genre_like_counts(&self) -> Result<Vec<GenreTally>, CoreError>;

    /// The user's votes joined with movie titles, most recent first.
    async fn votes_for_user(&self, user_id: DbId) -> Result<Vec<VotedMovie>, CoreError>;
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of [`StatsService::track_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewOutcome {
    pub already_viewed: bool,
}

/// Result of [`StatsService::vote`] and [`StatsService::unvote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteOutcome {
    pub kind: VoteKind,
    pub status: VoteStatus,
}

impl VoteOutcome {
    /// Human-readable message for API responses.
    pub fn message(&self) -> &'static str {
        match (self.kind, self.status) {
            (VoteKind::Like, VoteStatus::Success) => "Movie voted successfully",
            (VoteKind::Like, VoteStatus::Unchanged) => "User already voted for this movie",
            (VoteKind::Dislike, VoteStatus::Success) => "Movie unvoted successfully",
            (VoteKind::Dislike, VoteStatus::Unchanged) => "User already unvoted this movie",
        }
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// The view/vote/stats engine.
pub struct StatsService<S> {
    store: S,
}

impl<S: ViewershipStore> StatsService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record that `user_id` started watching `movie_id`.
    ///
    /// Idempotent: a second call reports `already_viewed` and writes nothing.
    pub async fn track_view(&self, movie_id: DbId, user_id: DbId) -> Result<ViewOutcome, CoreError> {
        self.ensure_movie(movie_id).await?;
        let inserted = self.store.insert_view_if_absent(user_id, movie_id).await?;
        Ok(ViewOutcome {
            already_viewed: !inserted,
        })
    }

    /// Store how long (seconds) the user watched a movie they already viewed.
    ///
    /// `duration_secs` is validated as positive by the caller.
    pub async fn trace_viewership(
        &self,
        user_id: DbId,
        movie_id: DbId,
        duration_secs: i32,
    ) -> Result<(), CoreError> {
        self.ensure_viewed(user_id, movie_id).await?;
        self.store
            .update_view_duration(user_id, movie_id, duration_secs)
            .await
    }

    /// Like a movie, clearing any previous dislike.
    pub async fn vote(&self, user_id: DbId, movie_id: DbId) -> Result<VoteOutcome, CoreError> {
        self.apply_vote(user_id, movie_id, VoteKind::Like).await
    }

    /// Dislike a movie, clearing any previous like.
    pub async fn unvote(&self, user_id: DbId, movie_id: DbId) -> Result<VoteOutcome, CoreError> {
        self.apply_vote(user_id, movie_id, VoteKind::Dislike).await
    }

    /// Movies and genres tied for the most views.
    pub async fn most_viewed(&self) -> Result<Leaderboard, CoreError> {
        let movies = self.store.movie_view_counts().await?;
        let genres = self.store.genre_view_counts().await?;
        Ok(Leaderboard {
            movies: top_ties(movies),
            genres: top_ties(genres),
        })
    }

    /// Movies and genres tied for the most likes.
    pub async fn most_voted(&self) -> Result<Leaderboard, CoreError> {
        let movies = self.store.movie_like_counts().await?;
        let genres = self.store.genre_like_counts().await?;
        Ok(Leaderboard {
            movies: top_ties(movies),
            genres: top_ties(genres),
        })
    }

    /// Every movie the user voted on, most recent vote first.
    pub async fn user_voted_movies(&self, user_id: DbId) -> Result<Vec<VotedMovie>, CoreError> {
        self.store.votes_for_user(user_id).await
    }

    async fn apply_vote(
        &self,
        user_id: DbId,
        movie_id: DbId,
        kind: VoteKind,
    ) -> Result<VoteOutcome, CoreError> {
        self.ensure_viewed(user_id, movie_id).await?;
        let written = self.store.upsert_vote(user_id, movie_id, kind).await?;
        let status = if written {
            VoteStatus::Success
        } else {
            VoteStatus::Unchanged
        };
        Ok(VoteOutcome { kind, status })
    }

    async fn ensure_movie(&self, movie_id: DbId) -> Result<(), CoreError> {
        if !self.store.movie_exists(movie_id).await? {
            return Err(CoreError::NotFound {
                entity: "Movie",
                id: movie_id,
            });
        }
        Ok(())
    }

    async fn ensure_viewed(&self, user_id: DbId, movie_id: DbId) -> Result<(), CoreError> {
        self.ensure_movie(movie_id).await?;
        if !self.store.view_exists(user_id, movie_id).await? {
            return Err(CoreError::PreconditionFailed(
                "Movie has not been viewed".to_string(),
            ));
        }
        Ok(())
    }
}
