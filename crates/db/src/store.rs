//! sqlx-backed implementation of the core [`ViewershipStore`] port.

use async_trait::async_trait;
use marquee_core::error::CoreError;
use marquee_core::stats::{GenreTally, MovieTally, VoteKind, VotedMovie};
use marquee_core::types::DbId;
use marquee_core::viewership::ViewershipStore;

use crate::repositories::{MovieRepo, MovieViewRepo, StatsRepo, VoteRepo};
use crate::DbPool;

/// [`ViewershipStore`] over a PostgreSQL pool.
///
/// Cheap to clone; the pool is reference counted.
#[derive(Clone)]
pub struct PgViewershipStore {
    pool: DbPool,
}

impl PgViewershipStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Database failures cross the port as opaque internal errors. The detail is
/// logged here and never reaches the client.
fn internal(op: &'static str) -> impl FnOnce(sqlx::Error) -> CoreError {
    move |err| {
        tracing::error!(error = %err, op, "Viewership store query failed");
        CoreError::Internal(format!("{op} failed"))
    }
}

#[async_trait]
impl ViewershipStore for PgViewershipStore {
    async fn movie_exists(&self, movie_id: DbId) -> Result<bool, CoreError> {
        MovieRepo::exists(&self.pool, movie_id)
            .await
            .map_err(internal("movie existence check"))
    }

    async fn view_exists(&self, user_id: DbId, movie_id: DbId) -> Result<bool, CoreError> {
        MovieViewRepo::exists(&self.pool, user_id, movie_id)
            .await
            .map_err(internal("view existence check"))
    }

    async fn insert_view_if_absent(
        &self,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<bool, CoreError> {
        MovieViewRepo::insert_if_absent(&self.pool, user_id, movie_id)
            .await
            .map_err(internal("view insert"))
    }

    async fn update_view_duration(
        &self,
        user_id: DbId,
        movie_id: DbId,
        duration_secs: i32,
    ) -> Result<(), CoreError> {
        MovieViewRepo::update_duration(&self.pool, user_id, movie_id, duration_secs)
            .await
            .map_err(internal("view duration update"))?;
        Ok(())
    }

    async fn upsert_vote(
        &self,
        user_id: DbId,
        movie_id: DbId,
        kind: VoteKind,
    ) -> Result<bool, CoreError> {
        VoteRepo::upsert(&self.pool, user_id, movie_id, kind)
            .await
            .map_err(internal("vote upsert"))
    }

    async fn movie_view_counts(&self) -> Result<Vec<MovieTally>, CoreError> {
        let rows = StatsRepo::movie_views(&self.pool)
            .await
            .map_err(internal("movie view counts"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn genre_view_counts(&self) -> Result<Vec<GenreTally>, CoreError> {
        let rows = StatsRepo::genre_views(&self.pool)
            .await
            .map_err(internal("genre view counts"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn movie_like_counts(&self) -> Result<Vec<MovieTally>, CoreError> {
        let rows = StatsRepo::movie_likes(&self.pool)
            .await
            .map_err(internal("movie like counts"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn genre_like_counts(&self) -> Result<Vec<GenreTally>, CoreError> {
        let rows = StatsRepo::genre_likes(&self.pool)
            .await
            .map_err(internal("genre like counts"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn votes_for_user(&self, user_id: DbId) -> Result<Vec<VotedMovie>, CoreError> {
        let rows = VoteRepo::list_for_user(&self.pool, user_id)
            .await
            .map_err(internal("voted movies listing"))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
