//! Integration tests for view tracking, vote upserts, and aggregate queries.
//!
//! Exercises the repositories and `PgViewershipStore` against a real
//! database, including the constraints that keep the stats engine's
//! invariants race-safe.

use assert_matches::assert_matches;
use marquee_core::error::CoreError;
use marquee_core::stats::{VoteKind, VoteStatus};
use marquee_core::viewership::StatsService;
use marquee_db::models::movie::CreateMovie;
use marquee_db::models::user::CreateUser;
use marquee_db::repositories::{MovieRepo, MovieViewRepo, StatsRepo, UserRepo, VoteRepo};
use marquee_db::store::PgViewershipStore;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, email: &str) -> i64 {
    let input = CreateUser {
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
        gender: "female".to_string(),
        role: "user".to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

async fn genre_id(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT id FROM genres WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn new_movie(pool: &PgPool, title: &str, genre_id: Option<i64>) -> i64 {
    let input = CreateMovie {
        title: title.to_string(),
        description: format!("{title} description"),
        duration: 100,
        artist: "Some Director".to_string(),
        genre_id,
        watch_url: format!("/uploads/{title}.mp4"),
    };
    MovieRepo::create(pool, &input).await.unwrap().id
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_view_insert_is_idempotent(pool: PgPool) {
    let user = new_user(&pool, "viewer@test.com").await;
    let movie = new_movie(&pool, "Heat", None).await;

    assert!(MovieViewRepo::insert_if_absent(&pool, user, movie).await.unwrap());
    let first = MovieViewRepo::find(&pool, user, movie).await.unwrap().unwrap();

    assert!(!MovieViewRepo::insert_if_absent(&pool, user, movie).await.unwrap());
    let second = MovieViewRepo::find(&pool, user, movie).await.unwrap().unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.viewed_at, second.viewed_at);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movie_views")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duration_update_keeps_view_identity(pool: PgPool) {
    let user = new_user(&pool, "tracer@test.com").await;
    let movie = new_movie(&pool, "Ronin", None).await;
    MovieViewRepo::insert_if_absent(&pool, user, movie).await.unwrap();
    let before = MovieViewRepo::find(&pool, user, movie).await.unwrap().unwrap();

    assert!(MovieViewRepo::update_duration(&pool, user, movie, 120).await.unwrap());

    let after = MovieViewRepo::find(&pool, user, movie).await.unwrap().unwrap();
    assert_eq!(after.duration_secs, Some(120));
    assert_eq!(after.viewed_at, before.viewed_at);
}

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_vote_upsert_toggles_and_reports_unchanged(pool: PgPool) {
    let user = new_user(&pool, "voter@test.com").await;
    let movie = new_movie(&pool, "Alien", None).await;
    MovieViewRepo::insert_if_absent(&pool, user, movie).await.unwrap();

    assert!(VoteRepo::upsert(&pool, user, movie, VoteKind::Like).await.unwrap());
    let liked = VoteRepo::find(&pool, user, movie).await.unwrap().unwrap();
    assert!(liked.is_like);
    assert!(!liked.is_unlike);

    assert!(!VoteRepo::upsert(&pool, user, movie, VoteKind::Like).await.unwrap());

    assert!(VoteRepo::upsert(&pool, user, movie, VoteKind::Dislike).await.unwrap());
    let disliked = VoteRepo::find(&pool, user, movie).await.unwrap().unwrap();
    assert!(!disliked.is_like);
    assert!(disliked.is_unlike);
    assert_eq!(disliked.id, liked.id, "toggle must update the same row");
    assert_eq!(disliked.created_at, liked.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_vote_without_view_violates_foreign_key(pool: PgPool) {
    let user = new_user(&pool, "sneaky@test.com").await;
    let movie = new_movie(&pool, "Jaws", None).await;

    let result = VoteRepo::upsert(&pool, user, movie, VoteKind::Like).await;
    assert!(result.is_err(), "vote without a view must be rejected");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_both_flags_rejected_by_check_constraint(pool: PgPool) {
    let user = new_user(&pool, "both@test.com").await;
    let movie = new_movie(&pool, "Tron", None).await;
    MovieViewRepo::insert_if_absent(&pool, user, movie).await.unwrap();

    let result = sqlx::query(
        "INSERT INTO user_votes (user_id, movie_id, is_like, is_unlike) VALUES ($1, $2, true, true)",
    )
    .bind(user)
    .bind(movie)
    .execute(&pool)
    .await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Concurrent first-time writes
// ---------------------------------------------------------------------------

const RACERS: usize = 8;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_racing_view_inserts_create_one_row(pool: PgPool) {
    let user = new_user(&pool, "racer@test.com").await;
    let movie = new_movie(&pool, "Le Mans", None).await;

    let handles: Vec<_> = (0..RACERS)
        .map(|_| {
            let pool = pool.clone();
            tokio::spawn(async move { MovieViewRepo::insert_if_absent(&pool, user, movie).await })
        })
        .collect();

    let mut inserted = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap() {
            inserted += 1;
        }
    }
    assert_eq!(inserted, 1, "exactly one racer may create the view");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movie_views WHERE user_id = $1")
        .bind(user)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_racing_identical_votes_write_once(pool: PgPool) {
    let user = new_user(&pool, "liker@test.com").await;
    let movie = new_movie(&pool, "Rush", None).await;
    MovieViewRepo::insert_if_absent(&pool, user, movie).await.unwrap();

    let handles: Vec<_> = (0..RACERS)
        .map(|_| {
            let pool = pool.clone();
            tokio::spawn(async move { VoteRepo::upsert(&pool, user, movie, VoteKind::Like).await })
        })
        .collect();

    let mut written = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap() {
            written += 1;
        }
    }
    assert_eq!(written, 1, "later identical votes must report unchanged");

    let vote = VoteRepo::find(&pool, user, movie).await.unwrap().unwrap();
    assert!(vote.is_like && !vote.is_unlike);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_racing_like_and_dislike_leave_one_exclusive_row(pool: PgPool) {
    let user = new_user(&pool, "flipper@test.com").await;
    let movie = new_movie(&pool, "Duel", None).await;
    MovieViewRepo::insert_if_absent(&pool, user, movie).await.unwrap();

    let (like, dislike) = tokio::join!(
        VoteRepo::upsert(&pool, user, movie, VoteKind::Like),
        VoteRepo::upsert(&pool, user, movie, VoteKind::Dislike),
    );
    assert!(like.unwrap());
    assert!(dislike.unwrap());

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_votes WHERE user_id = $1")
        .bind(user)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let vote = VoteRepo::find(&pool, user, movie).await.unwrap().unwrap();
    assert_ne!(vote.is_like, vote.is_unlike, "exactly one flag is set");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_racing_track_view_reports_one_first_view(pool: PgPool) {
    let user = new_user(&pool, "binge@test.com").await;
    let movie = new_movie(&pool, "Drive", None).await;
    let svc = std::sync::Arc::new(StatsService::new(PgViewershipStore::new(pool.clone())));

    let handles: Vec<_> = (0..RACERS)
        .map(|_| {
            let svc = svc.clone();
            tokio::spawn(async move { svc.track_view(movie, user).await })
        })
        .collect();

    let mut first_views = 0;
    for handle in handles {
        if !handle.await.unwrap().unwrap().already_viewed {
            first_views += 1;
        }
    }
    assert_eq!(first_views, 1);
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_queries_include_zero_counts_in_order(pool: PgPool) {
    let drama = genre_id(&pool, "Drama").await;
    let popular = new_movie(&pool, "Popular", Some(drama)).await;
    let quiet = new_movie(&pool, "Quiet", None).await;
    let a = new_user(&pool, "a@test.com").await;
    let b = new_user(&pool, "b@test.com").await;
    MovieViewRepo::insert_if_absent(&pool, a, popular).await.unwrap();
    MovieViewRepo::insert_if_absent(&pool, b, popular).await.unwrap();
    VoteRepo::upsert(&pool, a, popular, VoteKind::Like).await.unwrap();
    VoteRepo::upsert(&pool, b, popular, VoteKind::Dislike).await.unwrap();

    let views = StatsRepo::movie_views(&pool).await.unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!((views[0].id, views[0].count), (popular, 2));
    assert_eq!((views[1].id, views[1].count), (quiet, 0));

    let likes = StatsRepo::movie_likes(&pool).await.unwrap();
    assert_eq!((likes[0].id, likes[0].count), (popular, 1));

    let genres = StatsRepo::genre_views(&pool).await.unwrap();
    assert_eq!(genres.len(), 5, "every seeded genre is listed");
    assert_eq!((genres[0].id, genres[0].count), (drama, 2));
    assert!(genres[1..].iter().all(|g| g.count == 0));

    let genre_likes = StatsRepo::genre_likes(&pool).await.unwrap();
    assert_eq!((genre_likes[0].id, genre_likes[0].count), (drama, 1));
}

// ---------------------------------------------------------------------------
// Service over the real store
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_service_scenario_against_postgres(pool: PgPool) {
    let user = new_user(&pool, "scenario@test.com").await;
    let other = new_user(&pool, "other@test.com").await;
    let movie = new_movie(&pool, "Scenario", None).await;
    let svc = StatsService::new(PgViewershipStore::new(pool.clone()));

    assert!(!svc.track_view(movie, user).await.unwrap().already_viewed);
    assert!(svc.track_view(movie, user).await.unwrap().already_viewed);

    assert_eq!(svc.vote(user, movie).await.unwrap().status, VoteStatus::Success);
    assert_eq!(svc.vote(user, movie).await.unwrap().status, VoteStatus::Unchanged);
    assert_eq!(svc.unvote(user, movie).await.unwrap().status, VoteStatus::Success);

    let stored = VoteRepo::find(&pool, user, movie).await.unwrap().unwrap();
    assert!(!stored.is_like && stored.is_unlike);

    let err = svc.vote(other, movie).await.unwrap_err();
    assert_matches!(err, CoreError::PreconditionFailed(_));
    assert!(VoteRepo::find(&pool, other, movie).await.unwrap().is_none());

    svc.trace_viewership(user, movie, 120).await.unwrap();
    let view = MovieViewRepo::find(&pool, user, movie).await.unwrap().unwrap();
    assert_eq!(view.duration_secs, Some(120));

    let err = svc.trace_viewership(user, movie + 1000, 120).await.unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "Movie", .. });

    let voted = svc.user_voted_movies(user).await.unwrap();
    assert_eq!(voted.len(), 1);
    assert_eq!(voted[0].title, "Scenario");
    assert!(voted[0].is_unlike);
}
