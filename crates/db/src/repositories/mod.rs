//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod genre_repo;
pub mod movie_repo;
pub mod movie_view_repo;
pub mod stats_repo;
pub mod user_repo;
pub mod vote_repo;

pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
pub use movie_view_repo::MovieViewRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;
