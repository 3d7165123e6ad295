//! Domain layer for the marquee movie-catalog backend.
//!
//! Contains no database dependencies. Persistence is reached through the
//! [`viewership::ViewershipStore`] port, implemented by `marquee-db`.

pub mod error;
pub mod movies;
pub mod roles;
pub mod stats;
pub mod types;
pub mod viewership;
