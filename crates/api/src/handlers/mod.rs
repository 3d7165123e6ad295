pub mod genres;
pub mod movies;
pub mod stats;
pub mod users;
