//! HTTP surface of the marquee movie catalog.
//!
//! The binary in `main.rs` wires configuration, the database pool, and the
//! router built by [`router::build_app_router`]. Integration tests build the
//! same router against a test database.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
