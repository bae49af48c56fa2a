//! howdy-server: HTTP greeting service over a Postgres user store
//!
//! Serves the `/hello` greeting from a shared read-only view of the store
//! and exposes the transactional user-store access the `howdy` CLI uses
//! for seeding.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use http::{run_server, ServerConfig, ServerError};
pub use state::AppState;
