//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text error responses carrying the store error

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{router, run_server, ServerConfig, ServerError};
