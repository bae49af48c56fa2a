//! HTTP server command
//!
//! Opens the user store, runs the greeting server until shutdown, then
//! closes the store handle.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use howdy_server::db::connect;
use howdy_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8080)
    #[arg(long, short = 'b', default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Load database URL from args or env
    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("DATABASE_URL not set. Set via --database-url or the DATABASE_URL env var")?;

    tracing::info!("Starting howdy server on {}", args.bind);

    // Open the user store
    let pool = connect(&database_url)
        .await
        .context("Failed to open the user store")?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown), then release the store handle
    let result = run_server(pool.clone(), config).await;
    pool.close().await;

    result.context("Server error")?;
    Ok(())
}
