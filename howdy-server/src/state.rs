//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::ScalarReader;

/// Shared application state
///
/// Holds a read-only view of the store, set once at construction and never
/// reassigned. Handlers clone the state, not the store.
#[derive(Clone)]
pub struct AppState {
    reader: Arc<dyn ScalarReader>,
}

impl AppState {
    /// State over the shared connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self::with_reader(Arc::new(pool))
    }

    /// State over any reader; handler tests pass stubs here.
    pub fn with_reader(reader: Arc<dyn ScalarReader>) -> Self {
        Self { reader }
    }

    pub fn reader(&self) -> &dyn ScalarReader {
        self.reader.as_ref()
    }
}
