//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Initialized once during startup and cloned into each handler through Axum's state
/// extraction. `DatabaseConnection` is a pool handle, so clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state around an established connection pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
