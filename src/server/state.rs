//! Application state shared across all request handlers.
//!
//! `AppState` is the explicitly constructed storage handle that every handler receives
//! through Axum's state extraction. There is no process-wide database global.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// Cloned for each incoming request; `DatabaseConnection` is a connection pool, so
/// clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided database connection.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
