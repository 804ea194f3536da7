//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::config::AccessMode;

/// Shared resources handed to every handler through Axum's `State`.
///
/// Cloning is cheap: `DatabaseConnection` is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Whether routes require a logged-in session.
    pub access_mode: AccessMode,
}

impl AppState {
    pub fn new(db: DatabaseConnection, access_mode: AccessMode) -> Self {
        Self { db, access_mode }
    }
}
