//! Shared application state for all routes.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    /// Created once at startup; each handler borrows one connection per request.
    pub pool: SqlitePool,
}
