//! Connection pool over the climate database. Opened read-only: the API never writes.

use crate::config::Settings;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Build the process-wide pool from settings.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?.read_only(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(
        database_url = %settings.database_url,
        max_connections = settings.max_connections,
        "database pool ready"
    );
    Ok(pool)
}
