//! In-memory climate database fixtures.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use hawaii_climate::{climate_routes, AppState};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

const DDL: &[&str] = &[
    "CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, prcp FLOAT, tobs FLOAT)",
    "CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT, name TEXT, latitude FLOAT, longitude FLOAT, elevation FLOAT)",
];

/// Single-connection pool so every query sees the same in-memory database.
pub async fn pool_with_tables(ddl: &[&str]) -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    for stmt in ddl {
        sqlx::query(stmt).execute(&pool).await.expect("create table");
    }
    pool
}

pub async fn empty_pool() -> SqlitePool {
    pool_with_tables(DDL).await
}

pub async fn insert_measurement(pool: &SqlitePool, station: &str, date: &str, prcp: Option<f64>, tobs: f64) {
    sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
        .bind(station)
        .bind(date)
        .bind(prcp)
        .bind(tobs)
        .execute(pool)
        .await
        .expect("insert measurement");
}

pub async fn insert_station(pool: &SqlitePool, station: &str, name: &str) {
    sqlx::query("INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, 21.3, -157.8, 3.0)")
        .bind(station)
        .bind(name)
        .execute(pool)
        .await
        .expect("insert station");
}

/// Three stations; USC1 is the most active and USC2 holds the latest date (2017-08-24).
pub async fn hawaii_pool() -> SqlitePool {
    let pool = empty_pool().await;
    insert_station(&pool, "USC1", "Alpha, HI US").await;
    insert_station(&pool, "USC2", "Beta, HI US").await;
    insert_station(&pool, "USC3", "Gamma, HI US").await;

    insert_measurement(&pool, "USC1", "2016-08-23", Some(0.1), 70.0).await;
    insert_measurement(&pool, "USC1", "2016-08-24", None, 71.0).await;
    insert_measurement(&pool, "USC1", "2017-01-01", Some(0.0), 60.0).await;
    insert_measurement(&pool, "USC1", "2017-08-23", Some(0.2), 75.0).await;
    insert_measurement(&pool, "USC2", "2017-01-01", Some(1.5), 64.0).await;
    insert_measurement(&pool, "USC2", "2017-08-24", Some(0.3), 80.0).await;
    insert_measurement(&pool, "USC3", "2017-01-02", None, 62.0).await;
    pool
}

pub fn app(pool: SqlitePool) -> Router {
    climate_routes(AppState { pool })
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_slice(&body).expect("json body");
    (status, json)
}
