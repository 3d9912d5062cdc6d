//! One method per endpoint. Each borrows a single pooled connection for its whole
//! unit of work; the connection returns to the pool when dropped, on success or error.

use crate::error::AppError;
use crate::response::{station_directory, DailySummary, PrecipitationEntry, RangeSummary, StationDirectory};
use crate::schema::{Measurement, Reading};
use crate::sql;
use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TOBS_WINDOW_DAYS: i64 = 365;

/// First date of the temperature window ending at `latest`: exactly 365 days earlier.
pub fn window_start(latest: &str) -> Result<String, AppError> {
    let latest_date = NaiveDate::parse_from_str(latest, DATE_FORMAT).map_err(|source| AppError::InvalidDate {
        value: latest.to_string(),
        source,
    })?;
    let start = latest_date - Duration::days(TOBS_WINDOW_DAYS);
    Ok(start.format(DATE_FORMAT).to_string())
}

pub struct ClimateService;

impl ClimateService {
    pub async fn precipitation(pool: &SqlitePool) -> Result<Vec<PrecipitationEntry>, AppError> {
        let mut conn = pool.acquire().await?;
        let sql = sql::select_precipitation();
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<(String, Option<Reading>)> = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;
        Ok(rows.into_iter().map(PrecipitationEntry::from).collect())
    }

    pub async fn stations(pool: &SqlitePool) -> Result<StationDirectory, AppError> {
        let mut conn = pool.acquire().await?;
        let sql = sql::select_stations();
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<(String, Option<String>)> = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;
        Ok(station_directory(rows))
    }

    /// Last 365 days of readings for the station with the most measurements, newest first.
    /// An empty measurement table yields no rows.
    pub async fn most_active_station_history(pool: &SqlitePool) -> Result<Vec<Measurement>, AppError> {
        let mut conn = pool.acquire().await?;

        let sql = sql::select_most_active_station();
        tracing::debug!(sql = %sql, "query");
        let active: Option<(String, i64)> = sqlx::query_as(&sql).fetch_optional(&mut *conn).await?;
        let Some((station, count)) = active else {
            return Ok(Vec::new());
        };

        let sql = sql::select_latest_date();
        tracing::debug!(sql = %sql, "query");
        let latest: Option<(String,)> = sqlx::query_as(&sql).fetch_optional(&mut *conn).await?;
        let Some((latest,)) = latest else {
            return Ok(Vec::new());
        };
        let start = window_start(&latest)?;
        tracing::debug!(station = %station, count, start = %start, latest = %latest, "temperature window");

        let sql = sql::select_station_window();
        tracing::debug!(sql = %sql, params = ?(&station, &start, &latest), "query");
        let rows: Vec<Measurement> = sqlx::query_as(&sql)
            .bind(&station)
            .bind(&start)
            .bind(&latest)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Per-date aggregates for every date `>= start`. `start` is compared as text, unvalidated.
    pub async fn daily_summary_from(pool: &SqlitePool, start: &str) -> Result<Vec<DailySummary>, AppError> {
        let mut conn = pool.acquire().await?;
        let sql = sql::select_daily_summary_from();
        tracing::debug!(sql = %sql, params = ?start, "query");
        let rows: Vec<(String, Option<Reading>, Option<Reading>, Option<Reading>)> =
            sqlx::query_as(&sql).bind(start).fetch_all(&mut *conn).await?;
        Ok(rows.into_iter().map(DailySummary::from).collect())
    }

    /// One aggregate over every row with `start <= date <= end`. Always exactly one element.
    pub async fn range_summary(pool: &SqlitePool, start: &str, end: &str) -> Result<Vec<RangeSummary>, AppError> {
        let mut conn = pool.acquire().await?;
        let sql = sql::select_range_summary();
        tracing::debug!(sql = %sql, params = ?(start, end), "query");
        let (tmin, tmax, tavg): (Option<Reading>, Option<Reading>, Option<Reading>) = sqlx::query_as(&sql)
            .bind(start)
            .bind(end)
            .fetch_one(&mut *conn)
            .await?;
        Ok(vec![RangeSummary {
            start: start.to_string(),
            end: end.to_string(),
            tmin,
            tmax,
            tavg,
        }])
    }
}
