//! Climate handlers: precipitation, stations, most-active-station temperatures, date-range summaries.

use crate::error::AppError;
use crate::response::{flatten_tobs, DailySummary, PrecipitationEntry, RangeSummary, StationDirectory};
use crate::service::ClimateService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

pub const ROUTE_LISTING: &str = concat!(
    "Available Routes:<br/>",
    "/api/v1.0/precipitation<br/>",
    "/api/v1.0/stations<br/>",
    "/api/v1.0/tobs<br/>",
    "/api/v1.0/start<br/>",
    "/api/v1.0/start/end<br/>",
);

/// GET /: plain-text route listing.
pub async fn home() -> &'static str {
    ROUTE_LISTING
}

/// GET /api/v1.0/precipitation returns `[{date: prcp}, ...]` ordered by date.
pub async fn precipitation(State(state): State<AppState>) -> Result<Json<Vec<PrecipitationEntry>>, AppError> {
    Ok(Json(ClimateService::precipitation(&state.pool).await?))
}

/// GET /api/v1.0/stations returns `{station_id: name}`.
pub async fn stations(State(state): State<AppState>) -> Result<Json<StationDirectory>, AppError> {
    Ok(Json(ClimateService::stations(&state.pool).await?))
}

/// GET /api/v1.0/tobs returns a flat `[station, date, tobs, ...]` for the most active station's last year.
pub async fn tobs(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = ClimateService::most_active_station_history(&state.pool).await?;
    Ok(Json(flatten_tobs(&rows)))
}

/// GET /api/v1.0/:start returns per-date TMIN/TMAX/TAVG from `start` onward.
pub async fn summary_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<Vec<DailySummary>>, AppError> {
    Ok(Json(ClimateService::daily_summary_from(&state.pool, &start).await?))
}

/// GET /api/v1.0/:start/:end returns a single TMIN/TMAX/TAVG over the whole range.
pub async fn summary_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<RangeSummary>>, AppError> {
    Ok(Json(ClimateService::range_summary(&state.pool, &start, &end).await?))
}
