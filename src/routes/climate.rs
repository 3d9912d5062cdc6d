//! Climate routes. Static segments take precedence over the `:start` capture.

use crate::handlers::climate::{home, precipitation, stations, summary_between, summary_from, tobs};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn climate_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/:start", get(summary_from))
        .route("/api/v1.0/:start/:end", get(summary_between))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
