//! Hawaii climate API: read-only REST endpoints over the measurement and station tables.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use routes::climate_routes;
pub use service::ClimateService;
pub use state::AppState;
pub use store::connect;
