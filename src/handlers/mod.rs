//! HTTP handlers for the climate endpoints.

pub mod climate;
pub use climate::*;
