//! Dashboard side of the AQI library.
//!
//! Decodes the bodies served by the air quality backend ([`payload`]) and
//! turns them into the records the dashboard renders ([`view`]). Fetching is
//! left to the caller; this crate only ever sees response bodies.

use thiserror::Error;

pub mod payload;
pub mod view;

pub use payload::{parse_current, parse_forecast, CurrentPayload, ForecastPayload, Weather};
pub use view::{CurrentView, DashboardView, ForecastPoint, ForecastView};

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Aqi(#[from] aqi::AqiError),
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not read payload: {0}")]
    Io(#[from] std::io::Error),
}
