//! Payload module
//!
//! This module decodes the JSON the dashboard backend serves, before any of
//! it reaches the AQI library. Nothing here is trusted: concentrations are
//! validated later by [`aqi::Concentration`], and status labels go through
//! the library's fallback handling.

use aqi::reading::Reading;
use serde::{Deserialize, Serialize};

use crate::DashboardError;

/// Weather shown next to the air quality card. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    /// °C
    pub temperature: f64,
    /// Relative humidity, %
    pub humidity: f64,
    /// m/s
    pub wind_speed: f64,
    /// hPa
    pub pressure: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Body of the backend's `/current` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPayload {
    pub air_quality: Reading,
    #[serde(default)]
    pub weather: Option<Weather>,
}

/// Body of a forecast endpoint.
///
/// The backend's `/predict/multi` answers with `{"predictions": [[timestamp, pm25], ...]}`,
/// while an already classified series is a plain array of readings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ForecastPayload {
    Predictions { predictions: Vec<(String, f64)> },
    Series(Vec<Reading>),
}

impl ForecastPayload {
    /// Flattens either shape into readings, keeping order.
    #[must_use]
    pub fn into_readings(self) -> Vec<Reading> {
        match self {
            Self::Predictions { predictions } => predictions
                .into_iter()
                .map(|(timestamp, pm25)| Reading::new(pm25, timestamp))
                .collect(),
            Self::Series(readings) => readings,
        }
    }
}

/// Parses the body of the `/current` endpoint.
///
/// # Arguments
///
/// * `json` - Response body
///
/// # Returns
///
/// The decoded payload, or an error if the body is not the expected shape.
///
/// # Examples
///
/// ```
/// use aqi_dashboard::payload::parse_current;
///
/// let payload = parse_current(r#"{"airQuality": {"pm25": 41.2, "status": "Unhealthy for Sensitive Groups"}}"#)?;
/// assert_eq!(payload.air_quality.pm25, 41.2);
/// assert!(payload.weather.is_none());
/// # Ok::<(), aqi_dashboard::DashboardError>(())
/// ```
pub fn parse_current(json: &str) -> Result<CurrentPayload, DashboardError> {
    let payload: CurrentPayload = serde_json::from_str(json)?;
    log::debug!(
        "decoded current payload: pm25={} status={:?}",
        payload.air_quality.pm25,
        payload.air_quality.status
    );
    Ok(payload)
}

/// Parses the body of a forecast endpoint into readings.
///
/// # Arguments
///
/// * `json` - Response body, in either [`ForecastPayload`] shape
///
/// # Returns
///
/// Readings in the order they were received, or an error if the body is
/// neither shape.
///
/// # Examples
///
/// ```
/// use aqi_dashboard::payload::parse_forecast;
///
/// let readings = parse_forecast(r#"{"predictions": [["2025-01-01T00:00:00", 48.5]]}"#)?;
/// assert_eq!(readings[0].pm25, 48.5);
/// # Ok::<(), aqi_dashboard::DashboardError>(())
/// ```
pub fn parse_forecast(json: &str) -> Result<Vec<Reading>, DashboardError> {
    let readings = serde_json::from_str::<ForecastPayload>(json)?.into_readings();
    log::debug!("decoded {} forecast readings", readings.len());
    Ok(readings)
}
