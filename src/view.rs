//! The records the dashboard renders, assembled from decoded payloads.

use aqi::reading::{AirQualityReport, Reading};
use aqi::{advise_for, Advisory, Color, Palette};
use serde::Serialize;

use crate::payload::{CurrentPayload, Weather};
use crate::DashboardError;

/// Everything the current-conditions cards need.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentView {
    pub air_quality: AirQualityReport,
    /// EPA category color for the AQI value
    pub color: Color,
    pub palette: Palette,
    pub advisory: Advisory,
    pub urgency_palette: Palette,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
}

impl CurrentView {
    /// Classifies the current reading.
    ///
    /// AQI, status, colors and advisory all follow the tier classified from
    /// `pm25`. A status label sent by the backend is not used.
    ///
    /// # Errors
    ///
    /// [`DashboardError::Aqi`] if the concentration is negative or not a number.
    pub fn build(payload: &CurrentPayload) -> Result<Self, DashboardError> {
        let pm25 = payload.air_quality.concentration()?;
        let air_quality = AirQualityReport::new(pm25, payload.air_quality.timestamp.clone());
        let advisory = advise_for(air_quality.status, pm25);
        let color = Color::for_aqi(air_quality.aqi);

        log::info!(
            "PM2.5 {} µg/m³: AQI {}, {} ({color:?}), urgency {}",
            air_quality.pm25,
            air_quality.aqi,
            air_quality.status,
            advisory.urgency
        );

        Ok(Self {
            palette: air_quality.status.palette(),
            urgency_palette: advisory.urgency.palette(),
            color,
            air_quality,
            advisory,
            weather: payload.weather.clone(),
        })
    }
}

/// One point on the forecast chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    #[serde(flatten)]
    pub report: AirQualityReport,
    pub chart_color: &'static str,
}

impl From<AirQualityReport> for ForecastPoint {
    fn from(report: AirQualityReport) -> Self {
        Self {
            chart_color: report.status.chart_color(),
            report,
        }
    }
}

/// The forecast chart and its worst hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastView {
    pub points: Vec<ForecastPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak: Option<AirQualityReport>,
}

impl ForecastView {
    /// Classifies forecast readings, keeping order.
    ///
    /// Readings with an invalid concentration are dropped with a warning.
    #[must_use]
    pub fn build(readings: &[Reading]) -> Self {
        let points: Vec<ForecastPoint> = readings
            .iter()
            .filter_map(|reading| match AirQualityReport::from_reading(reading) {
                Ok(report) => Some(ForecastPoint::from(report)),
                Err(e) => {
                    log::warn!(
                        "dropping forecast point at {:?}: {e}",
                        reading.timestamp.as_deref().unwrap_or("<no timestamp>")
                    );
                    None
                }
            })
            .collect();

        let peak = peak(&points).cloned();
        if let Some(peak) = &peak {
            log::debug!("forecast peak: AQI {} ({})", peak.aqi, peak.status);
        }

        Self { points, peak }
    }
}

/// The forecast point with the highest AQI. The earliest one wins a tie.
#[must_use]
pub fn peak(points: &[ForecastPoint]) -> Option<&AirQualityReport> {
    points
        .iter()
        .map(|point| &point.report)
        .fold(None, |best: Option<&AirQualityReport>, report| match best {
            Some(best) if best.aqi >= report.aqi => Some(best),
            _ => Some(report),
        })
}

/// The full dashboard: current conditions plus the forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub current: CurrentView,
    pub forecast: ForecastView,
}

impl DashboardView {
    /// # Errors
    ///
    /// Fails only if the current reading is invalid; see [`CurrentView::build`].
    pub fn build(current: &CurrentPayload, forecast: &[Reading]) -> Result<Self, DashboardError> {
        Ok(Self {
            current: CurrentView::build(current)?,
            forecast: ForecastView::build(forecast),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqi::{Tier, Urgency};

    fn reading(pm25: f64, hour: u32) -> Reading {
        Reading::new(pm25, format!("2025-01-01T{hour:02}:00:00Z"))
    }

    #[test]
    fn test_current_view_recomputes_status() {
        let payload = CurrentPayload {
            air_quality: Reading {
                pm25: 55.0,
                timestamp: None,
                status: Some("Moderate".to_string()),
            },
            weather: None,
        };
        let view = CurrentView::build(&payload).unwrap();
        assert_eq!(view.air_quality.status, Tier::UnhealthyForSensitiveGroups);
        assert_eq!(view.color, Color::Orange);
        assert_eq!(view.palette, Tier::UnhealthyForSensitiveGroups.palette());
        // Badge and guidance come from the same tier
        assert_eq!(
            view.advisory,
            Tier::UnhealthyForSensitiveGroups.advise(aqi::Concentration::new(55.0).unwrap())
        );
        assert_eq!(view.advisory.urgency, Urgency::Medium);
        assert_eq!(view.urgency_palette, Urgency::Medium.palette());
    }

    #[test]
    fn test_current_view_rejects_invalid_concentration() {
        let payload = CurrentPayload {
            air_quality: reading(-1.0, 0),
            weather: None,
        };
        assert!(matches!(
            CurrentView::build(&payload),
            Err(DashboardError::Aqi(aqi::AqiError::InvalidInput { .. }))
        ));
    }

    #[test]
    fn test_forecast_drops_invalid_points() {
        let readings = [reading(10.0, 0), reading(f64::NAN, 1), reading(70.0, 2)];
        let view = ForecastView::build(&readings);
        assert_eq!(view.points.len(), 2);
        assert_eq!(view.points[1].report.status, Tier::Unhealthy);
        assert_eq!(view.points[1].chart_color, "#EF4444");
    }

    #[test]
    fn test_peak_prefers_earliest_tie() {
        let view = ForecastView::build(&[
            reading(20.0, 0),
            reading(80.0, 1),
            reading(80.0, 2),
            reading(30.0, 3),
        ]);
        let peak = view.peak.unwrap();
        assert_eq!(peak.timestamp.as_deref(), Some("2025-01-01T01:00:00Z"));
    }

    #[test]
    fn test_empty_forecast_has_no_peak() {
        let view = ForecastView::build(&[]);
        assert!(view.points.is_empty());
        assert_eq!(view.peak, None);
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            serde_json::json!({ "points": [] })
        );
    }

    #[test]
    fn test_forecast_point_json_is_flat() {
        let point = ForecastPoint::from(AirQualityReport::from_reading(&reading(8.0, 6)).unwrap());
        assert_eq!(
            serde_json::to_value(&point).unwrap(),
            serde_json::json!({
                "pm25": 8.0,
                "aqi": 33,
                "status": "Good",
                "timestamp": "2025-01-01T06:00:00Z",
                "chartColor": "#10B981",
            })
        );
    }
}
