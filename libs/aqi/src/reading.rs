//! Records exchanged with the layer that fetches and renders readings.
//!
//! A [`Reading`] comes in from JSON: a PM2.5 number, an optional ISO-8601
//! timestamp that is passed through untouched, and an optional status label
//! computed upstream. An [`AirQualityReport`] goes out with the AQI and tier
//! recomputed from the concentration.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::advisory::{advise_for, Advisory};
use crate::error::AqiResult;
use crate::{calculate_aqi, Concentration, Tier};

/// A raw PM2.5 reading as decoded from upstream JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// µg/m³, not yet validated
    pub pm25: f64,
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Status label computed upstream. Untrusted.
    #[serde(default)]
    pub status: Option<String>,
}

impl Reading {
    #[must_use]
    pub fn new(pm25: f64, timestamp: impl Into<String>) -> Self {
        Self {
            pm25,
            timestamp: Some(timestamp.into()),
            status: None,
        }
    }

    /// # Errors
    ///
    /// [`AqiError::InvalidInput`](crate::AqiError::InvalidInput) if `pm25`
    /// is negative, NaN or infinite.
    pub fn concentration(&self) -> AqiResult<Concentration> {
        Concentration::new(self.pm25)
    }

    /// Advisory for this reading.
    ///
    /// Guidance follows the tier classified from `pm25`, so it always agrees
    /// with [`AirQualityReport::status`]. An upstream status label that
    /// disagrees is only logged.
    ///
    /// # Errors
    ///
    /// [`AqiError::InvalidInput`](crate::AqiError::InvalidInput) if `pm25`
    /// is negative, NaN or infinite.
    pub fn advisory(&self) -> AqiResult<Advisory> {
        let pm25 = self.concentration()?;
        let tier = Tier::classify(pm25);
        if let Some(status) = self.status.as_deref() {
            if status.parse::<Tier>() != Ok(tier) {
                log::debug!("upstream status {status:?} disagrees with classified {tier}");
            }
        }
        Ok(advise_for(tier, pm25))
    }
}

/// The classified form of a reading, as consumed by rendering code.
/// Output only: it is never read back from outside the crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQualityReport {
    pub pm25: f64,
    pub aqi: u32,
    pub status: Tier,
    pub timestamp: Option<String>,
}

impl AirQualityReport {
    #[must_use]
    pub fn new(pm25: Concentration, timestamp: Option<String>) -> Self {
        Self {
            pm25: pm25.value(),
            aqi: calculate_aqi(pm25),
            status: Tier::classify(pm25),
            timestamp,
        }
    }

    /// Classifies a reading. Any upstream status label is ignored here; the
    /// tier is always recomputed from the concentration.
    ///
    /// # Errors
    ///
    /// [`AqiError::InvalidInput`](crate::AqiError::InvalidInput) if `pm25`
    /// is negative, NaN or infinite.
    pub fn from_reading(reading: &Reading) -> AqiResult<Self> {
        Ok(Self::new(reading.concentration()?, reading.timestamp.clone()))
    }

    /// Concentration of this report, checked again since `pm25` is a public
    /// field.
    ///
    /// # Errors
    ///
    /// [`AqiError::InvalidInput`](crate::AqiError::InvalidInput) if `pm25`
    /// is negative, NaN or infinite.
    pub fn concentration(&self) -> AqiResult<Concentration> {
        Concentration::new(self.pm25)
    }
}

impl TryFrom<&Reading> for AirQualityReport {
    type Error = crate::AqiError;

    fn try_from(reading: &Reading) -> AqiResult<Self> {
        Self::from_reading(reading)
    }
}

/// Classifies a series of readings, such as an hourly forecast, keeping order.
///
/// # Errors
///
/// Fails on the first reading with an invalid concentration.
pub fn classify_series(readings: &[Reading]) -> AqiResult<Vec<AirQualityReport>> {
    readings.iter().map(AirQualityReport::from_reading).collect()
}
