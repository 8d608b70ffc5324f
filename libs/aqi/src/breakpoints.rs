//! EPA PM2.5 breakpoint table.
//!
//! Values are the 2012 PM2.5 NAAQS breakpoints, see:
//! https://document.airnow.gov/technical-assistance-document-for-the-reporting-of-daily-air-quailty.pdf
//!
//! Both the AQI calculation and the tier lookup walk this table, so the two
//! can never disagree about which segment a concentration belongs to.

use crate::{Concentration, Tier};

/// One interpolation segment: a concentration range paired with an index range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub tier: Tier,
    /// Lowest concentration of the segment, µg/m³
    pub c_low: f64,
    /// Highest concentration of the segment (inclusive), µg/m³
    pub c_high: f64,
    pub i_low: u16,
    pub i_high: u16,
}

impl Breakpoint {
    /// AQI = ((AQIhigh - AQIlow) / (PMhigh - PMlow)) * (PMactual - PMlow) + AQIlow
    ///
    /// Unrounded. Valid beyond `c_high` as a straight-line extrapolation.
    #[must_use]
    pub fn interpolate(&self, pm25: Concentration) -> f64 {
        let slope = f64::from(self.i_high - self.i_low) / (self.c_high - self.c_low);
        slope * (pm25.value() - self.c_low) + f64::from(self.i_low)
    }
}

pub const PM25_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint {
        tier: Tier::Good,
        c_low: 0.0,
        c_high: 12.0,
        i_low: 0,
        i_high: 50,
    },
    Breakpoint {
        tier: Tier::Moderate,
        c_low: 12.1,
        c_high: 35.4,
        i_low: 51,
        i_high: 100,
    },
    Breakpoint {
        tier: Tier::UnhealthyForSensitiveGroups,
        c_low: 35.5,
        c_high: 55.4,
        i_low: 101,
        i_high: 150,
    },
    Breakpoint {
        tier: Tier::Unhealthy,
        c_low: 55.5,
        c_high: 150.4,
        i_low: 151,
        i_high: 200,
    },
    Breakpoint {
        tier: Tier::VeryUnhealthy,
        c_low: 150.5,
        c_high: 250.4,
        i_low: 201,
        i_high: 300,
    },
    // Open-ended: anything above 500.4 extrapolates along this segment.
    Breakpoint {
        tier: Tier::Hazardous,
        c_low: 250.5,
        c_high: 500.4,
        i_low: 301,
        i_high: 500,
    },
];

/// Finds the segment for a concentration.
///
/// The first segment whose inclusive upper bound covers the value wins. Values
/// in the 0.1 µg/m³ gaps between published ranges (e.g. 12.05) belong to the
/// next segment, and everything past the table belongs to the last one.
#[must_use]
pub fn segment_for(pm25: Concentration) -> &'static Breakpoint {
    let last = &PM25_BREAKPOINTS[PM25_BREAKPOINTS.len() - 1];
    PM25_BREAKPOINTS[..PM25_BREAKPOINTS.len() - 1]
        .iter()
        .find(|bp| pm25.value() <= bp.c_high)
        .unwrap_or(last)
}
