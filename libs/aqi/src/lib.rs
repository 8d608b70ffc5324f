//! AQI library
//!
//! This library turns a PM2.5 concentration into everything a dashboard
//! shows for it: the EPA Air Quality Index, the status tier, colors for the
//! tier, and a health advisory with a list of symptoms to watch for.
//!
//! Every function is pure and allocation free, so they can be called from any
//! thread. Raw numbers are validated once, when a [`Concentration`] is built;
//! after that nothing can fail. Status labels arriving as text are the one
//! other boundary, see [`advise_for_status`] and [`palette_for_status`].
//!
//! The crate is `no_std` by default. Enable `serde` for the JSON boundary
//! records in [`reading`].
//!
//! ```
//! use aqi::{advise_for, calculate_aqi, Concentration, Tier, Urgency};
//!
//! let pm25 = Concentration::new(8.0)?;
//! assert_eq!(calculate_aqi(pm25), 33);
//!
//! let tier = Tier::classify(pm25);
//! assert_eq!(tier, Tier::Good);
//! assert_eq!(advise_for(tier, pm25).urgency, Urgency::Low);
//! # Ok::<(), aqi::AqiError>(())
//! ```

#![no_std]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod advisory;
pub mod breakpoints;
pub mod color;
mod concentration;
mod error;
#[cfg(feature = "serde")]
pub mod reading;
mod tier;

pub use advisory::{advise_for, advise_for_status, symptoms_for, Advisory, Urgency};
pub use color::{colors_for, palette_for_status, Color, Palette};
pub use concentration::Concentration;
pub use error::{AqiError, AqiResult};
pub use tier::{classify, Tier};

/// Calculate the AQI for the provided PM2.5 concentration.
///
/// # Arguments
///
/// * `pm25` - A validated PM2.5 concentration
///
/// # Returns
///
/// The calculated AQI value using breakpoints and a formula
/// provided by the EPA, rounded half away from zero. These values may be
/// confirmed using the calculator at
/// https://www.airnow.gov/aqi/aqi-calculator-concentration/ (2012 breakpoints).
/// Concentrations above 500.4 µg/m³ keep following the last segment's line,
/// so the result is not capped at 500.
///
/// # Examples
///
/// ```
/// use aqi::{calculate_aqi, Concentration};
///
/// let pm25_concentration = Concentration::from(41u16);
/// assert_eq!(115, calculate_aqi(pm25_concentration));
///
/// let pm25_concentration = Concentration::from(7u16);
/// assert_eq!(29, calculate_aqi(pm25_concentration));
/// ```
#[must_use]
pub fn calculate_aqi(pm25: Concentration) -> u32 {
    let segment = breakpoints::segment_for(pm25);
    let aqi = libm::round(segment.interpolate(pm25));
    // `as` saturates, so extreme extrapolations stop at u32::MAX
    aqi.max(0.0) as u32
}
