//! Validated PM2.5 concentrations.

use core::fmt;

use crate::error::{AqiError, AqiResult};

/// A PM2.5 concentration in µg/m³.
///
/// Always finite and non-negative. There is no upper bound: readings above
/// the last breakpoint are still valid and land in the terminal tier.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Concentration(f64);

impl Concentration {
    /// Zero concentration.
    pub const ZERO: Self = Self(0.0);

    /// Validates a raw reading.
    ///
    /// # Errors
    ///
    /// Returns [`AqiError::InvalidInput`] for negative, NaN or infinite values.
    /// Invalid readings are rejected, never clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use aqi::Concentration;
    ///
    /// assert!(Concentration::new(8.0).is_ok());
    /// assert!(Concentration::new(-1.0).is_err());
    /// assert!(Concentration::new(f64::NAN).is_err());
    /// ```
    pub fn new(value: f64) -> AqiResult<Self> {
        if !value.is_finite() || value < 0.0 {
            log::debug!("rejecting PM2.5 concentration {value}");
            return Err(AqiError::InvalidInput { value });
        }

        // `-0.0 < 0.0` is false, so normalize it here.
        Ok(Self(value + 0.0))
    }

    /// Raw value in µg/m³.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Concentration {
    type Error = AqiError;

    fn try_from(value: f64) -> AqiResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<f32> for Concentration {
    type Error = AqiError;

    fn try_from(value: f32) -> AqiResult<Self> {
        Self::new(f64::from(value))
    }
}

impl From<u16> for Concentration {
    /// Integer sensor readings (such as the PMSA003I's environmental PM2.5
    /// register) are always valid.
    fn from(value: u16) -> Self {
        Self(f64::from(value))
    }
}

impl From<Concentration> for f64 {
    fn from(c: Concentration) -> Self {
        c.0
    }
}

impl fmt::Display for Concentration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} µg/m³", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_values() {
        assert_eq!(
            Concentration::new(-0.1),
            Err(AqiError::InvalidInput { value: -0.1 })
        );
        assert!(Concentration::new(f64::NAN).is_err());
        assert!(Concentration::new(f64::INFINITY).is_err());
        assert!(Concentration::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_accepts_valid_values() {
        assert_eq!(Concentration::new(0.0).map(Concentration::value), Ok(0.0));
        assert_eq!(Concentration::new(12.1).map(Concentration::value), Ok(12.1));
        // No upper bound
        assert_eq!(
            Concentration::new(10_000.0).map(Concentration::value),
            Ok(10_000.0)
        );
        assert_eq!(Concentration::from(41u16).value(), 41.0);
    }

    #[test]
    fn test_negative_zero_normalizes() {
        let c = Concentration::new(-0.0).unwrap();
        assert!(c.value().is_sign_positive());
        assert_eq!(c, Concentration::ZERO);
    }
}
