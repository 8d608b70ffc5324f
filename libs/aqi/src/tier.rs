//! EPA status tiers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

use crate::breakpoints;
use crate::error::{unrecognized_tier, AqiError};
use crate::Concentration;

/// Air quality status, ordered from least to most severe.
///
/// `Display`/`AsRef<str>` give the label shown to people
/// (`"Unhealthy for Sensitive Groups"`). `FromStr` accepts that label or the
/// variant name, ignoring ASCII case, and fails with
/// [`AqiError::UnrecognizedTier`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(
    ascii_case_insensitive,
    parse_err_ty = AqiError,
    parse_err_fn = unrecognized_tier
)]
pub enum Tier {
    /// 0.0 - 12.0 µg/m³
    Good,
    /// 12.1 - 35.4 µg/m³
    Moderate,
    /// 35.5 - 55.4 µg/m³
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "Unhealthy for Sensitive Groups",
            alias = "UnhealthyForSensitiveGroups"
        )
    )]
    #[strum(
        to_string = "Unhealthy for Sensitive Groups",
        serialize = "UnhealthyForSensitiveGroups"
    )]
    UnhealthyForSensitiveGroups,
    /// 55.5 - 150.4 µg/m³
    Unhealthy,
    /// 150.5 - 250.4 µg/m³
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Very Unhealthy", alias = "VeryUnhealthy")
    )]
    #[strum(to_string = "Very Unhealthy", serialize = "VeryUnhealthy")]
    VeryUnhealthy,
    /// 250.5 µg/m³ and above
    Hazardous,
}

impl Tier {
    /// Classifies a concentration using inclusive upper bounds:
    /// `≤12 → Good, ≤35.4 → Moderate, ≤55.4 → USG, ≤150.4 → Unhealthy,
    /// ≤250.4 → Very Unhealthy`, anything higher is Hazardous.
    ///
    /// # Examples
    ///
    /// ```
    /// use aqi::{Concentration, Tier};
    ///
    /// assert_eq!(Tier::classify(Concentration::new(12.0)?), Tier::Good);
    /// assert_eq!(Tier::classify(Concentration::new(12.1)?), Tier::Moderate);
    /// # Ok::<(), aqi::AqiError>(())
    /// ```
    #[must_use]
    pub fn classify(pm25: Concentration) -> Self {
        let tier = breakpoints::segment_for(pm25).tier;
        log::trace!("classified {pm25} as {tier}");
        tier
    }

    /// Returns all variants in order of severity.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Good,
            Self::Moderate,
            Self::UnhealthyForSensitiveGroups,
            Self::Unhealthy,
            Self::VeryUnhealthy,
            Self::Hazardous,
        ]
    }

    /// The label shown to people.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Concentration range of this tier as `(low, high)` in µg/m³.
    /// `high` is `None` for the open-ended Hazardous tier.
    #[must_use]
    pub fn range(self) -> (f64, Option<f64>) {
        let bp = &breakpoints::PM25_BREAKPOINTS[self as usize];
        match self {
            Self::Hazardous => (bp.c_low, None),
            _ => (bp.c_low, Some(bp.c_high)),
        }
    }
}

/// Free-function form of [`Tier::classify`].
#[must_use]
pub fn classify(pm25: Concentration) -> Tier {
    Tier::classify(pm25)
}
