//! Colors for presenting tiers and advisories.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::advisory::Urgency;
use crate::Tier;

/// Color enum provides colors corresponding to EPA AQI levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Maroon,
}

impl Color {
    /// Provides a Color enum variant value based on the
    /// specified AQI value. Uses the ranges provided by the
    /// EPA for mapping AQI to color.
    ///
    /// # Examples
    ///
    /// ```
    /// use aqi::{calculate_aqi, Color, Concentration};
    ///
    /// let aqi = calculate_aqi(Concentration::from(41u16));
    /// assert_eq!(Color::for_aqi(aqi), Color::Orange);
    /// ```
    #[must_use]
    pub const fn for_aqi(aqi: u32) -> Self {
        match aqi {
            0..=50 => Self::Green,
            51..=100 => Self::Yellow,
            101..=150 => Self::Orange,
            151..=200 => Self::Red,
            201..=300 => Self::Purple,
            _ => Self::Maroon,
        }
    }
}

/// Utility-class tokens for a status badge: text, fill and outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Palette {
    pub foreground: &'static str,
    pub background: &'static str,
    pub border: &'static str,
}

impl Palette {
    /// Neutral palette for a status we could not recognize.
    pub const UNKNOWN: Self = Self::new("text-gray-600", "bg-gray-50", "border-gray-200");

    const fn new(foreground: &'static str, background: &'static str, border: &'static str) -> Self {
        Self {
            foreground,
            background,
            border,
        }
    }
}

impl Tier {
    /// EPA category color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Good => Color::Green,
            Self::Moderate => Color::Yellow,
            Self::UnhealthyForSensitiveGroups => Color::Orange,
            Self::Unhealthy => Color::Red,
            Self::VeryUnhealthy => Color::Purple,
            Self::Hazardous => Color::Maroon,
        }
    }

    /// Badge colors for this tier.
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Good => Palette::new("text-green-600", "bg-green-50", "border-green-200"),
            Self::Moderate => Palette::new("text-yellow-600", "bg-yellow-50", "border-yellow-200"),
            Self::UnhealthyForSensitiveGroups => {
                Palette::new("text-orange-600", "bg-orange-50", "border-orange-200")
            }
            Self::Unhealthy => Palette::new("text-red-600", "bg-red-50", "border-red-200"),
            Self::VeryUnhealthy => {
                Palette::new("text-purple-600", "bg-purple-50", "border-purple-200")
            }
            Self::Hazardous => Palette::new("text-gray-900", "bg-gray-200", "border-gray-300"),
        }
    }

    /// Line color for forecast charts, as a hex string.
    #[must_use]
    pub const fn chart_color(self) -> &'static str {
        match self {
            Self::Good => "#10B981",
            Self::Moderate => "#F59E0B",
            Self::UnhealthyForSensitiveGroups => "#F97316",
            Self::Unhealthy => "#EF4444",
            Self::VeryUnhealthy => "#8B5CF6",
            Self::Hazardous => "#6B7280",
        }
    }
}

impl Urgency {
    /// Banner colors for an advisory of this urgency.
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Low => Palette::new("text-green-700", "bg-green-50", "border-green-200"),
            Self::Medium => Palette::new("text-yellow-700", "bg-yellow-50", "border-yellow-200"),
            Self::High => Palette::new("text-orange-700", "bg-orange-50", "border-orange-200"),
            Self::Critical => Palette::new("text-red-700", "bg-red-50", "border-red-200"),
        }
    }
}

/// Free-function form of [`Tier::palette`].
#[must_use]
pub const fn colors_for(tier: Tier) -> Palette {
    tier.palette()
}

/// Badge colors for a status label received from outside the crate.
/// Unrecognized labels get [`Palette::UNKNOWN`].
#[must_use]
pub fn palette_for_status(status: &str) -> Palette {
    status
        .parse::<Tier>()
        .map_or(Palette::UNKNOWN, Tier::palette)
}
