//! Health advisories and symptom warnings.
//!
//! Guidance text is chosen by [`Tier`]; the symptom list is chosen from the
//! concentration through its own band table. The two tables are independent
//! and need not agree tier for tier.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::{Concentration, Tier};

/// How loudly an advisory should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

/// Audience-specific guidance for one reading.
///
/// Built fresh for every call and never cached. All text is static.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Advisory {
    /// Guidance for the general population
    pub general: &'static str,
    /// Guidance for children, the elderly and people with heart or lung conditions
    pub sensitive: &'static str,
    /// What to do about outdoor activities
    pub activities: &'static str,
    /// Protective measures
    pub protection: &'static str,
    pub urgency: Urgency,
    /// Symptoms to watch for, least to most severe. Empty for clean air.
    pub symptoms: &'static [&'static str],
}

struct Guidance {
    general: &'static str,
    sensitive: &'static str,
    activities: &'static str,
    protection: &'static str,
    urgency: Urgency,
}

impl Guidance {
    const fn with_symptoms(self, symptoms: &'static [&'static str]) -> Advisory {
        Advisory {
            general: self.general,
            sensitive: self.sensitive,
            activities: self.activities,
            protection: self.protection,
            urgency: self.urgency,
            symptoms,
        }
    }
}

const UNAVAILABLE: Guidance = Guidance {
    general: "Air quality data unavailable. Exercise caution.",
    sensitive: "Sensitive individuals should limit outdoor exposure until data is available.",
    activities: "Consider postponing outdoor activities until air quality improves.",
    protection: "Monitor air quality updates and follow local health advisories.",
    urgency: Urgency::Medium,
};

const fn guidance(tier: Tier) -> Guidance {
    match tier {
        Tier::Good => Guidance {
            general: "Air quality is ideal for outdoor activities. No health concerns for the general population.",
            sensitive: "Even sensitive individuals can enjoy normal outdoor activities.",
            activities: "Perfect conditions for jogging, cycling, outdoor sports, and children's play.",
            protection: "No protective measures needed. Enjoy the fresh air!",
            urgency: Urgency::Low,
        },
        Tier::Moderate => Guidance {
            general: "Air quality is acceptable for most people. Unusually sensitive individuals may experience minor symptoms.",
            sensitive: "People with respiratory or heart conditions should consider reducing prolonged outdoor exertion.",
            activities: "Normal outdoor activities are fine. Sensitive individuals may want to limit intense exercise.",
            protection: "Consider wearing a mask if you have respiratory sensitivities during extended outdoor activities.",
            urgency: Urgency::Low,
        },
        Tier::UnhealthyForSensitiveGroups => Guidance {
            general: "Most people can continue normal activities, but may notice minor irritation.",
            sensitive: "Children, elderly, and people with heart/lung conditions should limit outdoor activities.",
            activities: "Reduce prolonged outdoor exertion. Move intense activities indoors or reschedule.",
            protection: "Sensitive groups should wear N95 masks outdoors. Close windows and use air purifiers indoors.",
            urgency: Urgency::Medium,
        },
        Tier::Unhealthy => Guidance {
            general: "Everyone may experience health effects. Limit outdoor activities and stay indoors when possible.",
            sensitive: "Children, elderly, and those with health conditions should avoid outdoor activities entirely.",
            activities: "Cancel outdoor events. Exercise indoors only. Schools should limit outdoor activities.",
            protection: "Wear N95 or P100 masks when outdoors. Keep windows closed. Use air purifiers with HEPA filters.",
            urgency: Urgency::High,
        },
        Tier::VeryUnhealthy => Guidance {
            general: "Health alert! Everyone should avoid outdoor activities. Serious health effects possible.",
            sensitive: "High-risk individuals should remain indoors and seek medical attention if experiencing symptoms.",
            activities: "All outdoor activities should be cancelled. Work from home if possible. Keep children indoors.",
            protection: "Essential outdoor travel only. Wear P100 masks. Seal windows and doors. Run air purifiers continuously.",
            urgency: Urgency::Critical,
        },
        Tier::Hazardous => Guidance {
            general: "Emergency conditions! Entire population at risk. Stay indoors and avoid all outdoor exposure.",
            sensitive: "Seek immediate medical attention if experiencing breathing difficulties, chest pain, or severe symptoms.",
            activities: "All outdoor activities prohibited. Emergency services may be limited. Shelter in place.",
            protection: "Do not go outside unless absolutely necessary. Use P100 masks for essential travel. Create clean air rooms.",
            urgency: Urgency::Critical,
        },
    }
}

/// Symptom bands as (inclusive upper bound in µg/m³, symptoms).
const SYMPTOM_BANDS: [(f64, &[&str]); 5] = [
    (12.0, &[]),
    (35.4, &["Mild eye irritation possible for sensitive individuals"]),
    (
        55.4,
        &[
            "Eye and throat irritation",
            "Coughing in sensitive individuals",
            "Fatigue possible",
        ],
    ),
    (
        150.4,
        &[
            "Coughing and throat irritation",
            "Shortness of breath",
            "Chest discomfort",
            "Fatigue and headaches",
        ],
    ),
    (
        250.4,
        &[
            "Severe respiratory symptoms",
            "Chest pain",
            "Difficulty breathing",
            "Heart palpitations",
            "Severe fatigue",
        ],
    ),
];

/// Symptoms listed above the last band.
pub const EMERGENCY_SYMPTOMS: &[&str] = &[
    "Emergency symptoms possible",
    "Severe breathing difficulties",
    "Chest pain",
    "Heart problems",
    "Seek immediate medical attention",
];

/// Symptoms to watch for at this concentration, least to most severe.
///
/// # Examples
///
/// ```
/// use aqi::{symptoms_for, Concentration};
///
/// assert!(symptoms_for(Concentration::ZERO).is_empty());
/// assert_eq!(symptoms_for(Concentration::from(40u16)).len(), 3);
/// ```
#[must_use]
pub fn symptoms_for(pm25: Concentration) -> &'static [&'static str] {
    SYMPTOM_BANDS
        .iter()
        .find(|(upper, _)| pm25.value() <= *upper)
        .map_or(EMERGENCY_SYMPTOMS, |(_, symptoms)| *symptoms)
}

/// Builds the advisory for a tier, with symptoms for the concentration.
///
/// # Examples
///
/// ```
/// use aqi::{advise_for, Concentration, Tier, Urgency};
///
/// let pm25 = Concentration::new(40.0)?;
/// let advisory = advise_for(Tier::classify(pm25), pm25);
/// assert_eq!(advisory.urgency, Urgency::Medium);
/// assert_eq!(advisory.symptoms.len(), 3);
/// # Ok::<(), aqi::AqiError>(())
/// ```
#[must_use]
pub fn advise_for(tier: Tier, pm25: Concentration) -> Advisory {
    guidance(tier).with_symptoms(symptoms_for(pm25))
}

/// Builds the advisory for a status label received from outside the crate.
///
/// Upstream data can carry a status we do not know. Rather than fail, this
/// falls back to [`Advisory::unavailable`].
#[must_use]
pub fn advise_for_status(status: &str, pm25: Concentration) -> Advisory {
    match status.parse::<Tier>() {
        Ok(tier) => advise_for(tier, pm25),
        Err(_) => {
            log::warn!("unrecognized air quality status {status:?}, using default advisory");
            Advisory::unavailable(pm25)
        }
    }
}

impl Advisory {
    /// The "data unavailable, exercise caution" advisory, at medium urgency.
    #[must_use]
    pub fn unavailable(pm25: Concentration) -> Self {
        UNAVAILABLE.with_symptoms(symptoms_for(pm25))
    }

    /// Whether the symptom list is the emergency list.
    #[must_use]
    pub fn is_emergency(&self) -> bool {
        self.symptoms == EMERGENCY_SYMPTOMS
    }
}

impl Tier {
    /// Method form of [`advise_for`].
    #[must_use]
    pub fn advise(self, pm25: Concentration) -> Advisory {
        advise_for(self, pm25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(value: f64) -> Concentration {
        Concentration::new(value).unwrap()
    }

    fn assert_populated(advisory: &Advisory) {
        assert!(!advisory.general.is_empty());
        assert!(!advisory.sensitive.is_empty());
        assert!(!advisory.activities.is_empty());
        assert!(!advisory.protection.is_empty());
    }

    #[test]
    fn test_symptom_band_lengths() {
        assert_eq!(symptoms_for(c(0.0)).len(), 0);
        assert_eq!(symptoms_for(c(12.0)).len(), 0);
        assert_eq!(symptoms_for(c(12.1)).len(), 1);
        assert_eq!(symptoms_for(c(35.4)).len(), 1);
        assert_eq!(symptoms_for(c(35.5)).len(), 3);
        assert_eq!(symptoms_for(c(55.4)).len(), 3);
        assert_eq!(symptoms_for(c(55.5)).len(), 4);
        assert_eq!(symptoms_for(c(150.4)).len(), 4);
        assert_eq!(symptoms_for(c(150.5)).len(), 5);
        assert_eq!(symptoms_for(c(250.4)).len(), 5);
        assert_eq!(symptoms_for(c(250.5)).len(), 5);
    }

    #[test]
    fn test_emergency_symptoms() {
        assert_eq!(symptoms_for(c(250.4))[0], "Severe respiratory symptoms");
        assert_eq!(symptoms_for(c(300.0)), EMERGENCY_SYMPTOMS);
        assert_eq!(
            symptoms_for(c(300.0)).last(),
            Some(&"Seek immediate medical attention")
        );
        assert!(advise_for(Tier::Hazardous, c(300.0)).is_emergency());
        assert!(!advise_for(Tier::VeryUnhealthy, c(200.0)).is_emergency());
    }

    #[test]
    fn test_urgency_by_tier() {
        let urgencies: alloc::vec::Vec<Urgency> = Tier::all()
            .iter()
            .map(|t| advise_for(*t, c(0.0)).urgency)
            .collect();
        assert_eq!(
            urgencies,
            [
                Urgency::Low,
                Urgency::Low,
                Urgency::Medium,
                Urgency::High,
                Urgency::Critical,
                Urgency::Critical,
            ]
        );
    }

    #[test]
    fn test_every_tier_is_populated() {
        for tier in Tier::all() {
            assert_populated(&advise_for(*tier, c(20.0)));
        }
        assert_populated(&Advisory::unavailable(c(20.0)));
    }

    #[test]
    fn test_advisory_uses_concentration_for_symptoms() {
        // Tier and symptom bands are independent inputs
        let advisory = advise_for(Tier::Good, c(100.0));
        assert_eq!(advisory.urgency, Urgency::Low);
        assert_eq!(advisory.symptoms.len(), 4);
    }

    #[test]
    fn test_advise_for_status() {
        assert_eq!(
            advise_for_status("Unhealthy", c(80.0)),
            advise_for(Tier::Unhealthy, c(80.0))
        );
        assert_eq!(
            advise_for_status("Very Unhealthy", c(200.0)).urgency,
            Urgency::Critical
        );
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let advisory = advise_for_status("Smoky", c(40.0));
        assert_eq!(advisory.urgency, Urgency::Medium);
        assert_eq!(
            advisory.general,
            "Air quality data unavailable. Exercise caution."
        );
        assert_eq!(advisory.symptoms.len(), 3);
        assert_eq!(advise_for_status("", c(40.0)), advisory);
    }

    #[test]
    fn test_urgency_labels() {
        assert_eq!(alloc::format!("{}", Urgency::Critical), "critical");
        assert_eq!("medium".parse::<Urgency>(), Ok(Urgency::Medium));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_advisory_json_shape() {
        let json = serde_json::to_value(advise_for(Tier::Good, c(8.0))).unwrap();
        assert_eq!(json["urgency"], "low");
        assert_eq!(json["symptoms"], serde_json::json!([]));
        assert!(json["general"].is_string());
        assert!(json["sensitive"].is_string());
        assert!(json["activities"].is_string());
        assert!(json["protection"].is_string());
    }
}
