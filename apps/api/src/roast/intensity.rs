//! Roast intensity: persona and phrasing sets for the user-selected intensity.
//!
//! The phrasing sets are injected into the prompt so the model's register
//! matches the slider; they never change how the response is formatted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// How hard the roast should hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastIntensity {
    Gentle,
    #[default]
    Honest,
    Brutal,
}

pub const ALL_INTENSITIES: &[RoastIntensity] = &[
    RoastIntensity::Gentle,
    RoastIntensity::Honest,
    RoastIntensity::Brutal,
];

/// Persona and phrasing calibrated to one intensity.
#[derive(Debug, Clone, Serialize)]
pub struct IntensityProfile {
    pub intensity: RoastIntensity,
    pub description: &'static str,
    pub persona: &'static str,
    pub use_phrasing: Vec<&'static str>,
    pub avoid_phrasing: Vec<&'static str>,
}

impl RoastIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoastIntensity::Gentle => "gentle",
            RoastIntensity::Honest => "honest",
            RoastIntensity::Brutal => "brutal",
        }
    }

    pub fn profile(&self) -> IntensityProfile {
        match self {
            RoastIntensity::Gentle => IntensityProfile {
                intensity: *self,
                description: "Kind, encouraging critique that still names every problem.",
                persona: "a supportive career coach who wraps each criticism in a concrete fix",
                use_phrasing: vec![
                    "consider",
                    "a quick win would be",
                    "you could strengthen",
                    "this would land better if",
                ],
                avoid_phrasing: vec!["disaster", "embarrassing", "lazy", "nobody cares"],
            },
            RoastIntensity::Honest => IntensityProfile {
                intensity: *self,
                description: "Direct, no-nonsense feedback with a dry sense of humour.",
                persona: "a seasoned recruiter who has read ten thousand resumes and says what they think",
                use_phrasing: vec![
                    "this does not say",
                    "a recruiter will skip",
                    "cut this",
                    "replace with",
                ],
                avoid_phrasing: vec!["great job", "amazing", "perfect", "trash"],
            },
            RoastIntensity::Brutal => IntensityProfile {
                intensity: *self,
                description: "Savage, comedic roast. Every weakness gets called out, loudly.",
                persona: "a stand-up comedian headlining a roast whose only subject is this resume",
                use_phrasing: vec![
                    "bold choice",
                    "somewhere a recruiter just sighed",
                    "this reads like",
                    "congratulations on",
                ],
                avoid_phrasing: vec![
                    "slurs or insults about protected characteristics",
                    "comments on the candidate's appearance",
                    "comments on the candidate's name",
                ],
            },
        }
    }
}

impl fmt::Display for RoastIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoastIntensity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gentle" | "mild" => Ok(RoastIntensity::Gentle),
            "honest" | "medium" => Ok(RoastIntensity::Honest),
            "brutal" | "savage" => Ok(RoastIntensity::Brutal),
            other => Err(AppError::Validation(format!(
                "unknown roast intensity '{other}' (expected gentle, honest or brutal)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_serde_lowercase() {
        let json = serde_json::to_string(&RoastIntensity::Brutal).unwrap();
        assert_eq!(json, r#""brutal""#);
        let parsed: RoastIntensity = serde_json::from_str(r#""gentle""#).unwrap();
        assert_eq!(parsed, RoastIntensity::Gentle);
    }

    #[test]
    fn test_intensity_default_is_honest() {
        assert_eq!(RoastIntensity::default(), RoastIntensity::Honest);
    }

    #[test]
    fn test_from_str_accepts_aliases_and_case() {
        assert_eq!("MILD".parse::<RoastIntensity>().unwrap(), RoastIntensity::Gentle);
        assert_eq!(" savage ".parse::<RoastIntensity>().unwrap(), RoastIntensity::Brutal);
        assert_eq!("honest".parse::<RoastIntensity>().unwrap(), RoastIntensity::Honest);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "nuclear".parse::<RoastIntensity>().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("nuclear")));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for intensity in ALL_INTENSITIES {
            assert_eq!(intensity.to_string().parse::<RoastIntensity>().unwrap(), *intensity);
        }
    }

    #[test]
    fn test_gentle_avoids_harsh_words() {
        let profile = RoastIntensity::Gentle.profile();
        assert!(profile.avoid_phrasing.contains(&"embarrassing"));
        assert!(!profile.use_phrasing.is_empty());
    }

    /// Brutal still forbids personal attacks; the roast targets the document only.
    #[test]
    fn test_brutal_keeps_personal_attack_guardrails() {
        let profile = RoastIntensity::Brutal.profile();
        assert!(profile
            .avoid_phrasing
            .iter()
            .any(|p| p.contains("protected characteristics")));
    }
}
