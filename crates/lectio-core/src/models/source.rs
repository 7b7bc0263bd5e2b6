//! Plan provenance: how a plan was generated and with which parameters.

use serde::{Deserialize, Serialize};

use crate::params::{LocalPlanParameters, RemotePlanParameters};

/// User profile bundle consumed by the preset generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresetProfile {
    /// Daily reading budget in minutes; drives plan duration and the number
    /// of chapters per day
    #[serde(default = "default_minutes_per_day")]
    pub minutes_per_day: u32,
    /// Optional free-form spiritual goal, recorded with the plan
    pub goal: Option<String>,
}

fn default_minutes_per_day() -> u32 {
    30
}

impl Default for PresetProfile {
    fn default() -> Self {
        Self {
            minutes_per_day: default_minutes_per_day(),
            goal: None,
        }
    }
}

/// Provenance of a plan, stored as a JSON column alongside the plan row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanSource {
    /// Fetched from the upstream plan-generator site and scraped
    Remote {
        parameters: RemotePlanParameters,
    },
    /// Generated locally without any network access
    Local {
        parameters: LocalPlanParameters,
    },
    /// Generated from a named preset
    Preset {
        slug: String,
        profile: PresetProfile,
    },
    /// Imported from an ICS calendar document
    Import {
        url: String,
    },
}

impl PlanSource {
    /// Short human-readable label for list output.
    pub fn kind(&self) -> &'static str {
        match self {
            PlanSource::Remote { .. } => "remote",
            PlanSource::Local { .. } => "local",
            PlanSource::Preset { .. } => "preset",
            PlanSource::Import { .. } => "import",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_json_round_trip() {
        let source = PlanSource::Preset {
            slug: "thompson-prayer-life".to_string(),
            profile: PresetProfile {
                minutes_per_day: 45,
                goal: Some("prayer_life".to_string()),
            },
        };

        let json = serde_json::to_string(&source).expect("serialize");
        assert!(json.contains("\"kind\":\"preset\""));
        let back: PlanSource = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, source);
    }

    #[test]
    fn test_profile_defaults() {
        let profile: PresetProfile = serde_json::from_str("{\"goal\":null}").expect("deserialize");
        assert_eq!(profile.minutes_per_day, 30);
    }
}
