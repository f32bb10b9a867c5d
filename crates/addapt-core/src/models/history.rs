use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How often a substance is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UseLevel {
    #[default]
    None,
    Occasional,
    Regular,
    Heavy,
}

impl UseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UseLevel::None => "none",
            UseLevel::Occasional => "occasional",
            UseLevel::Regular => "regular",
            UseLevel::Heavy => "heavy",
        }
    }
}

impl fmt::Display for UseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubstanceUse {
    pub alcohol: UseLevel,
    pub tobacco: UseLevel,
    pub cannabis: UseLevel,
    #[serde(default)]
    pub other: String,
}

/// Self-reported mental health background. Not scored; carried into the
/// referral letter as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MentalHealthHistory {
    #[serde(default)]
    pub previous_diagnoses: Vec<String>,
    #[serde(default)]
    pub current_medications: String,
    #[serde(default)]
    pub previous_treatments: String,
    #[serde(default)]
    pub substance_use: SubstanceUse,
    #[serde(default)]
    pub sleep_patterns: String,
    #[serde(default)]
    pub significant_life_events: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FamilyHistory {
    pub adhd_in_family: bool,
    #[serde(default)]
    pub adhd_relatives: String,
    pub anxiety_in_family: bool,
    pub depression_in_family: bool,
    #[serde(default)]
    pub other_mental_health_conditions: String,
}
