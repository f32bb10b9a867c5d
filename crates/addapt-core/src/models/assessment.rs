use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answers::{AsrsAnswers, Gad7Answers, Phq9Answers};
use super::diva::DivaAnswers;
use super::history::{FamilyHistory, MentalHealthHistory};
use super::personal::PersonalInformation;
use crate::error::CoreError;

/// A submitted assessment: everything the patient answered, as collected
/// by the form layer. Scores are never stored here; they are derived from
/// it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub personal_info: PersonalInformation,
    pub asrs: AsrsAnswers,
    pub gad7: Gad7Answers,
    pub phq9: Phq9Answers,
    pub diva: DivaAnswers,
    #[serde(default)]
    pub mental_health_history: MentalHealthHistory,
    #[serde(default)]
    pub family_history: FamilyHistory,
    pub completed_at: jiff::Timestamp,
}

impl Assessment {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
