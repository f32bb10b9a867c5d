use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Patient and GP details used to address the referral letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonalInformation {
    pub full_name: String,
    pub date_of_birth: jiff::civil::Date,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub gp_name: String,
    pub gp_practice: String,
    pub gp_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nhs_number: Option<String>,
}

impl PersonalInformation {
    /// Check that every field the letter depends on is filled in.
    /// The NHS number is optional.
    pub fn validate(&self) -> Result<(), CoreError> {
        let required = [
            ("full_name", &self.full_name),
            ("gender", &self.gender),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("gp_name", &self.gp_name),
            ("gp_practice", &self.gp_practice),
            ("gp_address", &self.gp_address),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(CoreError::MissingField(field.to_string())),
            None => Ok(()),
        }
    }

    /// Uppercase first letter of each word in the patient's name.
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Last word of the GP's name, for the salutation.
    pub fn gp_surname(&self) -> &str {
        self.gp_name.split_whitespace().last().unwrap_or_default()
    }

    /// The NHS number, if one was given and it isn't blank.
    pub fn nhs_number(&self) -> Option<&str> {
        self.nhs_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}
