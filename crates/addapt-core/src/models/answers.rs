//! Ordinal questionnaire answers.
//!
//! Each set is a fixed-length array, one slot per item in questionnaire
//! order. `None` means the item was never answered; scorers reject it
//! rather than reading it as zero.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// ASRS v1.1 Part A: 6 items, 0 (Never) to 4 (Very Often).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AsrsAnswers {
    pub items: [Option<u8>; 6],
}

/// GAD-7: 7 items, 0 (Not at all) to 3 (Nearly every day).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Gad7Answers {
    pub items: [Option<u8>; 7],
}

/// PHQ-9: 9 items, 0 (Not at all) to 3 (Nearly every day).
/// Item 9 asks about thoughts of self-harm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Phq9Answers {
    pub items: [Option<u8>; 9],
}

impl AsrsAnswers {
    /// Build a fully answered set.
    pub fn complete(values: [u8; 6]) -> Self {
        Self {
            items: values.map(Some),
        }
    }
}

impl Gad7Answers {
    pub fn complete(values: [u8; 7]) -> Self {
        Self {
            items: values.map(Some),
        }
    }
}

impl Phq9Answers {
    pub fn complete(values: [u8; 9]) -> Self {
        Self {
            items: values.map(Some),
        }
    }

    /// The raw self-harm response, if answered.
    pub fn self_harm_item(&self) -> Option<u8> {
        self.items[8]
    }
}
