use std::fmt;

use addapt_core::models::Gad7Answers;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::scoring::{complete_items, sum, Item, ResponseOption};
use crate::{Instrument, ScoredInstrument};

static ITEMS: [Item; 7] = [
    Item::ordinal("q1", "Feeling nervous, anxious, or on edge"),
    Item::ordinal("q2", "Not being able to stop or control worrying"),
    Item::ordinal("q3", "Worrying too much about different things"),
    Item::ordinal("q4", "Trouble relaxing"),
    Item::ordinal("q5", "Being so restless that it's hard to sit still"),
    Item::ordinal("q6", "Becoming easily annoyed or irritable"),
    Item::ordinal("q7", "Feeling afraid as if something awful might happen"),
];

/// Shared by GAD-7 and PHQ-9.
pub(crate) static TWO_WEEK_FREQUENCY: [ResponseOption; 4] = [
    ResponseOption { value: 0, label: "Not at all" },
    ResponseOption { value: 1, label: "Several days" },
    ResponseOption { value: 2, label: "More than half the days" },
    ResponseOption { value: 3, label: "Nearly every day" },
];

pub const INTRO: &str =
    "Over the last 2 weeks, how often have you been bothered by the following problems?";

/// GAD-7: Generalized Anxiety Disorder 7-item scale. Total 0–21.
pub struct Gad7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Gad7Severity {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

impl Gad7Severity {
    pub fn from_total(total: u32) -> Self {
        match total {
            0..=4 => Gad7Severity::Minimal,
            5..=9 => Gad7Severity::Mild,
            10..=14 => Gad7Severity::Moderate,
            _ => Gad7Severity::Severe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gad7Severity::Minimal => "minimal",
            Gad7Severity::Mild => "mild",
            Gad7Severity::Moderate => "moderate",
            Gad7Severity::Severe => "severe",
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            Gad7Severity::Minimal => {
                "Minimal anxiety symptoms detected. Your anxiety levels appear to be within normal range."
            }
            Gad7Severity::Mild => {
                "Mild anxiety symptoms detected. Some anxiety is present but may not significantly impact daily functioning."
            }
            Gad7Severity::Moderate => {
                "Moderate anxiety symptoms detected. These symptoms may be affecting your daily life and warrant clinical attention."
            }
            Gad7Severity::Severe => {
                "Severe anxiety symptoms detected. These symptoms are likely significantly impacting your daily functioning and require professional intervention."
            }
        }
    }

    /// Moderate and above are reported as a co-occurring condition.
    pub fn is_clinically_significant(&self) -> bool {
        *self >= Gad7Severity::Moderate
    }
}

impl fmt::Display for Gad7Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Gad7Score {
    pub total_score: u32,
    pub severity: Gad7Severity,
    pub interpretation: String,
}

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn items(&self) -> &[Item] {
        &ITEMS
    }

    fn response_options(&self) -> &[ResponseOption] {
        &TWO_WEEK_FREQUENCY
    }
}

impl ScoredInstrument for Gad7 {
    type Answers = Gad7Answers;
    type Score = Gad7Score;

    fn score(&self, answers: &Gad7Answers) -> Result<Gad7Score, InstrumentError> {
        let values = complete_items("GAD-7", &answers.items, self.max_item_value())?;
        let total_score = sum(&values);
        let severity = Gad7Severity::from_total(total_score);

        Ok(Gad7Score {
            total_score,
            severity,
            interpretation: severity.interpretation().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(values: [u8; 7]) -> Gad7Score {
        Gad7.score(&Gad7Answers::complete(values)).unwrap()
    }

    #[test]
    fn total_of_four_is_minimal() {
        let result = score([1, 1, 1, 1, 0, 0, 0]);
        assert_eq!(result.total_score, 4);
        assert_eq!(result.severity, Gad7Severity::Minimal);
    }

    #[test]
    fn total_of_five_is_mild() {
        let result = score([1, 1, 1, 1, 1, 0, 0]);
        assert_eq!(result.total_score, 5);
        assert_eq!(result.severity, Gad7Severity::Mild);
        assert_eq!(result.interpretation, Gad7Severity::Mild.interpretation());
    }

    #[test]
    fn all_nearly_every_day_is_severe() {
        let result = score([3; 7]);
        assert_eq!(result.total_score, 21);
        assert_eq!(result.severity, Gad7Severity::Severe);
    }

    #[test]
    fn band_edges() {
        let expected = [
            (0, Gad7Severity::Minimal),
            (9, Gad7Severity::Mild),
            (10, Gad7Severity::Moderate),
            (14, Gad7Severity::Moderate),
            (15, Gad7Severity::Severe),
            (21, Gad7Severity::Severe),
        ];
        for (total, severity) in expected {
            assert_eq!(Gad7Severity::from_total(total), severity, "total {total}");
        }
    }

    #[test]
    fn moderate_and_severe_are_significant() {
        assert!(!Gad7Severity::Mild.is_clinically_significant());
        assert!(Gad7Severity::Moderate.is_clinically_significant());
        assert!(Gad7Severity::Severe.is_clinically_significant());
    }

    #[test]
    fn item_value_five_is_malformed() {
        let mut answers = Gad7Answers::complete([0; 7]);
        answers.items[0] = Some(5);
        let err = Gad7.score(&answers).unwrap_err();
        assert_eq!(
            err,
            InstrumentError::MalformedAnswer {
                instrument: "GAD-7",
                item: "item 1".to_string(),
                value: 5,
                max: 3,
            }
        );
    }
}
