use std::fmt;

use addapt_core::models::Phq9Answers;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::gad7::TWO_WEEK_FREQUENCY;
use crate::error::InstrumentError;
use crate::scoring::{complete_items, sum, Item, ResponseOption};
use crate::{Instrument, ScoredInstrument};

/// Appended to the interpretation whenever item 9 is above zero.
pub const URGENT_NOTICE: &str = " **IMPORTANT: Thoughts of self-harm were reported - immediate clinical assessment is required.**";

pub const INTRO: &str = "Over the last 2 weeks, how often have you been bothered by any of the following problems?";

static ITEMS: [Item; 9] = [
    Item::ordinal("q1", "Little interest or pleasure in doing things"),
    Item::ordinal("q2", "Feeling down, depressed, or hopeless"),
    Item::ordinal("q3", "Trouble falling or staying asleep, or sleeping too much"),
    Item::ordinal("q4", "Feeling tired or having little energy"),
    Item::ordinal("q5", "Poor appetite or overeating"),
    Item::ordinal(
        "q6",
        "Feeling bad about yourself - or that you are a failure or have let yourself or your family down",
    ),
    Item::ordinal(
        "q7",
        "Trouble concentrating on things, such as reading the newspaper or watching television",
    ),
    Item::ordinal(
        "q8",
        "Moving or speaking so slowly that other people could have noticed. Or the opposite - being so fidgety or restless that you have been moving around a lot more than usual",
    ),
    Item::ordinal(
        "q9",
        "Thoughts that you would be better off dead, or of hurting yourself in some way",
    ),
];

/// PHQ-9: Patient Health Questionnaire depression module. Total 0–27.
pub struct Phq9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Phq9Severity {
    None,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl Phq9Severity {
    pub fn from_total(total: u32) -> Self {
        match total {
            0..=4 => Phq9Severity::None,
            5..=9 => Phq9Severity::Mild,
            10..=14 => Phq9Severity::Moderate,
            15..=19 => Phq9Severity::ModeratelySevere,
            _ => Phq9Severity::Severe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phq9Severity::None => "none",
            Phq9Severity::Mild => "mild",
            Phq9Severity::Moderate => "moderate",
            Phq9Severity::ModeratelySevere => "moderately-severe",
            Phq9Severity::Severe => "severe",
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            Phq9Severity::None => {
                "Minimal or no depression detected. Your mood appears to be within normal range."
            }
            Phq9Severity::Mild => {
                "Mild depression detected. Some depressive symptoms are present but may not significantly impact daily functioning."
            }
            Phq9Severity::Moderate => {
                "Moderate depression detected. These symptoms are likely affecting your daily life and warrant clinical attention."
            }
            Phq9Severity::ModeratelySevere => {
                "Moderately severe depression detected. These symptoms are significantly impacting your functioning and require professional treatment."
            }
            Phq9Severity::Severe => {
                "Severe depression detected. Immediate professional intervention is strongly recommended."
            }
        }
    }

    /// Moderate and above are reported as a co-occurring condition.
    pub fn is_clinically_significant(&self) -> bool {
        *self >= Phq9Severity::Moderate
    }
}

impl fmt::Display for Phq9Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Phq9Score {
    pub total_score: u32,
    pub severity: Phq9Severity,
    pub interpretation: String,
    /// Set from item 9 alone, whatever the total.
    pub requires_urgent_attention: bool,
}

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn items(&self) -> &[Item] {
        &ITEMS
    }

    fn response_options(&self) -> &[ResponseOption] {
        &TWO_WEEK_FREQUENCY
    }
}

impl ScoredInstrument for Phq9 {
    type Answers = Phq9Answers;
    type Score = Phq9Score;

    fn score(&self, answers: &Phq9Answers) -> Result<Phq9Score, InstrumentError> {
        let values = complete_items("PHQ-9", &answers.items, self.max_item_value())?;
        let total_score = sum(&values);
        let severity = Phq9Severity::from_total(total_score);
        let requires_urgent_attention = values[8] > 0;

        let mut interpretation = severity.interpretation().to_string();
        if requires_urgent_attention {
            interpretation.push_str(URGENT_NOTICE);
        }

        Ok(Phq9Score {
            total_score,
            severity,
            interpretation,
            requires_urgent_attention,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(values: [u8; 9]) -> Phq9Score {
        Phq9.score(&Phq9Answers::complete(values)).unwrap()
    }

    #[test]
    fn self_harm_item_alone_raises_urgent_flag() {
        let result = score([0, 0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(result.total_score, 1);
        assert_eq!(result.severity, Phq9Severity::None);
        assert!(result.requires_urgent_attention);
        assert!(result.interpretation.ends_with(URGENT_NOTICE));
    }

    #[test]
    fn urgent_flag_for_every_positive_item9_value() {
        for item9 in 1..=3 {
            for base in 0..=3 {
                let mut values = [base; 9];
                values[8] = item9;
                assert!(
                    score(values).requires_urgent_attention,
                    "item9={item9} base={base}"
                );
            }
        }
    }

    #[test]
    fn no_urgent_flag_when_item9_is_zero() {
        let mut values = [3; 9];
        values[8] = 0;
        let result = score(values);
        assert_eq!(result.total_score, 24);
        assert_eq!(result.severity, Phq9Severity::Severe);
        assert!(!result.requires_urgent_attention);
        assert!(!result.interpretation.contains("IMPORTANT"));
    }

    #[test]
    fn band_edges() {
        let expected = [
            (4, Phq9Severity::None),
            (5, Phq9Severity::Mild),
            (9, Phq9Severity::Mild),
            (10, Phq9Severity::Moderate),
            (14, Phq9Severity::Moderate),
            (15, Phq9Severity::ModeratelySevere),
            (19, Phq9Severity::ModeratelySevere),
            (20, Phq9Severity::Severe),
            (27, Phq9Severity::Severe),
        ];
        for (total, severity) in expected {
            assert_eq!(Phq9Severity::from_total(total), severity, "total {total}");
        }
    }

    #[test]
    fn missing_item9_is_never_read_as_zero() {
        let mut answers = Phq9Answers::complete([0; 9]);
        answers.items[8] = None;
        let err = Phq9.score(&answers).unwrap_err();
        assert_eq!(
            err,
            InstrumentError::IncompleteInput {
                instrument: "PHQ-9",
                item: "item 9".to_string(),
            }
        );
    }

    #[test]
    fn severity_serializes_kebab_case() {
        let json = serde_json::to_string(&Phq9Severity::ModeratelySevere).unwrap();
        assert_eq!(json, "\"moderately-severe\"");
    }
}
