use addapt_core::models::AsrsAnswers;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::scoring::{complete_items, sum, Item, ResponseOption};
use crate::{Instrument, ScoredInstrument};

/// Responses at or above this value ("Often") count as high.
pub const HIGH_RESPONSE_THRESHOLD: u8 = 3;

/// Part A is positive when at least this many of the 6 items are high.
pub const POSITIVE_SCREEN_MIN: u32 = 4;

const POSITIVE_INTERPRETATION: &str = "Your responses on the ASRS screening tool suggest symptoms consistent with adult ADHD. Further comprehensive evaluation is strongly recommended.";

const NEGATIVE_INTERPRETATION: &str = "Your responses on the ASRS screening tool do not strongly suggest ADHD, though this does not rule out the condition. Clinical evaluation is recommended if you have concerns.";

static ITEMS: [Item; 6] = [
    Item::ordinal(
        "q1",
        "How often do you have trouble wrapping up the final details of a project, once the challenging parts have been done?",
    ),
    Item::ordinal(
        "q2",
        "How often do you have difficulty getting things in order when you have to do a task that requires organization?",
    ),
    Item::ordinal(
        "q3",
        "How often do you have problems remembering appointments or obligations?",
    ),
    Item::ordinal(
        "q4",
        "When you have a task that requires a lot of thought, how often do you avoid or delay getting started?",
    ),
    Item::ordinal(
        "q5",
        "How often do you fidget or squirm with your hands or feet when you have to sit down for a long time?",
    ),
    Item::ordinal(
        "q6",
        "How often do you feel overly active and compelled to do things, like you were driven by a motor?",
    ),
];

static RESPONSE_OPTIONS: [ResponseOption; 5] = [
    ResponseOption { value: 0, label: "Never" },
    ResponseOption { value: 1, label: "Rarely" },
    ResponseOption { value: 2, label: "Sometimes" },
    ResponseOption { value: 3, label: "Often" },
    ResponseOption { value: 4, label: "Very Often" },
];

/// ASRS v1.1 Part A: the six most predictive items of the WHO Adult ADHD
/// Self-Report Scale. Decides whether the full DIVA interview is offered.
pub struct Asrs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AsrsScore {
    /// Sum of the six responses, 0–24.
    pub score: u32,
    /// Items answered "Often" or "Very Often", 0–6.
    pub high_response_count: u32,
    pub likely_adhd: bool,
    pub should_continue_to_diva: bool,
    pub interpretation: String,
}

impl Instrument for Asrs {
    fn id(&self) -> &str {
        "asrs"
    }

    fn name(&self) -> &str {
        "ASRS v1.1"
    }

    fn items(&self) -> &[Item] {
        &ITEMS
    }

    fn response_options(&self) -> &[ResponseOption] {
        &RESPONSE_OPTIONS
    }
}

impl ScoredInstrument for Asrs {
    type Answers = AsrsAnswers;
    type Score = AsrsScore;

    fn score(&self, answers: &AsrsAnswers) -> Result<AsrsScore, InstrumentError> {
        let values = complete_items("ASRS", &answers.items, self.max_item_value())?;

        let high_response_count = values
            .iter()
            .filter(|&&v| v >= HIGH_RESPONSE_THRESHOLD)
            .count() as u32;
        let likely_adhd = (POSITIVE_SCREEN_MIN..=6).contains(&high_response_count);

        let interpretation = if high_response_count >= POSITIVE_SCREEN_MIN {
            POSITIVE_INTERPRETATION
        } else {
            NEGATIVE_INTERPRETATION
        };

        Ok(AsrsScore {
            score: sum(&values),
            high_response_count,
            likely_adhd,
            should_continue_to_diva: likely_adhd,
            interpretation: interpretation.to_string(),
        })
    }
}
