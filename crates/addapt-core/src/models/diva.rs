//! DIVA 5.0 checklist answers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The answer to a single DIVA symptom item.
///
/// `examples` holds checklist ids from the item's example list in the
/// question bank. The adult timeframe counts only when enough examples
/// back it up; the childhood timeframe is a plain yes/no.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomResponse {
    pub symptom_present: bool,
    #[serde(default)]
    pub examples: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_text: Option<String>,
    pub childhood_present: bool,
}

impl SymptomResponse {
    /// Whether free-text "other" carries anything beyond whitespace.
    pub fn has_other_text(&self) -> bool {
        self.other_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    /// Selected examples plus one for a non-empty "other" entry.
    pub fn example_count(&self) -> usize {
        self.examples.len() + usize::from(self.has_other_text())
    }
}

/// Self-comparison against peers, asked once after the symptom items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DivaSupplement {
    pub adult_more_than_others: bool,
    pub childhood_more_than_others: bool,
}

/// Criterion B: lifelong symptoms, or the age they started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriterionB {
    pub always_had_symptoms: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_of_onset: Option<u32>,
}

/// One impairment domain: selected checklist ids plus optional free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImpairmentArea {
    #[serde(default)]
    pub examples: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_text: Option<String>,
}

impl ImpairmentArea {
    pub fn has_other_text(&self) -> bool {
        self.other_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    pub fn tally(&self) -> u32 {
        self.examples.len() as u32 + u32::from(self.has_other_text())
    }
}

/// Criterion C: the four areas of life where symptoms cause problems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriterionC {
    #[serde(default)]
    pub work_education: ImpairmentArea,
    #[serde(default)]
    pub relationship: ImpairmentArea,
    #[serde(default)]
    pub social_contacts: ImpairmentArea,
    #[serde(default)]
    pub self_confidence: ImpairmentArea,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DivaAnswers {
    /// Criterion A1, inattention items 1–9.
    pub attention: [Option<SymptomResponse>; 9],
    /// Criterion A2, hyperactivity-impulsivity items 1–9.
    pub hyperactivity_impulsivity: [Option<SymptomResponse>; 9],
    pub supplement: Option<DivaSupplement>,
    pub criterion_b: Option<CriterionB>,
    #[serde(default)]
    pub criterion_c: CriterionC,
}
