use std::fmt;

use addapt_core::models::{CriterionB, CriterionC, DivaAnswers, DivaSupplement, SymptomResponse};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::diva_bank::{
    self, ImpairmentDomain, RELATIONSHIP, SELF_CONFIDENCE, SOCIAL_CONTACTS, WORK_EDUCATION,
};
use crate::error::InstrumentError;
use crate::scoring::{Item, ResponseOption};
use crate::{Instrument, ScoredInstrument};

const INSTRUMENT: &str = "DIVA";

/// A present adult symptom counts only with at least this many examples
/// (selected checklist entries plus a non-empty "other").
pub const MIN_EXAMPLES: usize = 2;

/// DSM-5 symptom count per category, required in both timeframes.
pub const DSM_SYMPTOM_THRESHOLD: u32 = 5;

static RESPONSE_OPTIONS: [ResponseOption; 2] = [
    ResponseOption { value: 0, label: "No" },
    ResponseOption { value: 1, label: "Yes" },
];

/// DIVA 5.0: Diagnostic Interview for ADHD in Adults, checklist variant.
/// 18 DSM-5 symptom items, each with an adult and a childhood timeframe.
pub struct Diva;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum PresentationType {
    Inattentive,
    HyperactiveImpulsive,
    Combined,
    None,
}

impl PresentationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationType::Inattentive => "inattentive",
            PresentationType::HyperactiveImpulsive => "hyperactive-impulsive",
            PresentationType::Combined => "combined",
            PresentationType::None => "none",
        }
    }
}

impl fmt::Display for PresentationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Criterion C impairment counts per domain. Descriptive only; they do
/// not feed the DSM decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriterionCTally {
    pub work_education: u32,
    pub relationship: u32,
    pub social_contacts: u32,
    pub self_confidence: u32,
}

impl CriterionCTally {
    pub fn total(&self) -> u32 {
        self.work_education + self.relationship + self.social_contacts + self.self_confidence
    }

    /// Domains with at least one reported problem.
    pub fn domains_affected(&self) -> usize {
        [
            self.work_education,
            self.relationship,
            self.social_contacts,
            self.self_confidence,
        ]
        .iter()
        .filter(|&&n| n > 0)
        .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DivaScore {
    pub attention_adult_count: u32,
    pub attention_child_count: u32,
    pub hyperactivity_impulsivity_adult_count: u32,
    pub hyperactivity_impulsivity_child_count: u32,
    pub meets_dsm_criteria: bool,
    pub predominant_type: PresentationType,
    pub interpretation: String,
    pub supplement: DivaSupplement,
    pub criterion_b: CriterionB,
    pub criterion_c: CriterionCTally,
}

/// Adult and childhood counts for one symptom group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct GroupCounts {
    adult: u32,
    child: u32,
}

impl GroupCounts {
    fn meets_dsm(&self) -> bool {
        self.adult >= DSM_SYMPTOM_THRESHOLD && self.child >= DSM_SYMPTOM_THRESHOLD
    }
}

/// Adult positivity: the symptom must be explicitly present and backed by
/// at least [`MIN_EXAMPLES`] examples.
pub fn counts_as_adult_symptom(response: &SymptomResponse) -> bool {
    response.symptom_present && response.example_count() >= MIN_EXAMPLES
}

/// Childhood positivity is the plain yes/no answer, with no example gate.
pub fn counts_as_childhood_symptom(response: &SymptomResponse) -> bool {
    response.childhood_present
}

fn count_group(
    group: &'static str,
    bank: &[Item],
    responses: &[Option<SymptomResponse>; 9],
) -> Result<GroupCounts, InstrumentError> {
    let mut counts = GroupCounts::default();
    for (idx, (item, response)) in bank.iter().zip(responses).enumerate() {
        let label = || format!("{group} item {}", idx + 1);
        let response = response.as_ref().ok_or_else(|| InstrumentError::IncompleteInput {
            instrument: INSTRUMENT,
            item: label(),
        })?;

        if let Some(unknown) = response.examples.iter().find(|id| item.example(id).is_none()) {
            return Err(InstrumentError::UnknownExample {
                instrument: INSTRUMENT,
                item: label(),
                example: unknown.clone(),
            });
        }

        counts.adult += u32::from(counts_as_adult_symptom(response));
        counts.child += u32::from(counts_as_childhood_symptom(response));
    }
    Ok(counts)
}

fn tally_criterion_c(criterion_c: &CriterionC) -> Result<CriterionCTally, InstrumentError> {
    let areas: [(&ImpairmentDomain, &addapt_core::models::ImpairmentArea); 4] = [
        (&WORK_EDUCATION, &criterion_c.work_education),
        (&RELATIONSHIP, &criterion_c.relationship),
        (&SOCIAL_CONTACTS, &criterion_c.social_contacts),
        (&SELF_CONFIDENCE, &criterion_c.self_confidence),
    ];

    for (domain, area) in areas {
        if let Some(unknown) = area.examples.iter().find(|id| domain.example(id).is_none()) {
            return Err(InstrumentError::UnknownExample {
                instrument: INSTRUMENT,
                item: format!("criterion C {}", domain.title),
                example: unknown.clone(),
            });
        }
    }

    Ok(CriterionCTally {
        work_education: criterion_c.work_education.tally(),
        relationship: criterion_c.relationship.tally(),
        social_contacts: criterion_c.social_contacts.tally(),
        self_confidence: criterion_c.self_confidence.tally(),
    })
}

fn classify(attention: GroupCounts, hyperactivity: GroupCounts) -> (PresentationType, &'static str) {
    match (attention.meets_dsm(), hyperactivity.meets_dsm()) {
        (true, true) => (
            PresentationType::Combined,
            "The DIVA assessment indicates symptoms consistent with ADHD, Combined Presentation. Both inattentive and hyperactive-impulsive symptoms are present from childhood to adulthood, meeting DSM-5 diagnostic criteria.",
        ),
        (true, false) => (
            PresentationType::Inattentive,
            "The DIVA assessment indicates symptoms consistent with ADHD, Predominantly Inattentive Presentation. Significant inattentive symptoms are present from childhood to adulthood, meeting DSM-5 diagnostic criteria.",
        ),
        (false, true) => (
            PresentationType::HyperactiveImpulsive,
            "The DIVA assessment indicates symptoms consistent with ADHD, Predominantly Hyperactive-Impulsive Presentation. Significant hyperactive-impulsive symptoms are present from childhood to adulthood, meeting DSM-5 diagnostic criteria.",
        ),
        (false, false) => {
            let interpretation = if attention.adult >= DSM_SYMPTOM_THRESHOLD
                || hyperactivity.adult >= DSM_SYMPTOM_THRESHOLD
            {
                "Current symptoms suggest possible ADHD, but childhood symptom criteria are not fully met according to this assessment. This could indicate late-onset symptoms or possible recall difficulties. Clinical evaluation is recommended to explore other explanations and assess functional impairment."
            } else if attention.child >= DSM_SYMPTOM_THRESHOLD
                || hyperactivity.child >= DSM_SYMPTOM_THRESHOLD
            {
                "Childhood symptoms suggest possible ADHD, but current symptom criteria are not fully met. This may indicate symptom reduction with age or compensatory strategies. Clinical evaluation can assess if residual symptoms are present and causing impairment."
            } else {
                "The DIVA assessment does not indicate sufficient symptoms to meet DSM-5 criteria for ADHD. However, sub-threshold symptoms may still cause impairment and warrant clinical discussion."
            };
            (PresentationType::None, interpretation)
        }
    }
}

impl Instrument for Diva {
    fn id(&self) -> &str {
        "diva"
    }

    fn name(&self) -> &str {
        "DIVA 5.0"
    }

    fn items(&self) -> &[Item] {
        &diva_bank::SYMPTOM_ITEMS
    }

    fn response_options(&self) -> &[ResponseOption] {
        &RESPONSE_OPTIONS
    }
}

impl ScoredInstrument for Diva {
    type Answers = DivaAnswers;
    type Score = DivaScore;

    fn score(&self, answers: &DivaAnswers) -> Result<DivaScore, InstrumentError> {
        let attention = count_group(
            "attention",
            diva_bank::attention_items(),
            &answers.attention,
        )?;
        let hyperactivity = count_group(
            "hyperactivity-impulsivity",
            diva_bank::hyperactivity_impulsivity_items(),
            &answers.hyperactivity_impulsivity,
        )?;

        let supplement = answers.supplement.ok_or_else(|| InstrumentError::IncompleteInput {
            instrument: INSTRUMENT,
            item: "supplement".to_string(),
        })?;
        let criterion_b = answers.criterion_b.ok_or_else(|| InstrumentError::IncompleteInput {
            instrument: INSTRUMENT,
            item: "criterion B".to_string(),
        })?;
        let criterion_c = tally_criterion_c(&answers.criterion_c)?;

        let (predominant_type, interpretation) = classify(attention, hyperactivity);

        Ok(DivaScore {
            attention_adult_count: attention.adult,
            attention_child_count: attention.child,
            hyperactivity_impulsivity_adult_count: hyperactivity.adult,
            hyperactivity_impulsivity_child_count: hyperactivity.child,
            meets_dsm_criteria: predominant_type != PresentationType::None,
            predominant_type,
            interpretation: interpretation.to_string(),
            supplement,
            criterion_b,
            criterion_c,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(present: bool, examples: &[&str], childhood: bool) -> SymptomResponse {
        SymptomResponse {
            symptom_present: present,
            examples: examples.iter().map(|e| e.to_string()).collect(),
            other_text: None,
            childhood_present: childhood,
        }
    }

    #[test]
    fn one_example_is_not_enough_for_adult_count() {
        let r = response(true, &["careless_mistakes"], true);
        assert!(!counts_as_adult_symptom(&r));
        assert!(counts_as_childhood_symptom(&r));
    }

    #[test]
    fn other_text_counts_as_an_example() {
        let mut r = response(true, &["careless_mistakes"], false);
        r.other_text = Some("Misfiled invoices".to_string());
        assert!(counts_as_adult_symptom(&r));
    }

    #[test]
    fn blank_other_text_does_not_count() {
        let mut r = response(true, &["careless_mistakes"], false);
        r.other_text = Some("   ".to_string());
        assert!(!counts_as_adult_symptom(&r));
    }

    #[test]
    fn examples_without_symptom_present_do_not_count() {
        let r = response(false, &["careless_mistakes", "works_slowly"], false);
        assert!(!counts_as_adult_symptom(&r));
    }

    #[test]
    fn sub_threshold_variants_are_distinct() {
        let adult_only = GroupCounts { adult: 5, child: 2 };
        let child_only = GroupCounts { adult: 1, child: 6 };
        let neither = GroupCounts { adult: 4, child: 4 };

        let (t1, a) = classify(adult_only, neither);
        let (t2, b) = classify(neither, child_only);
        let (t3, c) = classify(neither, neither);

        assert_eq!(t1, PresentationType::None);
        assert_eq!(t2, PresentationType::None);
        assert_eq!(t3, PresentationType::None);
        assert!(a.starts_with("Current symptoms suggest possible ADHD"));
        assert!(b.starts_with("Childhood symptoms suggest possible ADHD"));
        assert!(c.starts_with("The DIVA assessment does not indicate"));
    }

    #[test]
    fn adult_branch_wins_when_both_timeframes_partially_met() {
        let attention = GroupCounts { adult: 5, child: 0 };
        let hyperactivity = GroupCounts { adult: 0, child: 5 };
        let (_, text) = classify(attention, hyperactivity);
        assert!(text.starts_with("Current symptoms"));
    }

    #[test]
    fn single_category_presentations() {
        let met = GroupCounts { adult: 9, child: 5 };
        let unmet = GroupCounts { adult: 9, child: 4 };
        assert_eq!(classify(met, unmet).0, PresentationType::Inattentive);
        assert_eq!(classify(unmet, met).0, PresentationType::HyperactiveImpulsive);
        assert_eq!(classify(met, met).0, PresentationType::Combined);
    }

    #[test]
    fn criterion_c_tally_counts_other_text() {
        let mut criterion_c = CriterionC::default();
        criterion_c.work_education.examples.insert("many_short_jobs".to_string());
        criterion_c.work_education.other_text = Some("Dismissed twice".to_string());
        criterion_c.self_confidence.examples.insert("perfectionism".to_string());

        let tally = tally_criterion_c(&criterion_c).unwrap();
        assert_eq!(tally.work_education, 2);
        assert_eq!(tally.self_confidence, 1);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.domains_affected(), 2);
    }

    #[test]
    fn criterion_c_rejects_example_from_another_domain() {
        let mut criterion_c = CriterionC::default();
        criterion_c.relationship.examples.insert("perfectionism".to_string());
        let err = tally_criterion_c(&criterion_c).unwrap_err();
        assert!(matches!(err, InstrumentError::UnknownExample { .. }));
    }
}
