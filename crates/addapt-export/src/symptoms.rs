//! Plain-text expansion of DIVA answers for the referral letter.

use addapt_core::models::{CriterionB, CriterionC, ImpairmentArea, SymptomResponse};
use addapt_instruments::instruments::diva::MIN_EXAMPLES;
use addapt_instruments::instruments::diva_bank::{
    ImpairmentDomain, RELATIONSHIP, SELF_CONFIDENCE, SOCIAL_CONTACTS, WORK_EDUCATION,
};
use addapt_instruments::scoring::Item;

const EXAMPLES_NOTE: &str = "(Note: 2+ examples recommended for diagnostic criteria)";

/// List every item the patient marked present, with the examples they gave.
/// Items marked absent are left out.
pub fn format_symptom_details(
    section_name: &str,
    bank: &[Item],
    responses: &[Option<SymptomResponse>],
) -> String {
    let mut output = format!("\n{section_name}:\n");

    for (idx, (item, response)) in bank.iter().zip(responses).enumerate() {
        let Some(response) = response else {
            continue;
        };
        if !response.symptom_present {
            continue;
        }

        output.push_str(&format!("\n{}. {}\n", idx + 1, item.text));
        output.push_str("   Response: YES\n");

        let total = response.example_count();
        if total == 0 {
            output.push_str(&format!("   Examples provided: None {EXAMPLES_NOTE}\n"));
        } else if total < MIN_EXAMPLES {
            output.push_str(&format!("   Examples provided: {total} {EXAMPLES_NOTE}\n"));
        } else {
            output.push_str(&format!("   Examples provided: {total}\n"));
        }

        for example in response.examples.iter().filter_map(|id| item.example(id)) {
            output.push_str(&format!("     - {}\n", example.text));
        }
        if let Some(other) = response.other_text.as_deref().filter(|_| response.has_other_text()) {
            output.push_str(&format!("     - Other: {}\n", other.trim()));
        }

        let childhood = if response.childhood_present { "YES" } else { "NO" };
        output.push_str(&format!("   Also present in childhood: {childhood}\n"));
    }

    output
}

/// "YES", or "NO" with the reported age of onset when one was given.
pub fn format_onset(criterion_b: &CriterionB) -> String {
    match (criterion_b.always_had_symptoms, criterion_b.age_of_onset) {
        (true, _) => "YES".to_string(),
        (false, Some(age)) => format!("NO (onset from age {age})"),
        (false, None) => "NO (age of onset not given)".to_string(),
    }
}

/// One block per impairment domain that has anything reported.
pub fn format_impairment_details(criterion_c: &CriterionC) -> String {
    let areas: [(&ImpairmentDomain, &ImpairmentArea); 4] = [
        (&WORK_EDUCATION, &criterion_c.work_education),
        (&RELATIONSHIP, &criterion_c.relationship),
        (&SOCIAL_CONTACTS, &criterion_c.social_contacts),
        (&SELF_CONFIDENCE, &criterion_c.self_confidence),
    ];

    let mut output = String::new();
    for (domain, area) in areas {
        let tally = area.tally();
        if tally == 0 {
            continue;
        }
        output.push_str(&format!("{} ({tally} reported):\n", domain.title));
        for example in area.examples.iter().filter_map(|id| domain.example(id)) {
            output.push_str(&format!("     - {}\n", example.text));
        }
        if let Some(other) = area.other_text.as_deref().filter(|_| area.has_other_text()) {
            output.push_str(&format!("     - Other: {}\n", other.trim()));
        }
    }

    if output.is_empty() {
        output.push_str("No impairment areas reported\n");
    }
    output
}
