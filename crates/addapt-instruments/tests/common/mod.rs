#![allow(dead_code)]

use addapt_core::models::{
    AsrsAnswers, Assessment, CriterionB, CriterionC, DivaAnswers, DivaSupplement, FamilyHistory,
    Gad7Answers, MentalHealthHistory, PersonalInformation, Phq9Answers, SymptomResponse,
};
use addapt_instruments::instruments::diva_bank;
use addapt_instruments::scoring::Item;

/// A present symptom backed by the item's first `examples` checklist entries.
pub fn symptom(item: &Item, examples: usize, childhood: bool) -> SymptomResponse {
    SymptomResponse {
        symptom_present: true,
        examples: item
            .examples
            .iter()
            .take(examples)
            .map(|e| e.id.to_string())
            .collect(),
        other_text: None,
        childhood_present: childhood,
    }
}

pub fn absent() -> SymptomResponse {
    SymptomResponse::default()
}

fn group(bank: &[Item], adult: usize, child: usize) -> [Option<SymptomResponse>; 9] {
    std::array::from_fn(|idx| {
        let childhood = idx < child;
        if idx < adult {
            Some(symptom(&bank[idx], 2, childhood))
        } else {
            Some(SymptomResponse {
                childhood_present: childhood,
                ..absent()
            })
        }
    })
}

/// DIVA answers where the first `n` items of each group are positive in
/// the given timeframes.
pub fn diva(
    attention_adult: usize,
    attention_child: usize,
    hyperactivity_adult: usize,
    hyperactivity_child: usize,
) -> DivaAnswers {
    DivaAnswers {
        attention: group(diva_bank::attention_items(), attention_adult, attention_child),
        hyperactivity_impulsivity: group(
            diva_bank::hyperactivity_impulsivity_items(),
            hyperactivity_adult,
            hyperactivity_child,
        ),
        supplement: Some(DivaSupplement {
            adult_more_than_others: true,
            childhood_more_than_others: false,
        }),
        criterion_b: Some(CriterionB {
            always_had_symptoms: false,
            age_of_onset: Some(7),
        }),
        criterion_c: CriterionC::default(),
    }
}

pub fn personal_info() -> PersonalInformation {
    PersonalInformation {
        full_name: "Sam Taylor Jones".to_string(),
        date_of_birth: jiff::civil::date(1991, 3, 14),
        gender: "prefer-not-to-say".to_string(),
        email: "sam@example.com".to_string(),
        phone: "07700 900123".to_string(),
        address: "12 Mill Lane, Leeds".to_string(),
        gp_name: "Priya Patel".to_string(),
        gp_practice: "Northside Medical Centre".to_string(),
        gp_address: "4 Station Road, Leeds".to_string(),
        nhs_number: Some("943 476 5919".to_string()),
    }
}

pub fn assessment() -> Assessment {
    Assessment {
        personal_info: personal_info(),
        asrs: AsrsAnswers::complete([3, 4, 3, 3, 1, 2]),
        gad7: Gad7Answers::complete([1, 1, 1, 1, 1, 1, 0]),
        phq9: Phq9Answers::complete([1, 1, 1, 0, 0, 0, 0, 0, 0]),
        diva: diva(6, 5, 3, 2),
        mental_health_history: MentalHealthHistory::default(),
        family_history: FamilyHistory::default(),
        completed_at: "2026-10-12T09:30:00Z".parse().unwrap(),
    }
}
