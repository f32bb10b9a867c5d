#![allow(dead_code)]

use addapt_core::models::{
    AsrsAnswers, Assessment, CriterionB, CriterionC, DivaAnswers, DivaSupplement, FamilyHistory,
    Gad7Answers, ImpairmentArea, MentalHealthHistory, PersonalInformation, Phq9Answers,
    SymptomResponse,
};
use addapt_export::render::ReportStamp;
use addapt_instruments::instruments::diva_bank;
use addapt_instruments::scoring::Item;

fn group(bank: &[Item], positive: usize) -> [Option<SymptomResponse>; 9] {
    std::array::from_fn(|idx| {
        Some(SymptomResponse {
            symptom_present: idx < positive,
            examples: bank[idx]
                .examples
                .iter()
                .take(if idx < positive { 2 } else { 0 })
                .map(|e| e.id.to_string())
                .collect(),
            other_text: None,
            childhood_present: idx < positive,
        })
    })
}

pub fn assessment() -> Assessment {
    let work = diva_bank::WORK_EDUCATION.examples;
    Assessment {
        personal_info: PersonalInformation {
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
        },
        asrs: AsrsAnswers::complete([3, 4, 3, 3, 1, 2]),
        gad7: Gad7Answers::complete([1, 1, 1, 1, 1, 1, 0]),
        phq9: Phq9Answers::complete([1, 1, 1, 0, 0, 0, 0, 0, 0]),
        diva: DivaAnswers {
            attention: group(diva_bank::attention_items(), 6),
            hyperactivity_impulsivity: group(diva_bank::hyperactivity_impulsivity_items(), 5),
            supplement: Some(DivaSupplement {
                adult_more_than_others: true,
                childhood_more_than_others: true,
            }),
            criterion_b: Some(CriterionB {
                always_had_symptoms: true,
                age_of_onset: None,
            }),
            criterion_c: CriterionC {
                work_education: ImpairmentArea {
                    examples: work.iter().take(2).map(|e| e.id.to_string()).collect(),
                    other_text: None,
                },
                ..Default::default()
            },
        },
        mental_health_history: MentalHealthHistory::default(),
        family_history: FamilyHistory::default(),
        completed_at: "2026-10-12T09:30:00Z".parse().unwrap(),
    }
}

pub fn stamp() -> ReportStamp {
    ReportStamp {
        generated_at: jiff::civil::date(2026, 10, 19).at(14, 5, 0, 0),
        report_id: "ADDAPT-20261012-STJ-A1B2C3".to_string(),
    }
}
