use addapt_core::error::CoreError;
use addapt_core::models::{Assessment, UseLevel};

const NINE_NULLS: &str = "[null, null, null, null, null, null, null, null, null]";

fn submission(supplement: &str) -> String {
    format!(
        r#"{{
            "personal_info": {{
                "full_name": "Alex Morgan",
                "date_of_birth": "1988-11-02",
                "gender": "non-binary",
                "email": "alex@example.com",
                "phone": "07700 900456",
                "address": "3 Canal Street",
                "gp_name": "Dr Hannah Reid",
                "gp_practice": "Canal Street Surgery",
                "gp_address": "1 Canal Street"
            }},
            "asrs": {{ "items": [2, 3, null, 4, 1, 0] }},
            "gad7": {{ "items": [0, 1, 2, 3, 0, 1, 2] }},
            "phq9": {{ "items": [0, 0, 0, 0, 0, 0, 0, 0, 0] }},
            "diva": {{
                "attention": [
                    {{ "symptom_present": true, "examples": ["a1-1", "a1-2"], "childhood_present": true }},
                    null, null, null, null, null, null, null, null
                ],
                "hyperactivity_impulsivity": {NINE_NULLS}
                {supplement}
            }},
            "mental_health_history": {{
                "substance_use": {{ "alcohol": "occasional", "tobacco": "none", "cannabis": "none" }}
            }},
            "completed_at": "2026-10-12T09:30:00Z"
        }}"#
    )
}

#[test]
fn unanswered_items_stay_none() {
    let assessment = Assessment::from_json(&submission("")).unwrap();

    assert_eq!(assessment.asrs.items[2], None);
    assert_eq!(assessment.asrs.items[3], Some(4));
    assert!(assessment.diva.attention[0].is_some());
    assert!(assessment.diva.attention[1].is_none());
    assert!(assessment.diva.supplement.is_none());
    assert!(assessment.diva.criterion_b.is_none());
    assert_eq!(assessment.personal_info.nhs_number, None);
}

#[test]
fn optional_sections_default() {
    let assessment = Assessment::from_json(&submission(
        r#", "supplement": { "adult_more_than_others": true, "childhood_more_than_others": false }"#,
    ))
    .unwrap();

    let supplement = assessment.diva.supplement.unwrap();
    assert!(supplement.adult_more_than_others);
    assert_eq!(
        assessment.mental_health_history.substance_use.alcohol,
        UseLevel::Occasional
    );
    assert!(assessment.mental_health_history.previous_diagnoses.is_empty());
    assert!(!assessment.family_history.adhd_in_family);
    assert_eq!(assessment.diva.criterion_c.work_education.tally(), 0);
}

#[test]
fn round_trips_through_json() {
    let assessment = Assessment::from_json(&submission("")).unwrap();
    let json = assessment.to_json().unwrap();
    assert_eq!(Assessment::from_json(&json).unwrap(), assessment);
}

#[test]
fn wrong_item_count_is_rejected() {
    let json = submission("").replace(
        r#""asrs": { "items": [2, 3, null, 4, 1, 0] }"#,
        r#""asrs": { "items": [2, 3, 4] }"#,
    );
    assert!(matches!(
        Assessment::from_json(&json),
        Err(CoreError::Serialization(_))
    ));
}
