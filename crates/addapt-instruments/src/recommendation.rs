//! Cross-instrument recommendation narrative.

use crate::instruments::asrs::AsrsScore;
use crate::instruments::diva::DivaScore;
use crate::instruments::gad7::Gad7Score;
use crate::instruments::phq9::Phq9Score;

pub const LIKELY_ADHD: &str = "Based on the assessment results, there is strong evidence suggesting Adult ADHD. A comprehensive psychiatric evaluation for ADHD diagnosis and treatment planning is strongly recommended.";

pub const POSSIBLE_ADHD: &str = "While the assessment does not definitively indicate ADHD, the presenting symptoms warrant further clinical evaluation to rule out ADHD or explore alternative diagnoses.";

pub const URGENT: &str = "**URGENT: Suicidal ideation was reported. Immediate psychiatric assessment is required. Please contact crisis services if the patient is at immediate risk.**";

pub const NEXT_STEPS: &str = "Recommended next steps: (1) Comprehensive psychiatric assessment for ADHD and comorbid conditions, (2) Consider neuropsychological testing if diagnostic uncertainty remains, (3) Discuss treatment options including pharmacotherapy and psychological interventions.";

/// Recommendation paragraphs in letter order: ADHD likelihood, any
/// co-occurring conditions, the urgent notice when PHQ-9 item 9 was
/// positive, then next steps. Paragraphs that do not apply are left out.
pub fn recommendation_paragraphs(
    asrs: &AsrsScore,
    gad7: &Gad7Score,
    phq9: &Phq9Score,
    diva: &DivaScore,
) -> Vec<String> {
    let mut paragraphs = Vec::with_capacity(4);

    if diva.meets_dsm_criteria || asrs.likely_adhd {
        paragraphs.push(LIKELY_ADHD.to_string());
    } else {
        paragraphs.push(POSSIBLE_ADHD.to_string());
    }

    let mut comorbid = Vec::new();
    if gad7.severity.is_clinically_significant() {
        comorbid.push("significant anxiety symptoms");
    }
    if phq9.severity.is_clinically_significant() {
        comorbid.push("significant depressive symptoms");
    }
    if !comorbid.is_empty() {
        paragraphs.push(format!(
            "Co-occurring conditions detected: {}. These conditions commonly co-exist with ADHD and require integrated treatment planning.",
            comorbid.join(" and ")
        ));
    }

    if phq9.requires_urgent_attention {
        paragraphs.push(URGENT.to_string());
    }

    paragraphs.push(NEXT_STEPS.to_string());
    paragraphs
}

/// The paragraphs joined by blank lines.
pub fn overall_recommendation(
    asrs: &AsrsScore,
    gad7: &Gad7Score,
    phq9: &Phq9Score,
    diva: &DivaScore,
) -> String {
    recommendation_paragraphs(asrs, gad7, phq9, diva).join("\n\n")
}
