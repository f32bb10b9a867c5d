use addapt_core::models::{Assessment, FamilyHistory, MentalHealthHistory, PersonalInformation};
use addapt_instruments::instruments::diva_bank::{attention_items, hyperactivity_impulsivity_items};
use addapt_instruments::results::AssessmentResults;
use jiff::civil::DateTime;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::report_id::generate_report_id;
use crate::settings::ReportSettings;
use crate::symptoms::{format_impairment_details, format_onset, format_symptom_details};

const GP_REPORT_NAME: &str = "gp_report.txt";
const GP_REPORT_TEMPLATE: &str = include_str!("../templates/gp_report.txt.tera");

const NONE_REPORTED: &str = "None reported";
const NOT_SPECIFIED: &str = "Not specified";

/// The parts of a report that change on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStamp {
    pub generated_at: DateTime,
    pub report_id: String,
}

impl ReportStamp {
    /// Stamp a report for the current local time with a fresh ID.
    pub fn now(settings: &ReportSettings, assessment: &Assessment) -> Self {
        Self {
            generated_at: jiff::Zoned::now().datetime(),
            report_id: generate_report_id(&settings.report_id_prefix, assessment),
        }
    }
}

/// Render a Tera template with any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// Templates whose name doesn't end in `.html` are not autoescaped.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Build the plain-text GP referral letter.
///
/// Output depends only on the inputs: the same assessment, results,
/// settings and stamp always give the same text.
pub fn render_gp_report(
    assessment: &Assessment,
    results: &AssessmentResults,
    settings: &ReportSettings,
    stamp: &ReportStamp,
) -> Result<String, ExportError> {
    assessment.personal_info.validate()?;

    let view = ReportView::new(assessment, results, settings, stamp);
    render_template(GP_REPORT_NAME, GP_REPORT_TEMPLATE, &view)
}

/// [`render_gp_report`] stamped with the current time and a fresh ID.
pub fn generate_gp_report(
    assessment: &Assessment,
    results: &AssessmentResults,
    settings: &ReportSettings,
) -> Result<String, ExportError> {
    let stamp = ReportStamp::now(settings, assessment);
    render_gp_report(assessment, results, settings, &stamp)
}

#[derive(Serialize)]
struct ReportView<'a> {
    platform_name: &'a str,
    report_date: String,
    completed_date: String,
    gp: GpView<'a>,
    patient: PatientView<'a>,
    results: &'a AssessmentResults,
    attention_details: String,
    hyperactivity_details: String,
    supplement: SupplementView,
    onset: String,
    impairment_details: String,
    history: HistoryView,
    family: FamilyView,
    generated_at: String,
    report_id: &'a str,
}

#[derive(Serialize)]
struct GpView<'a> {
    name: &'a str,
    practice: &'a str,
    address: &'a str,
    surname: &'a str,
}

#[derive(Serialize)]
struct PatientView<'a> {
    name: &'a str,
    date_of_birth: String,
    nhs_number: Option<&'a str>,
    email: &'a str,
    phone: &'a str,
    address: &'a str,
}

#[derive(Serialize)]
struct SupplementView {
    adult: &'static str,
    childhood: &'static str,
}

#[derive(Serialize)]
struct HistoryView {
    previous_diagnoses: String,
    current_medications: String,
    previous_treatments: String,
    alcohol: String,
    tobacco: String,
    cannabis: String,
    other_substances: Option<String>,
    sleep_patterns: String,
    significant_life_events: String,
}

#[derive(Serialize)]
struct FamilyView {
    adhd: &'static str,
    adhd_relatives: Option<String>,
    anxiety: &'static str,
    depression: &'static str,
    other_conditions: String,
}

impl<'a> ReportView<'a> {
    fn new(
        assessment: &'a Assessment,
        results: &'a AssessmentResults,
        settings: &'a ReportSettings,
        stamp: &'a ReportStamp,
    ) -> Self {
        let info = &assessment.personal_info;
        let diva = &results.diva;

        Self {
            platform_name: &settings.platform_name,
            report_date: stamp.generated_at.strftime("%d %B %Y").to_string(),
            completed_date: assessment.completed_at.strftime("%d %B %Y").to_string(),
            gp: GpView {
                name: &info.gp_name,
                practice: &info.gp_practice,
                address: &info.gp_address,
                surname: info.gp_surname(),
            },
            patient: patient_view(info),
            results,
            attention_details: format_symptom_details(
                "INATTENTION SYMPTOMS",
                attention_items(),
                &assessment.diva.attention,
            ),
            hyperactivity_details: format_symptom_details(
                "HYPERACTIVITY-IMPULSIVITY SYMPTOMS",
                hyperactivity_impulsivity_items(),
                &assessment.diva.hyperactivity_impulsivity,
            ),
            supplement: SupplementView {
                adult: yes_no(diva.supplement.adult_more_than_others),
                childhood: yes_no(diva.supplement.childhood_more_than_others),
            },
            onset: format_onset(&diva.criterion_b),
            impairment_details: format_impairment_details(&assessment.diva.criterion_c),
            history: history_view(&assessment.mental_health_history),
            family: family_view(&assessment.family_history),
            generated_at: stamp.generated_at.strftime("%d/%m/%Y %H:%M").to_string(),
            report_id: &stamp.report_id,
        }
    }
}

fn patient_view(info: &PersonalInformation) -> PatientView<'_> {
    PatientView {
        name: &info.full_name,
        date_of_birth: info.date_of_birth.strftime("%d/%m/%Y").to_string(),
        nhs_number: info.nhs_number(),
        email: &info.email,
        phone: &info.phone,
        address: &info.address,
    }
}

fn history_view(history: &MentalHealthHistory) -> HistoryView {
    let diagnoses: Vec<&str> = history
        .previous_diagnoses
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .collect();
    let substances = &history.substance_use;

    HistoryView {
        previous_diagnoses: if diagnoses.is_empty() {
            NONE_REPORTED.to_string()
        } else {
            diagnoses.join(", ")
        },
        current_medications: or_fallback(&history.current_medications, NONE_REPORTED),
        previous_treatments: or_fallback(&history.previous_treatments, NONE_REPORTED),
        alcohol: substances.alcohol.to_string(),
        tobacco: substances.tobacco.to_string(),
        cannabis: substances.cannabis.to_string(),
        other_substances: non_blank(&substances.other),
        sleep_patterns: or_fallback(&history.sleep_patterns, NOT_SPECIFIED),
        significant_life_events: or_fallback(&history.significant_life_events, NOT_SPECIFIED),
    }
}

fn family_view(family: &FamilyHistory) -> FamilyView {
    FamilyView {
        adhd: yes_no(family.adhd_in_family),
        adhd_relatives: family
            .adhd_in_family
            .then(|| non_blank(&family.adhd_relatives))
            .flatten(),
        anxiety: yes_no(family.anxiety_in_family),
        depression: yes_no(family.depression_in_family),
        other_conditions: or_fallback(&family.other_mental_health_conditions, NONE_REPORTED),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "YES" } else { "NO" }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn or_fallback(text: &str, fallback: &str) -> String {
    non_blank(text).unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use addapt_core::models::UseLevel;

    #[test]
    fn blank_history_uses_fallbacks() {
        let view = history_view(&MentalHealthHistory::default());
        assert_eq!(view.previous_diagnoses, "None reported");
        assert_eq!(view.current_medications, "None reported");
        assert_eq!(view.sleep_patterns, "Not specified");
        assert_eq!(view.alcohol, "none");
        assert!(view.other_substances.is_none());
    }

    #[test]
    fn diagnoses_are_joined() {
        let mut history = MentalHealthHistory {
            previous_diagnoses: vec!["Anxiety".to_string(), " ".to_string(), "Dyslexia".to_string()],
            ..Default::default()
        };
        history.substance_use.alcohol = UseLevel::Regular;
        let view = history_view(&history);
        assert_eq!(view.previous_diagnoses, "Anxiety, Dyslexia");
        assert_eq!(view.alcohol, "regular");
    }

    #[test]
    fn relatives_only_shown_when_adhd_in_family() {
        let family = FamilyHistory {
            adhd_in_family: false,
            adhd_relatives: "Brother".to_string(),
            ..Default::default()
        };
        assert!(family_view(&family).adhd_relatives.is_none());

        let family = FamilyHistory {
            adhd_in_family: true,
            ..family
        };
        let view = family_view(&family);
        assert_eq!(view.adhd, "YES");
        assert_eq!(view.adhd_relatives.as_deref(), Some("Brother"));
    }

    #[test]
    fn template_variables_render() {
        #[derive(Serialize)]
        struct Ctx {
            name: &'static str,
        }
        let out = render_template("t.txt", "Hello <{{ name }}>", &Ctx { name: "A & B" }).unwrap();
        assert_eq!(out, "Hello <A & B>");
    }

    #[test]
    fn broken_template_is_a_parse_error() {
        let result = render_template("t.txt", "{% if %}", &serde_json::json!({}));
        assert!(matches!(result, Err(ExportError::TemplateParse(_))));
    }
}
