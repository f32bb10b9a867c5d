//! addapt-instruments
//!
//! Question banks and scoring rules for the screening instruments used in
//! the adult ADHD assessment: ASRS, DIVA 5.0, GAD-7 and PHQ-9. Every scorer
//! is a pure function of its answer set; `score_assessment` runs all four
//! and derives the overall recommendation.

pub mod error;
pub mod instruments;
pub mod recommendation;
pub mod results;
pub mod scoring;

use addapt_core::models::Assessment;
use tracing::{debug, warn};

use error::InstrumentError;
use instruments::asrs::{Asrs, AsrsScore};
use instruments::diva::{Diva, DivaScore};
use instruments::gad7::{Gad7, Gad7Score};
use instruments::phq9::{Phq9, Phq9Score};
use results::AssessmentResults;
use scoring::{Item, ResponseOption};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "asrs", "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "ASRS v1.1", "PHQ-9").
    fn name(&self) -> &str;

    /// Items in questionnaire order.
    fn items(&self) -> &[Item];

    /// The response scale shared by every item.
    fn response_options(&self) -> &[ResponseOption];

    /// Highest value a single item may take.
    fn max_item_value(&self) -> u8 {
        self.response_options()
            .iter()
            .map(|o| o.value)
            .max()
            .unwrap_or(0)
    }

    /// Highest possible total across all items.
    fn max_total(&self) -> u32 {
        self.items().len() as u32 * u32::from(self.max_item_value())
    }

    /// Label for a response value, if it is on the scale.
    fn response_label(&self, value: u8) -> Option<&'static str> {
        self.response_options()
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
    }
}

/// An instrument that can turn its answer set into a score.
pub trait ScoredInstrument: Instrument {
    type Answers;
    type Score;

    fn score(&self, answers: &Self::Answers) -> Result<Self::Score, InstrumentError>;
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(Asrs),
        Box::new(Diva),
        Box::new(Gad7),
        Box::new(Phq9),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}

pub fn score_asrs(
    answers: &addapt_core::models::AsrsAnswers,
) -> Result<AsrsScore, InstrumentError> {
    Asrs.score(answers)
}

pub fn score_gad7(
    answers: &addapt_core::models::Gad7Answers,
) -> Result<Gad7Score, InstrumentError> {
    Gad7.score(answers)
}

pub fn score_phq9(
    answers: &addapt_core::models::Phq9Answers,
) -> Result<Phq9Score, InstrumentError> {
    Phq9.score(answers)
}

pub fn score_diva(
    answers: &addapt_core::models::DivaAnswers,
) -> Result<DivaScore, InstrumentError> {
    Diva.score(answers)
}

/// Score every instrument in a submitted assessment and aggregate the
/// overall recommendation. The first scoring error aborts the whole call.
pub fn score_assessment(assessment: &Assessment) -> Result<AssessmentResults, InstrumentError> {
    let asrs = score_asrs(&assessment.asrs)?;
    debug!(
        score = asrs.score,
        high_responses = asrs.high_response_count,
        likely_adhd = asrs.likely_adhd,
        "scored ASRS"
    );

    let gad7 = score_gad7(&assessment.gad7)?;
    debug!(total = gad7.total_score, severity = %gad7.severity, "scored GAD-7");

    let phq9 = score_phq9(&assessment.phq9)?;
    debug!(total = phq9.total_score, severity = %phq9.severity, "scored PHQ-9");
    if phq9.requires_urgent_attention {
        warn!("PHQ-9 item 9 positive, assessment requires urgent attention");
    }

    let diva = score_diva(&assessment.diva)?;
    debug!(
        meets_dsm_criteria = diva.meets_dsm_criteria,
        presentation = %diva.predominant_type,
        "scored DIVA"
    );

    Ok(AssessmentResults::from_scores(asrs, gad7, phq9, diva))
}
