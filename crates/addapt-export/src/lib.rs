//! addapt-export
//!
//! GP referral letter generation: plain text from a Tera template, plus
//! HTML and DOCX renderings of the same letter.

pub mod docx;
pub mod error;
pub mod html;
pub mod lines;
pub mod render;
pub mod report_id;
pub mod settings;
pub mod symptoms;

use addapt_core::models::Assessment;
use addapt_instruments::results::AssessmentResults;
use serde::{Deserialize, Serialize};
use tracing::info;

use error::ExportError;
use render::{ReportStamp, render_gp_report};
use settings::ReportSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Html,
    Docx,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Html => "html",
            ReportFormat::Docx => "docx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text/plain; charset=utf-8",
            ReportFormat::Html => "text/html; charset=utf-8",
            ReportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// A finished report ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    pub report_id: String,
    pub format: ReportFormat,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Render the referral letter in the requested format.
///
/// The full letter is only released once the report has been unlocked;
/// otherwise this returns [`ExportError::ReportLocked`] without rendering.
pub fn export_report(
    assessment: &Assessment,
    results: &AssessmentResults,
    settings: &ReportSettings,
    stamp: &ReportStamp,
    format: ReportFormat,
    unlocked: bool,
) -> Result<ExportedReport, ExportError> {
    if !unlocked {
        return Err(ExportError::ReportLocked);
    }

    let letter = render_gp_report(assessment, results, settings, stamp)?;
    let bytes = match format {
        ReportFormat::Text => letter.into_bytes(),
        ReportFormat::Html => {
            html::letter_to_html(&letter, &assessment.personal_info.full_name).into_bytes()
        }
        ReportFormat::Docx => docx::generate_docx(&letter, &settings.styles)?,
    };

    info!(format = format.extension(), bytes = bytes.len(), "report exported");

    Ok(ExportedReport {
        file_name: format!("{}.{}", stamp.report_id, format.extension()),
        report_id: stamp.report_id.clone(),
        format,
        bytes,
    })
}
