use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Branding and output options for generated reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Name used in the letter header and sign-off.
    pub platform_name: String,

    /// First segment of every report ID.
    pub report_id_prefix: String,

    /// Fonts and sizes for DOCX output.
    pub styles: DocumentStyles,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            platform_name: "Addapt.ai".to_string(),
            report_id_prefix: "ADDAPT".to_string(),
            styles: DocumentStyles::default(),
        }
    }
}

impl ReportSettings {
    /// Parse settings from JSON. Missing keys fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Document styling configuration for DOCX exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Times New Roman", "Calibri").
    pub body_font: String,

    /// Font for headings (e.g. "Arial", "Calibri").
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Report title font size in points.
    pub title_size: usize,

    /// Section heading font size in points.
    pub heading_size: usize,

    /// Hex colour for `**emphasised**` text, without the leading `#`.
    pub emphasis_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Times New Roman".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            title_size: 16,
            heading_size: 13,
            emphasis_color: "DC2626".to_string(),
        }
    }
}
