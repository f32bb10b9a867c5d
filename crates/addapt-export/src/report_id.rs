use addapt_core::models::Assessment;
use uuid::Uuid;

/// Length of the random tail of a report ID.
pub const SUFFIX_LEN: usize = 6;

/// `<prefix>-<yyyymmdd>-<initials>-<suffix>`, dated by assessment completion.
///
/// The suffix is taken from a v4 UUID: unique enough to tell renders
/// apart, not a security token.
pub fn generate_report_id(prefix: &str, assessment: &Assessment) -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(SUFFIX_LEN)
        .collect();
    format_report_id(prefix, assessment, &suffix.to_uppercase())
}

pub fn format_report_id(prefix: &str, assessment: &Assessment, suffix: &str) -> String {
    format!(
        "{prefix}-{}-{}-{suffix}",
        assessment.completed_at.strftime("%Y%m%d"),
        assessment.personal_info.initials(),
    )
}
