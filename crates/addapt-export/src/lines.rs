//! Line classification shared by the HTML and DOCX renderers.
//!
//! The letter is plain text, so structure is recovered heuristically:
//! - a line starting with `===========` is a rule
//! - a line of at least 10 characters using only `A-Z` and whitespace is a heading
//! - a line starting with `-` is a bullet
//! - an empty line is a blank
//! - everything else is body text, which may contain `**bold**` spans

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Rule,
    Heading(&'a str),
    Bullet(&'a str),
    Text(&'a str),
    Blank,
}

const RULE_PREFIX: &str = "===========";
const MIN_HEADING_LEN: usize = 10;

pub fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Line::Blank
    } else if trimmed.starts_with(RULE_PREFIX) {
        Line::Rule
    } else if is_heading(trimmed) {
        Line::Heading(trimmed)
    } else if let Some(item) = trimmed.strip_prefix('-') {
        Line::Bullet(item.trim_start())
    } else {
        Line::Text(line.trim_end())
    }
}

fn is_heading(trimmed: &str) -> bool {
    trimmed.chars().count() >= MIN_HEADING_LEN
        && trimmed
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_whitespace())
}

/// A piece of inline text, either plain or inside `**…**`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Bold(&'a str),
}

/// Split `**bold**` segments out of a line. An unmatched `**` is kept as
/// plain text.
pub fn spans(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let after_start = &remaining[start + 2..];
        let Some(end) = after_start.find("**") else {
            break;
        };
        if start > 0 {
            spans.push(Span::Plain(&remaining[..start]));
        }
        spans.push(Span::Bold(&after_start[..end]));
        remaining = &after_start[end + 2..];
    }

    if !remaining.is_empty() {
        spans.push(Span::Plain(remaining));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_need_ten_uppercase_characters() {
        assert_eq!(classify("FAMILY HISTORY"), Line::Heading("FAMILY HISTORY"));
        assert_eq!(classify("  END OF REPORT  "), Line::Heading("END OF REPORT"));
        assert_eq!(classify("RE: Someone"), Line::Text("RE: Someone"));
        assert_eq!(classify("SHORT"), Line::Text("SHORT"));
        assert_eq!(
            classify("CURRENT PRESENTATION - ASRS SCREENING RESULTS"),
            Line::Text("CURRENT PRESENTATION - ASRS SCREENING RESULTS")
        );
    }

    #[test]
    fn rules_bullets_and_blanks() {
        assert_eq!(classify(&"=".repeat(80)), Line::Rule);
        assert_eq!(classify("     - Other: text"), Line::Bullet("Other: text"));
        assert_eq!(classify("   "), Line::Blank);
    }

    #[test]
    fn bold_spans() {
        assert_eq!(
            spans("Current Result: **POSITIVE SCREEN** now"),
            vec![
                Span::Plain("Current Result: "),
                Span::Bold("POSITIVE SCREEN"),
                Span::Plain(" now"),
            ]
        );
        assert_eq!(spans("**MET**"), vec![Span::Bold("MET")]);
    }

    #[test]
    fn unmatched_marker_stays_plain() {
        assert_eq!(spans("a ** b"), vec![Span::Plain("a ** b")]);
    }
}
