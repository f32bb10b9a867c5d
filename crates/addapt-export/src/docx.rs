use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::lines::{Line, Span, classify, spans};
use crate::settings::DocumentStyles;

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

/// Generate a DOCX document from the rendered letter.
///
/// Lines are mapped the same way as the HTML export:
/// - the first heading → Title
/// - later all-caps headings → Heading 1
/// - `- item` → bullet paragraph
/// - `**bold**` → bold run in the emphasis colour
/// - `=====` rules and blank lines → empty paragraph
/// - everything else → body paragraph, leading indentation kept
pub fn generate_docx(letter: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style(TITLE_STYLE, "Title", styles.title_size, styles))
        .add_style(heading_style(HEADING_STYLE, "heading 1", styles.heading_size, styles));

    let mut seen_title = false;
    for line in letter.lines() {
        let paragraph = match classify(line) {
            Line::Heading(text) => {
                let style_id = if seen_title { HEADING_STYLE } else { TITLE_STYLE };
                seen_title = true;
                heading_paragraph(text, style_id)
            }
            Line::Bullet(text) => bullet_paragraph(text, styles),
            Line::Text(text) => body_paragraph(text, styles),
            Line::Rule | Line::Blank => Paragraph::new(),
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize, styles: &DocumentStyles) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
        .fonts(RunFonts::new().ascii(&styles.heading_font))
}

fn heading_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let bullet_run = body_run("\u{2022} ", styles);

    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(bullet_run);

    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }

    para
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    spans(text)
        .into_iter()
        .map(|span| match span {
            Span::Plain(t) => body_run(t, styles),
            Span::Bold(t) => body_run(t, styles).bold().color(&styles.emphasis_color),
        })
        .collect()
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_a_zip_archive() {
        let bytes = generate_docx(
            "ADULT ADHD ASSESSMENT REPORT\n\n===========\nCurrent Result: **POSITIVE**\n- item\n",
            &DocumentStyles::default(),
        )
        .unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn empty_letter_still_builds() {
        let bytes = generate_docx("", &DocumentStyles::default()).unwrap();
        assert!(!bytes.is_empty());
    }
}
