//! Print-ready HTML wrapper around the plain-text letter.

use crate::lines::{Line, Span, classify, spans};

const STYLE: &str = r#"    body {
      font-family: 'Times New Roman', Times, serif;
      line-height: 1.6;
      max-width: 210mm;
      margin: 0 auto;
      padding: 20mm;
      background: white;
      color: #000;
    }
    @media print {
      body {
        padding: 0;
      }
    }
    h2 {
      color: #0369a1;
      margin-top: 30px;
      font-size: 18px;
    }
    hr {
      border: 2px solid #333;
      margin: 20px 0;
    }
    p {
      margin: 10px 0;
    }
    li {
      margin-left: 20px;
    }
    strong {
      font-weight: bold;
      color: #dc2626;
    }
"#;

/// Convert the rendered letter into a standalone HTML document.
///
/// Consecutive bullet lines are grouped into one `<ul>`. All text is escaped.
pub fn letter_to_html(letter: &str, patient_name: &str) -> String {
    let mut body = String::new();
    let mut in_list = false;

    for line in letter.lines() {
        let line = classify(line);

        match (in_list, matches!(line, Line::Bullet(_))) {
            (false, true) => body.push_str("  <ul>\n"),
            (true, false) => body.push_str("  </ul>\n"),
            _ => {}
        }
        in_list = matches!(line, Line::Bullet(_));

        match line {
            Line::Rule => body.push_str("  <hr />\n"),
            Line::Heading(text) => {
                body.push_str(&format!("  <h2>{}</h2>\n", escape(text)));
            }
            Line::Bullet(text) => {
                body.push_str(&format!("    <li>{}</li>\n", inline(text)));
            }
            Line::Text(text) => {
                body.push_str(&format!("  <p>{}</p>\n", inline(text)));
            }
            Line::Blank => body.push_str("  <br />\n"),
        }
    }
    if in_list {
        body.push_str("  </ul>\n");
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n  \
         <meta charset=\"UTF-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  \
         <title>Adult ADHD Assessment Report - {}</title>\n  \
         <style>\n{STYLE}  </style>\n\
         </head>\n\
         <body>\n{body}</body>\n\
         </html>\n",
        escape(patient_name),
    )
}

fn inline(text: &str) -> String {
    spans(text)
        .into_iter()
        .map(|span| match span {
            Span::Plain(t) => escape(t),
            Span::Bold(t) => format!("<strong>{}</strong>", escape(t)),
        })
        .collect()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
