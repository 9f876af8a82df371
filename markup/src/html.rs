//! Escaped HTML rendering of parsed segments.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

use crate::parser::{Run, Segment};

/// Render segments as HTML.
///
/// Coloured segments become `<span style="color:…">`, line breaks become
/// `<br>`, and all text is escaped. No other markup is ever produced.
pub fn to_html(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        let color = segment.color.css();
        if let Some(color) = color {
            out.push_str("<span style=\"color:");
            out.push_str(color);
            out.push_str("\">");
        }
        for run in &segment.runs {
            match run {
                Run::Text(text) => escape_into(&mut out, text),
                Run::LineBreak => out.push_str("<br>"),
            }
        }
        if color.is_some() {
            out.push_str("</span>");
        }
    }
    out
}

fn escape_into(out: &mut String, text: &str) {
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
}
