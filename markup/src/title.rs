//! Title/body split for the dispatch feed.
//!
//! Best-effort and lossy: `title + body` does not reconstruct the message.

#[cfg(test)]
#[path = "title_test.rs"]
mod title_test;

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::parser::strip_tags;

static CRITICAL_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<i=3>(.*?)</i>").expect("critical span pattern compiles"));

/// Characters of raw text used as a title when nothing better is found.
pub const FALLBACK_TITLE_CHARS: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledMessage {
    pub title: String,
    pub body: String,
}

/// Split a raw dispatch into a title and a body.
///
/// 1. The first `<i=3>…</i>` span (tags stripped, trimmed) is the title; the
///    body is the message with that span and the blank lines right after it
///    removed.
/// 2. Otherwise the first non-blank line, tags stripped, is the title and the
///    rest is the body.
/// 3. If that line is empty once tags are stripped, the first
///    [`FALLBACK_TITLE_CHARS`] characters of the raw text, on one line, are
///    the title and the whole trimmed text is the body.
pub fn split_title(raw: &str) -> TitledMessage {
    if let Some(found) = from_critical_span(raw) {
        return found;
    }

    let text = skip_blank_lines(raw);
    let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
    let title = strip_tags(first).trim().to_owned();
    if !title.is_empty() {
        return TitledMessage { title, body: skip_blank_lines(rest).trim().to_owned() };
    }

    TitledMessage { title: one_line_prefix(raw), body: raw.trim().to_owned() }
}

/// Leading [`FALLBACK_TITLE_CHARS`] characters with whitespace runs collapsed
/// to single spaces.
fn one_line_prefix(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(FALLBACK_TITLE_CHARS)
        .collect()
}

fn from_critical_span(raw: &str) -> Option<TitledMessage> {
    let caps = CRITICAL_SPAN.captures(raw)?;
    let whole = caps.get(0)?;
    let title = strip_tags(caps.get(1)?.as_str()).trim().to_owned();
    if title.is_empty() {
        return None;
    }
    let mut body = String::with_capacity(raw.len());
    body.push_str(&raw[..whole.start()]);
    body.push_str(skip_blank_lines(&raw[whole.end()..]));
    Some(TitledMessage { title, body: body.trim().to_owned() })
}

/// Drop whole lines at the start of `text` that contain only whitespace.
fn skip_blank_lines(text: &str) -> &str {
    let mut rest = text;
    while let Some((line, tail)) = rest.split_once('\n') {
        if !line.trim().is_empty() {
            break;
        }
        rest = tail;
    }
    rest
}
