//! Colour-stack scan over `<i=N>` / `</i>` tags.
//!
//! The scan walks tag matches left to right. Text between tags is emitted as
//! one [`Segment`] coloured with whatever sits on top of the stack *before*
//! the tag is applied. The stack starts with an [`ColorToken::Inherit`]
//! sentinel that is never popped: a stray `</i>` is a no-op, and an opening
//! tag that is never closed keeps its colour to the end of the input.

#[cfg(test)]
#[path = "parser_test.rs"]
mod parser_test;

use std::sync::LazyLock;

use regex_lite::{CaptureMatches, Regex};
use serde::{Deserialize, Serialize};

use crate::token::ColorToken;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<i=(\d+)>|</i>").expect("tag pattern compiles"));

/// Piece of a segment: literal text or an explicit line break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Run {
    Text(String),
    LineBreak,
}

/// Text between two tags, with its colour. `\n` is already split out into
/// [`Run::LineBreak`] markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub color: ColorToken,
    pub runs: Vec<Run>,
}

impl Segment {
    /// Build a segment from raw text, turning each `\n` into a line break.
    pub fn new(text: &str, color: ColorToken) -> Self {
        let mut runs = Vec::new();
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                runs.push(Run::LineBreak);
            }
            if !line.is_empty() {
                runs.push(Run::Text(line.to_owned()));
            }
        }
        Self { color, runs }
    }

    /// The segment's text with line breaks rendered back as `\n`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            match run {
                Run::Text(t) => out.push_str(t),
                Run::LineBreak => out.push('\n'),
            }
        }
        out
    }
}

/// Lazy segment stream over one input string.
///
/// Finite and single-pass: once exhausted it keeps returning `None`.
pub struct Segments<'a> {
    input: &'a str,
    tags: CaptureMatches<'static, 'a>,
    cursor: usize,
    stack: Vec<ColorToken>,
    done: bool,
}

impl<'a> Segments<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, tags: TAG.captures_iter(input), cursor: 0, stack: vec![ColorToken::Inherit], done: false }
    }

    fn top(&self) -> ColorToken {
        self.stack.last().copied().unwrap_or_default()
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        while !self.done {
            let Some(caps) = self.tags.next() else {
                self.done = true;
                let rest = &self.input[self.cursor..];
                self.cursor = self.input.len();
                if rest.is_empty() {
                    return None;
                }
                return Some(Segment::new(rest, self.top()));
            };

            let Some(whole) = caps.get(0) else {
                continue;
            };
            let text = &self.input[self.cursor..whole.start()];
            self.cursor = whole.end();
            let color = self.top();

            match caps.get(1) {
                Some(id) => self.stack.push(ColorToken::from_tag_id(id.as_str())),
                None => {
                    if self.stack.len() > 1 {
                        self.stack.pop();
                    }
                }
            }

            if !text.is_empty() {
                return Some(Segment::new(text, color));
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// Lazily parse `input` into coloured segments.
pub fn segments(input: &str) -> Segments<'_> {
    Segments::new(input)
}

/// Parse `input` into a materialized segment list.
pub fn parse(input: &str) -> Vec<Segment> {
    segments(input).collect()
}

/// Remove both tag forms, keeping the text between them.
pub fn strip_tags(input: &str) -> String {
    TAG.replace_all(input, "").into_owned()
}
