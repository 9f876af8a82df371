//! Renderer for the dispatch markup used by the war backend.
//!
//! Dispatch text carries a tiny inline vocabulary: `<i=N>…</i>` colour spans
//! that nest to any depth, and `\n` line breaks. Nothing else is interpreted,
//! and [`html::to_html`] escapes everything it emits, so backend text can be
//! shown without HTML injection.
//!
//! Parsing never fails. Unknown colour ids, stray closing tags and unterminated
//! opening tags all degrade to a defined fallback.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`token`] | [`ColorToken`] palette and its CSS colours |
//! | [`parser`] | Colour-stack scan producing [`Segment`]s, plus [`strip_tags`] |
//! | [`title`] | Title/body split for the dispatch feed |
//! | [`html`] | Escaped HTML rendering of segments |

pub mod html;
pub mod parser;
pub mod title;
pub mod token;

pub use html::to_html;
pub use parser::{Run, Segment, Segments, parse, segments, strip_tags};
pub use title::{TitledMessage, split_title};
pub use token::ColorToken;
