//! Colour palette for `<i=N>` spans.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use serde::{Deserialize, Serialize};

/// Colour attached to a run of dispatch text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    /// No span is open; the surrounding text colour applies.
    #[default]
    Inherit,
    /// `<i=0>`
    Muted,
    /// `<i=1>`
    Emphasis,
    /// `<i=3>`
    Critical,
    /// Any other id, including ids too large to represent.
    Unknown,
}

impl ColorToken {
    /// Token for the digits captured from an opening tag.
    pub fn from_tag_id(digits: &str) -> Self {
        match digits.parse::<u32>() {
            Ok(0) => Self::Muted,
            Ok(1) => Self::Emphasis,
            Ok(3) => Self::Critical,
            _ => Self::Unknown,
        }
    }

    /// CSS colour value, or `None` for [`ColorToken::Inherit`].
    pub fn css(self) -> Option<&'static str> {
        match self {
            Self::Inherit => None,
            Self::Muted => Some("#8a8a8a"),
            Self::Emphasis => Some("#ffe81f"),
            Self::Critical => Some("#00d9ff"),
            Self::Unknown => Some("#c8c8c8"),
        }
    }
}
