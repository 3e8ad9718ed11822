//! Inline content: text runs and hyperlinks.

use serde::{Deserialize, Serialize};

/// Inline content within a block.
///
/// A hyperlink is purely referential: it carries a display text and a target
/// URL, and is never dereferenced by this library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    /// A run of plain text
    Text {
        /// The text content
        text: String,
    },

    /// A hyperlink
    Link {
        /// Link display text
        text: String,
        /// Link target URL (absolute or relative)
        url: String,
    },
}

impl Inline {
    /// Create a plain text run.
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    /// Create a hyperlink.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Inline::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Get the display text of this inline item.
    pub fn plain_text(&self) -> &str {
        match self {
            Inline::Text { text } => text,
            Inline::Link { text, .. } => text,
        }
    }

    /// Get the link target, if this is a hyperlink.
    pub fn url(&self) -> Option<&str> {
        match self {
            Inline::Link { url, .. } => Some(url),
            Inline::Text { .. } => None,
        }
    }

    /// Check if this is a hyperlink.
    pub fn is_link(&self) -> bool {
        matches!(self, Inline::Link { .. })
    }
}

/// Flatten a sequence of inline items to their display text.
pub fn plain_text(content: &[Inline]) -> String {
    content.iter().map(Inline::plain_text).collect()
}
