//! Block-level content types.

use serde::{Deserialize, Serialize};

use super::inline::{self, Inline};

/// A content block in the document body.
///
/// Block order is fixed at authoring time and preserved verbatim by every
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading (h1-h6)
    Heading {
        /// Heading level (1-6)
        level: u8,
        /// Heading content
        content: Vec<Inline>,
    },

    /// A paragraph of prose
    Paragraph {
        /// Paragraph content
        content: Vec<Inline>,
    },

    /// An ordered or unordered list
    List(List),

    /// An image reference
    Image {
        /// Image source path (relative to the bundle) or absolute URL
        src: String,
        /// Alternative text
        alt: String,
        /// Width attribute value (e.g. "300px")
        width: Option<String>,
        /// Id of a wrapping div, if the image is boxed
        container_id: Option<String>,
    },

    /// Preformatted text (code, literal examples)
    Preformatted {
        /// Class attribute value
        class: Option<String>,
        /// Verbatim text content (still entity-escaped on output)
        text: String,
    },

    /// A script reference, included verbatim and never interpreted
    Script(ScriptRef),

    /// Verbatim markup passthrough
    Raw {
        /// Raw markup, emitted byte for byte
        content: String,
    },

    /// An XHTML comment
    Comment {
        /// Comment text (must not contain "--")
        text: String,
    },
}

impl Block {
    /// Create a heading block from plain text.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            content: vec![Inline::text(text)],
        }
    }

    /// Create a paragraph block from plain text.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            content: vec![Inline::text(text)],
        }
    }

    /// Create a paragraph block from inline content.
    pub fn paragraph_with(content: Vec<Inline>) -> Self {
        Block::Paragraph { content }
    }

    /// Create an image block.
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Block::Image {
            src: src.into(),
            alt: alt.into(),
            width: None,
            container_id: None,
        }
    }

    /// Create a preformatted block.
    pub fn preformatted(class: Option<&str>, text: impl Into<String>) -> Self {
        Block::Preformatted {
            class: class.map(str::to_string),
            text: text.into(),
        }
    }

    /// Create a comment block.
    pub fn comment(text: impl Into<String>) -> Self {
        Block::Comment { text: text.into() }
    }

    /// Get the plain text projection of this block.
    ///
    /// Scripts, raw markup, and comments have no text projection.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Block::Heading { content, .. } | Block::Paragraph { content } => {
                Some(inline::plain_text(content))
            }
            Block::List(list) => Some(list.plain_text()),
            Block::Preformatted { text, .. } => Some(text.clone()),
            Block::Image { alt, .. } => Some(alt.clone()),
            Block::Script(_) | Block::Raw { .. } | Block::Comment { .. } => None,
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Get the heading level, if this is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Block::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Iterate over the inline content of this block, if any.
    pub fn inlines(&self) -> Box<dyn Iterator<Item = &Inline> + '_> {
        match self {
            Block::Heading { content, .. } | Block::Paragraph { content } => {
                Box::new(content.iter())
            }
            Block::List(list) => Box::new(list.items.iter().flat_map(|i| i.content.iter())),
            _ => Box::new(std::iter::empty()),
        }
    }
}

/// An ordered or unordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// List kind
    pub kind: ListKind,

    /// List items, in authored order
    pub items: Vec<ListItem>,
}

impl List {
    /// Create a new empty unordered list.
    pub fn unordered() -> Self {
        Self {
            kind: ListKind::Unordered,
            items: Vec::new(),
        }
    }

    /// Create a new empty ordered list.
    pub fn ordered() -> Self {
        Self {
            kind: ListKind::Ordered,
            items: Vec::new(),
        }
    }

    /// Append an item built from inline content.
    pub fn with_item(mut self, content: Vec<Inline>) -> Self {
        self.items.push(ListItem { content });
        self
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the plain text projection, one line per item.
    pub fn plain_text(&self) -> String {
        self.items
            .iter()
            .map(ListItem::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Bulleted list
    #[default]
    Unordered,
    /// Numbered list
    Ordered,
}

/// A single list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Item content
    pub content: Vec<Inline>,
}

impl ListItem {
    /// Create a list item from inline content.
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }

    /// Get the display text of the item.
    pub fn plain_text(&self) -> String {
        inline::plain_text(&self.content)
    }

    /// Get the first hyperlink target in the item, if any.
    pub fn first_link(&self) -> Option<&str> {
        self.content.iter().find_map(Inline::url)
    }
}

/// A third-party script reference.
///
/// The script is included at its authored position and emitted verbatim; this
/// library never fetches, executes, or inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRef {
    /// External script URL, if any
    pub src: Option<String>,

    /// Inline script code, if any
    pub code: Option<String>,
}

impl ScriptRef {
    /// Create a reference to an external script.
    pub fn external(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            code: None,
        }
    }

    /// Create an inline script.
    pub fn inline(code: impl Into<String>) -> Self {
        Self {
            src: None,
            code: Some(code.into()),
        }
    }

    /// Check if the reference carries neither source nor code.
    pub fn is_empty(&self) -> bool {
        self.src.is_none() && self.code.is_none()
    }
}
