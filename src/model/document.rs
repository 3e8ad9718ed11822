//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{AssetRef, Block, Inline};

/// A complete page document.
///
/// A document is an immutable ordered sequence of content blocks plus head
/// metadata. Content is fixed at authoring time; nothing is created, mutated,
/// or destroyed while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Head metadata (title, language, encoding, stylesheets)
    pub metadata: Metadata,

    /// Body content blocks, in authored order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            blocks: Vec::new(),
        }
    }

    /// Create a new document with the given title.
    pub fn with_title(title: impl Into<String>) -> Self {
        let mut doc = Self::new();
        doc.metadata.title = title.into();
        doc
    }

    /// Append a block to the document body.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Get the number of body blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any body content.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the first heading block, if any.
    pub fn first_heading(&self) -> Option<&Block> {
        self.blocks.iter().find(|b| b.is_heading())
    }

    /// Iterate over every hyperlink in the document as (text, url) pairs.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.blocks.iter().flat_map(|block| {
            block.inlines().filter_map(|inline| match inline {
                Inline::Link { text, url } => Some((text.as_str(), url.as_str())),
                Inline::Text { .. } => None,
            })
        })
    }

    /// Collect every asset reference the document makes: head stylesheets
    /// plus image block sources.
    pub fn assets(&self) -> Vec<AssetRef> {
        let mut assets: Vec<AssetRef> = self
            .metadata
            .stylesheets
            .iter()
            .map(|path| AssetRef::stylesheet(path.as_str()))
            .collect();

        for block in &self.blocks {
            if let Block::Image { src, .. } = block {
                assets.push(AssetRef::image(src.as_str()));
            }
        }

        assets
    }

    /// Get the plain text projection of the entire document body.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Head metadata for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: String,

    /// Language tag for the xml:lang attribute (e.g. "de")
    pub language: Option<String>,

    /// Declared character encoding
    pub encoding: String,

    /// Stylesheet paths, linked in order
    pub stylesheets: Vec<String>,
}

impl Metadata {
    /// Create metadata with a title and the default encoding.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Add a stylesheet reference.
    pub fn with_stylesheet(mut self, path: impl Into<String>) -> Self {
        self.stylesheets.push(path.into());
        self
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            language: None,
            encoding: "iso-8859-1".to_string(),
            stylesheets: Vec::new(),
        }
    }
}
