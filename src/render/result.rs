//! Rendering result with metadata and statistics.

use crate::model::Metadata;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content
    pub content: String,

    /// Document metadata (copied from the source document)
    pub metadata: Metadata,

    /// Page statistics
    pub stats: PageStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: PageStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageStats {
    /// Number of headings
    pub heading_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of lists
    pub list_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of hyperlinks
    pub link_count: u32,

    /// Number of images
    pub image_count: u32,

    /// Number of preformatted blocks
    pub preformatted_count: u32,

    /// Number of script references
    pub script_count: u32,

    /// Approximate word count of the text projection
    pub word_count: u32,

    /// Character count of the text projection (excluding whitespace)
    pub char_count: u32,
}

impl PageStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a heading.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Record a paragraph.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Record a list with the given number of items.
    pub fn add_list(&mut self, items: usize) {
        self.list_count += 1;
        self.list_item_count += items as u32;
    }

    /// Record a hyperlink.
    pub fn add_link(&mut self) {
        self.link_count += 1;
    }

    /// Record an image.
    pub fn add_image(&mut self) {
        self.image_count += 1;
    }

    /// Record a preformatted block.
    pub fn add_preformatted(&mut self) {
        self.preformatted_count += 1;
    }

    /// Record a script reference.
    pub fn add_script(&mut self) {
        self.script_count += 1;
    }

    /// Count words and characters in the given text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counters() {
        let mut stats = PageStats::new();
        stats.add_heading();
        stats.add_list(3);
        stats.add_link();
        stats.add_link();

        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.list_count, 1);
        assert_eq!(stats.list_item_count, 3);
        assert_eq!(stats.link_count, 2);
    }

    #[test]
    fn test_count_text() {
        let mut stats = PageStats::new();
        stats.count_text("measurement control in Perl");
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.char_count, 24);
    }
}
