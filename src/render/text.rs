//! Plain text rendering.

use crate::error::Result;
use crate::model::{Block, Document};

use super::RenderOptions;

/// Convert a document to plain text.
///
/// Headings, paragraphs, list items, preformatted text, and image alt text
/// survive the projection; scripts, raw markup, and comments are dropped.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    if !doc.metadata.title.is_empty() {
        output.push_str(&doc.metadata.title);
        output.push_str("\n\n");
    }

    for block in &doc.blocks {
        match block {
            Block::List(list) => {
                for item in &list.items {
                    output.push(options.list_marker);
                    output.push(' ');
                    output.push_str(&item.plain_text());
                    output.push('\n');
                }
                output.push('\n');
            }
            other => {
                if let Some(text) = other.plain_text() {
                    output.push_str(&text);
                    output.push_str("\n\n");
                }
            }
        }
    }

    Ok(output.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Inline, List, Metadata, ScriptRef};

    #[test]
    fn test_to_text() {
        let mut doc = Document::new();
        doc.metadata = Metadata::with_title("Title line");
        doc.add_block(Block::heading(1, "Heading"));
        doc.add_block(Block::paragraph("First paragraph."));
        doc.add_block(Block::List(
            List::unordered().with_item(vec![Inline::link("item", "http://x.example/")]),
        ));
        doc.add_block(Block::Script(ScriptRef::inline("var x=1;")));

        let text = to_text(&doc, &RenderOptions::default()).unwrap();
        assert!(text.starts_with("Title line"));
        assert!(text.contains("First paragraph."));
        assert!(text.contains("- item"));
        assert!(!text.contains("var x=1;"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_to_text_custom_marker() {
        let mut doc = Document::new();
        doc.add_block(Block::List(
            List::unordered().with_item(vec![Inline::text("only item")]),
        ));

        let options = RenderOptions::new().with_list_marker('*');
        let text = to_text(&doc, &options).unwrap();
        assert_eq!(text, "* only item");
    }
}
