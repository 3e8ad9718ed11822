//! # dokupage
//!
//! Deterministic XHTML rendering for static documentation pages.
//!
//! The library models a page as an immutable sequence of content blocks
//! (headings, paragraphs, lists, images, preformatted text, verbatim script
//! references) and renders it to XHTML 1.1, plain text, or JSON. Rendering is
//! a pure function of the document: the same input yields byte-identical
//! output on every invocation.
//!
//! The canonical content is the Lab::VISA homepage, authored in code in the
//! [`homepage`] module so that producing it requires no runtime input.
//!
//! ## Quick Start
//!
//! ```
//! use dokupage::{homepage, render};
//!
//! fn main() -> dokupage::Result<()> {
//!     let doc = homepage::document();
//!
//!     let options = render::RenderOptions::default();
//!     let xhtml = render::to_xhtml(&doc, &options)?;
//!     assert!(xhtml.starts_with("<?xml"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Multiple output formats**: XHTML 1.1, plain text, JSON
//! - **Deterministic output**: no timestamps, no randomness, byte-identical
//!   re-renders
//! - **ISO-8859-1 delivery**: non-ASCII text becomes named entities, so the
//!   emitted bytes are pure ASCII
//! - **Validation**: hyperlink syntax, heading structure, asset resolution
//!   against a deployment bundle

pub mod error;
pub mod homepage;
pub mod model;
pub mod render;
pub mod validate;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    AssetKind, AssetRef, Block, Document, Inline, List, ListItem, ListKind, Metadata, ScriptRef,
};
pub use render::{JsonFormat, PageStats, RenderOptions, RenderResult};
pub use validate::{Issue, IssueKind};

use std::path::Path;

/// Render the canonical homepage with default options.
///
/// # Example
///
/// ```
/// let first = dokupage::render_homepage().unwrap();
/// let second = dokupage::render_homepage().unwrap();
/// assert_eq!(first, second);
/// ```
pub fn render_homepage() -> Result<String> {
    render::to_xhtml(&homepage::document(), &RenderOptions::default())
}

/// Load an authored document from a JSON file.
///
/// # Example
///
/// ```no_run
/// let doc = dokupage::load_document("page.json").unwrap();
/// println!("{} blocks", doc.block_count());
/// ```
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = std::fs::read_to_string(path.as_ref())?;
    let doc = render::from_json(&json)?;
    log::debug!(
        "loaded {:?} ({} blocks) from {}",
        doc.metadata.title,
        doc.block_count(),
        path.as_ref().display()
    );
    Ok(doc)
}

/// Render a document to XHTML with default options.
pub fn to_xhtml(doc: &Document) -> Result<String> {
    render::to_xhtml(doc, &RenderOptions::default())
}

/// Render a document to plain text with default options.
pub fn to_text(doc: &Document) -> Result<String> {
    render::to_text(doc, &RenderOptions::default())
}

/// Render a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    render::to_json(doc, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_homepage_deterministic() {
        let first = render_homepage().unwrap();
        let second = render_homepage().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_document_missing_file() {
        let result = load_document("/no/such/page.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_top_level_render_helpers() {
        let doc = homepage::document();
        assert!(to_xhtml(&doc).unwrap().contains("<h1>Lab::VISA</h1>"));
        assert!(to_text(&doc).unwrap().contains("How to obtain"));
        assert!(to_json(&doc, JsonFormat::Compact).unwrap().contains("Lab::VISA"));
    }
}
