//! JSON rendering and loading.
//!
//! JSON is the authoring format of the CLI: a document serialized here loads
//! back with `from_json` and renders identically.

use crate::error::Result;
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    Ok(result?)
}

/// Load a document from JSON.
pub fn from_json(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Inline};

    #[test]
    fn test_to_json_pretty() {
        let mut doc = Document::with_title("Test");
        doc.add_block(Block::paragraph("Hello"));

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("Test"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let doc = Document::with_title("Test");
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_json_round_trip() {
        let mut doc = Document::with_title("Round trip");
        doc.add_block(Block::paragraph_with(vec![
            Inline::text("see "),
            Inline::link("here", "docs/"),
        ]));

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        let loaded = from_json(&json).unwrap();
        assert_eq!(doc, loaded);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(from_json("{not json").is_err());
        assert!(from_json("{\"unexpected\": true}").is_err());
    }
}
