//! Integration tests for authored (non-canonical) documents.

use dokupage::{
    render, validate, Block, Document, Inline, IssueKind, JsonFormat, List, Metadata,
    RenderOptions, ScriptRef,
};

fn release_notes() -> Document {
    let mut doc = Document::new();
    doc.metadata = Metadata::with_title("Release notes")
        .with_language("en")
        .with_stylesheet("style/notes.css");

    doc.add_block(Block::heading(1, "Release notes"));
    doc.add_block(Block::paragraph_with(vec![
        Inline::text("Version 2.05 is available from "),
        Inline::link("CPAN", "http://search.cpan.org/"),
        Inline::text("."),
    ]));
    doc.add_block(Block::heading(2, "Changes"));
    doc.add_block(Block::List(
        List::unordered()
            .with_item(vec![Inline::text("new driver classes")])
            .with_item(vec![Inline::text("documentation updates")]),
    ));
    doc
}

#[test]
fn test_authored_document_renders() {
    let doc = release_notes();
    let xhtml = render::to_xhtml(&doc, &RenderOptions::default()).unwrap();

    assert!(xhtml.contains("<title>Release notes</title>"));
    assert!(xhtml.contains("xml:lang=\"en\""));
    assert!(xhtml.contains("href=\"style/notes.css\""));
    assert!(xhtml.contains("<li>new driver classes</li>"));
}

#[test]
fn test_authored_document_round_trips_through_file() {
    let doc = release_notes();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");

    let json = render::to_json(&doc, JsonFormat::Pretty).unwrap();
    std::fs::write(&path, &json).unwrap();

    let loaded = dokupage::load_document(&path).unwrap();
    assert_eq!(doc, loaded);

    let options = RenderOptions::default();
    assert_eq!(
        render::to_xhtml(&doc, &options).unwrap(),
        render::to_xhtml(&loaded, &options).unwrap()
    );
}

#[test]
fn test_validation_flags_authored_mistakes() {
    let mut doc = release_notes();
    doc.add_block(Block::paragraph_with(vec![Inline::link(
        "broken",
        "docs/bad page.html",
    )]));
    doc.add_block(Block::heading(7, "Too deep"));
    doc.add_block(Block::Script(ScriptRef {
        src: None,
        code: None,
    }));

    let issues = validate::check(&doc);
    let kinds: Vec<_> = issues.iter().map(|i| i.kind).collect();
    assert!(kinds.contains(&IssueKind::InvalidUrl));
    assert!(kinds.contains(&IssueKind::HeadingLevel));
    assert!(kinds.contains(&IssueKind::EmptyScript));
}

#[test]
fn test_empty_document_renders_minimal_page() {
    let doc = Document::with_title("Empty");
    let xhtml = render::to_xhtml(&doc, &RenderOptions::default()).unwrap();

    assert!(xhtml.contains("<title>Empty</title>"));
    assert!(xhtml.contains("<body>\n</body>"));
}

#[test]
fn test_raw_block_bypasses_escaping() {
    let mut doc = Document::with_title("Raw");
    doc.add_block(Block::Raw {
        content: "<hr class=\"divider\" />".to_string(),
    });

    let xhtml = render::to_xhtml(&doc, &RenderOptions::default()).unwrap();
    assert!(xhtml.contains("<hr class=\"divider\" />"));
}

#[test]
fn test_link_text_is_escaped_but_raw_is_not() {
    let mut doc = Document::with_title("Escaping");
    doc.add_block(Block::paragraph_with(vec![Inline::link(
        "a < b & c",
        "docs/compare.html",
    )]));

    let xhtml = render::to_xhtml(&doc, &RenderOptions::default()).unwrap();
    assert!(xhtml.contains("<a href=\"docs/compare.html\">a &lt; b &amp; c</a>"));
}
