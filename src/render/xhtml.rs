//! XHTML 1.1 rendering.
//!
//! The renderer is a pure function of the document and options: no clock, no
//! randomness, no environment reads. Rendering the same document twice yields
//! byte-identical output.

use crate::error::{Error, Result};
use crate::model::{Block, Document, Inline, List, ListKind, ScriptRef};

use super::escape::{escape_attr, escape_text};
use super::{PageStats, RenderOptions, RenderResult};

const DOCTYPE: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\" \
     \"http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd\">";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Convert a document to XHTML.
pub fn to_xhtml(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = XhtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to XHTML with page statistics.
pub fn to_xhtml_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = XhtmlRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// XHTML renderer.
pub struct XhtmlRenderer {
    options: RenderOptions,
    stats: PageStats,
}

impl XhtmlRenderer {
    /// Create a new XHTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: PageStats::new(),
        }
    }

    /// Render a document to XHTML.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to XHTML with page statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;

        self.stats.count_text(&doc.plain_text());

        Ok(RenderResult::new(content, doc.metadata.clone(), self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.xml_declaration {
            output.push_str(&format!(
                "<?xml version=\"1.0\" encoding=\"{}\" ?>\n",
                escape_attr(&doc.metadata.encoding)
            ));
        }
        output.push_str(DOCTYPE);
        output.push('\n');

        match doc.metadata.language {
            Some(ref lang) => output.push_str(&format!(
                "<html xmlns=\"{}\" xml:lang=\"{}\">\n",
                XHTML_NS,
                escape_attr(lang)
            )),
            None => output.push_str(&format!("<html xmlns=\"{}\">\n", XHTML_NS)),
        }

        self.render_head(&mut output, doc);

        output.push_str("<body>\n");
        for block in &doc.blocks {
            self.render_block(&mut output, block)?;
        }
        output.push_str("</body>\n</html>\n");

        Ok(output)
    }

    fn render_head(&self, output: &mut String, doc: &Document) {
        output.push_str("<head>\n");
        output.push_str(&format!(
            "<title>{}</title>\n",
            escape_text(&doc.metadata.title)
        ));
        for stylesheet in &doc.metadata.stylesheets {
            output.push_str(&format!(
                "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\" />\n",
                escape_attr(stylesheet)
            ));
        }
        output.push_str("</head>\n");
    }

    fn render_block(&mut self, output: &mut String, block: &Block) -> Result<()> {
        match block {
            Block::Heading { level, content } => {
                if self.options.collect_stats {
                    self.stats.add_heading();
                }
                let level = (*level).clamp(1, 6);
                output.push_str(&format!("<h{}>", level));
                self.render_inline_content(output, content);
                output.push_str(&format!("</h{}>\n", level));
            }
            Block::Paragraph { content } => {
                if self.options.collect_stats {
                    self.stats.add_paragraph();
                }
                output.push_str("<p>");
                self.render_inline_content(output, content);
                output.push_str("</p>\n");
            }
            Block::List(list) => {
                if self.options.collect_stats {
                    self.stats.add_list(list.len());
                }
                self.render_list(output, list);
            }
            Block::Image {
                src,
                alt,
                width,
                container_id,
            } => {
                if self.options.collect_stats {
                    self.stats.add_image();
                }
                self.render_image(output, src, alt, width.as_deref(), container_id.as_deref());
            }
            Block::Preformatted { class, text } => {
                if self.options.collect_stats {
                    self.stats.add_preformatted();
                }
                match class {
                    Some(class) => {
                        output.push_str(&format!("<pre class=\"{}\">", escape_attr(class)))
                    }
                    None => output.push_str("<pre>"),
                }
                output.push_str(&escape_text(text));
                output.push_str("</pre>\n");
            }
            Block::Script(script) => {
                if self.options.collect_stats {
                    self.stats.add_script();
                }
                self.render_script(output, script)?;
            }
            Block::Raw { content } => {
                output.push_str(content);
                output.push('\n');
            }
            Block::Comment { text } => {
                if text.contains("--") {
                    return Err(Error::MalformedComment(text.clone()));
                }
                output.push_str(&format!("<!-- {} -->\n", text));
            }
        }
        Ok(())
    }

    fn render_inline_content(&mut self, output: &mut String, content: &[Inline]) {
        for item in content {
            match item {
                Inline::Text { text } => output.push_str(&escape_text(text)),
                Inline::Link { text, url } => {
                    if self.options.collect_stats {
                        self.stats.add_link();
                    }
                    output.push_str(&format!(
                        "<a href=\"{}\">{}</a>",
                        escape_attr(url),
                        escape_text(text)
                    ));
                }
            }
        }
    }

    fn render_list(&mut self, output: &mut String, list: &List) {
        let tag = match list.kind {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        };
        output.push_str(&format!("<{}>\n", tag));
        for item in &list.items {
            output.push_str("<li>");
            self.render_inline_content(output, &item.content);
            output.push_str("</li>\n");
        }
        output.push_str(&format!("</{}>\n", tag));
    }

    fn render_image(
        &self,
        output: &mut String,
        src: &str,
        alt: &str,
        width: Option<&str>,
        container_id: Option<&str>,
    ) {
        if let Some(id) = container_id {
            output.push_str(&format!("<div id=\"{}\">", escape_attr(id)));
        }
        match width {
            Some(width) => output.push_str(&format!(
                "<img src=\"{}\" width=\"{}\" alt=\"{}\" />",
                escape_attr(src),
                escape_attr(width),
                escape_attr(alt)
            )),
            None => output.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" />",
                escape_attr(src),
                escape_attr(alt)
            )),
        }
        if container_id.is_some() {
            output.push_str("</div>");
        }
        output.push('\n');
    }

    fn render_script(&self, output: &mut String, script: &ScriptRef) -> Result<()> {
        // Scripts are included verbatim; nothing here is escaped, fetched, or
        // interpreted.
        match (&script.src, &script.code) {
            (Some(src), _) => {
                output.push_str(&format!(
                    "<script type=\"text/javascript\" src=\"{}\"></script>\n",
                    escape_attr(src)
                ));
            }
            (None, Some(code)) => {
                output.push_str("<script type=\"text/javascript\">\n");
                output.push_str(code);
                output.push_str("\n</script>\n");
            }
            (None, None) => return Err(Error::EmptyScript),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Inline, List, Metadata};

    fn sample_doc() -> Document {
        let mut doc = Document::new();
        doc.metadata = Metadata::with_title("Sample page")
            .with_language("de")
            .with_stylesheet("doku.css");
        doc.add_block(Block::heading(1, "Sample"));
        doc.add_block(Block::paragraph_with(vec![
            Inline::text("See "),
            Inline::link("the docs", "docs/"),
            Inline::text("."),
        ]));
        doc
    }

    #[test]
    fn test_render_structure() {
        let xhtml = to_xhtml(&sample_doc(), &RenderOptions::default()).unwrap();

        assert!(xhtml.starts_with("<?xml version=\"1.0\" encoding=\"iso-8859-1\" ?>\n"));
        assert!(xhtml.contains("<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\""));
        assert!(xhtml.contains("<html xmlns=\"http://www.w3.org/1999/xhtml\" xml:lang=\"de\">"));
        assert!(xhtml.contains("<title>Sample page</title>"));
        assert!(xhtml.contains("<link rel=\"stylesheet\" type=\"text/css\" href=\"doku.css\" />"));
        assert!(xhtml.contains("<h1>Sample</h1>"));
        assert!(xhtml.contains("<a href=\"docs/\">the docs</a>"));
        assert!(xhtml.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_render_deterministic() {
        let doc = sample_doc();
        let options = RenderOptions::default();
        let first = to_xhtml(&doc, &options).unwrap();
        let second = to_xhtml(&doc, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_without_xml_declaration() {
        let options = RenderOptions::new().with_xml_declaration(false);
        let xhtml = to_xhtml(&sample_doc(), &options).unwrap();
        assert!(xhtml.starts_with("<!DOCTYPE html"));
    }

    #[test]
    fn test_render_list() {
        let mut doc = Document::new();
        doc.add_block(Block::List(
            List::unordered()
                .with_item(vec![Inline::link("first", "http://a.example/")])
                .with_item(vec![Inline::link("second", "http://b.example/")]),
        ));

        let xhtml = to_xhtml(&doc, &RenderOptions::default()).unwrap();
        assert!(xhtml.contains("<ul>\n<li><a href=\"http://a.example/\">first</a></li>"));
        assert!(xhtml.contains("</ul>"));
    }

    #[test]
    fn test_render_image_with_container() {
        let mut doc = Document::new();
        doc.add_block(Block::Image {
            src: "dokutitle.png".to_string(),
            alt: "banner".to_string(),
            width: Some("300px".to_string()),
            container_id: Some("camelgraph".to_string()),
        });

        let xhtml = to_xhtml(&doc, &RenderOptions::default()).unwrap();
        assert!(xhtml.contains(
            "<div id=\"camelgraph\"><img src=\"dokutitle.png\" width=\"300px\" alt=\"banner\" /></div>"
        ));
    }

    #[test]
    fn test_render_scripts_verbatim() {
        let mut doc = Document::new();
        doc.add_block(Block::Script(ScriptRef::inline("var sc_project=5798171;")));
        doc.add_block(Block::Script(ScriptRef::external(
            "http://www.statcounter.com/counter/counter.js",
        )));

        let xhtml = to_xhtml(&doc, &RenderOptions::default()).unwrap();
        assert!(xhtml.contains("<script type=\"text/javascript\">\nvar sc_project=5798171;\n</script>"));
        assert!(xhtml.contains(
            "<script type=\"text/javascript\" src=\"http://www.statcounter.com/counter/counter.js\"></script>"
        ));
    }

    #[test]
    fn test_render_empty_script_fails() {
        let mut doc = Document::new();
        doc.add_block(Block::Script(ScriptRef {
            src: None,
            code: None,
        }));

        let result = to_xhtml(&doc, &RenderOptions::default());
        assert!(matches!(result, Err(Error::EmptyScript)));
    }

    #[test]
    fn test_render_malformed_comment_fails() {
        let mut doc = Document::new();
        doc.add_block(Block::comment("double -- dash"));

        let result = to_xhtml(&doc, &RenderOptions::default());
        assert!(matches!(result, Err(Error::MalformedComment(_))));
    }

    #[test]
    fn test_render_escapes_entities() {
        let mut doc = Document::new();
        doc.add_block(Block::paragraph("developed by Daniel Schröer in München"));

        let xhtml = to_xhtml(&doc, &RenderOptions::default()).unwrap();
        assert!(xhtml.contains("Daniel Schr&ouml;er in M&uuml;nchen"));
        assert!(xhtml.is_ascii());
    }

    #[test]
    fn test_render_with_stats() {
        let result = to_xhtml_with_stats(&sample_doc(), &RenderOptions::default()).unwrap();
        assert_eq!(result.stats.heading_count, 1);
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.link_count, 1);
        assert_eq!(result.metadata.title, "Sample page");
    }

    #[test]
    fn test_heading_level_clamped() {
        let mut doc = Document::new();
        doc.add_block(Block::heading(9, "Too deep"));

        let xhtml = to_xhtml(&doc, &RenderOptions::default()).unwrap();
        assert!(xhtml.contains("<h6>Too deep</h6>"));
    }
}
