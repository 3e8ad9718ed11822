//! Rendering options and configuration.

/// Options for rendering a document.
///
/// The defaults reproduce the canonical output; rendering the same document
/// with the same options always yields byte-identical bytes.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit the leading `<?xml ... ?>` declaration
    pub xml_declaration: bool,

    /// Character to use for list markers in the plain text projection
    pub list_marker: char,

    /// Collect page statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the XML declaration.
    pub fn with_xml_declaration(mut self, emit: bool) -> Self {
        self.xml_declaration = emit;
        self
    }

    /// Set the list marker character for plain text output.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            list_marker: '-',
            collect_stats: false,
        }
    }
}
