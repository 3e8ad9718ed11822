//! Rendering module for converting documents to output formats.

mod escape;
mod json;
mod options;
mod result;
mod text;
mod xhtml;

pub use escape::{escape_attr, escape_text};
pub use json::{from_json, to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{PageStats, RenderResult};
pub use text::to_text;
pub use xhtml::{to_xhtml, to_xhtml_with_stats, XhtmlRenderer};
