//! Document model types for page content representation.
//!
//! This module defines the intermediate representation that bridges page
//! authoring and output rendering. The model is format-agnostic: the same
//! document renders to XHTML, plain text, or JSON.

mod asset;
mod block;
mod document;
mod inline;

pub use asset::{AssetKind, AssetRef};
pub use block::{Block, List, ListItem, ListKind, ScriptRef};
pub use document::{Document, Metadata};
pub use inline::{plain_text, Inline};
