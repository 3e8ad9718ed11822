//! Error types for the dokupage library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dokupage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, rendering, or checking a page.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing or deserializing a document.
    #[error("document JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A heading level outside the 1-6 range.
    #[error("heading level {0} is out of range (1-6)")]
    InvalidHeadingLevel(u8),

    /// A hyperlink target that is not a valid URL or relative reference.
    #[error("invalid hyperlink target: {0}")]
    InvalidUrl(String),

    /// A comment containing "--", which cannot appear in XML comments.
    #[error("comment text contains \"--\": {0:?}")]
    MalformedComment(String),

    /// A script block with neither inline code nor an external source.
    #[error("script block has neither source nor code")]
    EmptyScript,

    /// A referenced asset missing from the deployment bundle.
    #[error("asset not found in bundle: {0}")]
    MissingAsset(PathBuf),

    /// The bundle directory itself does not exist.
    #[error("bundle directory not found: {0}")]
    BundleNotFound(PathBuf),

    /// Error during rendering.
    #[error("rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
